// ==========================================
// 农场种植规划系统 - 地块网格
// ==========================================
// 职责: 用二维单元矩阵表示农场布局
// 单元取值: 255=边界外, 0=未分配, 1-254=地块编号
// 红线: 网格负责地块编号合法性, 排产核心不做校验
// ==========================================

use crate::domain::types::PlotId;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// 网格层错误类型
#[derive(Error, Debug)]
pub enum GridError {
    #[error("单元 ({row}, {col}) 超出 {width}x{height} 网格范围")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

// ==========================================
// PlotLayout - 地块布局能力
// ==========================================
// 排产核心依赖的网格接口: 地块全集 + 相邻关系
// 相邻关系对称, 默认四连通, 但对排产核心不透明
pub trait PlotLayout {
    /// 所有地块编号 (升序)
    fn plot_ids(&self) -> Vec<PlotId>;

    /// 与指定地块共边的地块集合
    fn adjacent_plots(&self, plot_id: PlotId) -> BTreeSet<PlotId>;
}

impl<T: PlotLayout + ?Sized> PlotLayout for &T {
    fn plot_ids(&self) -> Vec<PlotId> {
        (**self).plot_ids()
    }

    fn adjacent_plots(&self, plot_id: PlotId) -> BTreeSet<PlotId> {
        (**self).adjacent_plots(plot_id)
    }
}

// ==========================================
// FarmGrid - 农场网格
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<u8>>,
}

impl FarmGrid {
    /// 边界外单元
    pub const INVALID: u8 = 255;
    /// 有效但尚未划入地块的单元
    pub const UNASSIGNED: u8 = 0;

    /// 创建全部为边界外单元的网格
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Self::INVALID; width]; height],
        }
    }

    /// 从已有矩阵创建网格 (按行排列, 深拷贝)
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Self {
        let height = matrix.len();
        let width = matrix.first().map(|r| r.len()).unwrap_or(0);
        Self {
            width,
            height,
            cells: matrix.to_vec(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Vec<u8>] {
        &self.cells
    }

    // ==========================================
    // 单元访问
    // ==========================================

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// 设置单元值
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = value;
        Ok(())
    }

    /// 读取单元值
    pub fn get_cell(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    // ==========================================
    // 地块查询
    // ==========================================

    /// 属于指定地块的所有 (row, col) 单元
    pub fn plot_cells(&self, plot_id: PlotId) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == plot_id {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// 是否仍存在未分配单元
    pub fn has_unassigned(&self) -> bool {
        self.cells
            .iter()
            .any(|row| row.iter().any(|&v| v == Self::UNASSIGNED))
    }

    /// 所有地块编号到相邻地块集合的映射
    pub fn adjacency_map(&self) -> BTreeMap<PlotId, BTreeSet<PlotId>> {
        self.plot_ids()
            .into_iter()
            .map(|pid| (pid, self.adjacent_plots(pid)))
            .collect()
    }

    // ==========================================
    // 显示
    // ==========================================

    /// 网格的可读字符串, 边界外单元显示为 '.'
    pub fn display(&self) -> String {
        let max_val = self
            .cells
            .iter()
            .flatten()
            .filter(|&&v| v != Self::INVALID)
            .max()
            .copied()
            .unwrap_or(0);
        let w = max_val.to_string().len().max(3);

        let mut lines = Vec::with_capacity(self.height);
        for row in &self.cells {
            let parts: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == Self::INVALID {
                        format!("{:>w$}", ".", w = w)
                    } else {
                        format!("{:>w$}", v, w = w)
                    }
                })
                .collect();
            lines.push(parts.join(" "));
        }
        lines.join("\n")
    }
}

impl PlotLayout for FarmGrid {
    fn plot_ids(&self) -> Vec<PlotId> {
        let mut ids: BTreeSet<PlotId> = BTreeSet::new();
        for row in &self.cells {
            for &v in row {
                if v != Self::INVALID && v != Self::UNASSIGNED {
                    ids.insert(v);
                }
            }
        }
        ids.into_iter().collect()
    }

    /// 四连通 (上/下/左/右) 共边地块
    fn adjacent_plots(&self, plot_id: PlotId) -> BTreeSet<PlotId> {
        let mut adjacent = BTreeSet::new();
        for (r, c) in self.plot_cells(plot_id) {
            for (dr, dc) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
                let nr = r as i64 + dr;
                let nc = c as i64 + dc;
                if nr < 0 || nc < 0 || nr >= self.height as i64 || nc >= self.width as i64 {
                    continue;
                }
                let neighbor = self.cells[nr as usize][nc as usize];
                if neighbor != Self::INVALID && neighbor != Self::UNASSIGNED && neighbor != plot_id
                {
                    adjacent.insert(neighbor);
                }
            }
        }
        adjacent
    }
}
