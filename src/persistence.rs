// ==========================================
// 农场种植规划系统 - 持久化层
// ==========================================
// 职责: 网格 CSV 与计划 JSON 的存取
// 格式: 网格用纯矩阵 CSV (可直接用表格软件打开),
//       计划用结构化 JSON
// ==========================================

use crate::domain::grid::FarmGrid;
use crate::domain::plan::PlanResult;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 持久化层错误类型
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("单元值解析失败 (行 {row}, 列 {col}): {value}")]
    CellParse {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

// ==========================================
// 网格持久化 (CSV)
// ==========================================

/// 把网格写为 CSV 文件, 每行一排单元
pub fn save_grid_csv(grid: &FarmGrid, path: &Path) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for row in grid.cells() {
        let record: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    info!(path = %path.display(), "网格已保存");
    Ok(())
}

/// 从 save_grid_csv 产出的 CSV 文件读回网格
pub fn load_grid_csv(path: &Path) -> Result<FarmGrid, PersistenceError> {
    if !path.exists() {
        return Err(PersistenceError::FileNotFound(path.display().to_string()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut matrix: Vec<Vec<u8>> = Vec::new();
    for (r, record) in reader.records().enumerate() {
        let record = record?;
        let mut row = Vec::with_capacity(record.len());
        for (c, field) in record.iter().enumerate() {
            let value = field.trim().parse::<u8>().map_err(|_| {
                PersistenceError::CellParse {
                    row: r,
                    col: c,
                    value: field.to_string(),
                }
            })?;
            row.push(value);
        }
        matrix.push(row);
    }
    Ok(FarmGrid::from_matrix(&matrix))
}

// ==========================================
// 计划持久化 (JSON)
// ==========================================

/// 把年度计划写为 JSON 文件
pub fn save_plan_json(plan: &PlanResult, path: &Path) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    info!(path = %path.display(), year = plan.year, "计划已保存");
    Ok(())
}

/// 从 JSON 文件读回年度计划
pub fn load_plan_json(path: &Path) -> Result<PlanResult, PersistenceError> {
    if !path.exists() {
        return Err(PersistenceError::FileNotFound(path.display().to_string()));
    }
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
