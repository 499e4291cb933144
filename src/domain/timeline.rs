// ==========================================
// 农场种植规划系统 - 占用时间线
// ==========================================
// 职责: 记录每块地块全年的种植占用区间
// 红线: 同一地块的条目在 [start,end) 上永不重叠,
//       相邻两次占用之间保持整地缓冲天数
// ==========================================

use crate::domain::grid::PlotLayout;
use crate::domain::types::{PlantingMethod, PlotId};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 同一地块相邻两茬之间的最小间隔天数 (清园/翻整)
pub const DEFAULT_BUFFER_DAYS: i64 = 7;

// ==========================================
// PlotEntry - 地块占用条目
// ==========================================
// end 为排他端点: 占用区间是 [start, end)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotEntry {
    pub plant: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub method: PlantingMethod,
}

impl PlotEntry {
    /// 是否与 [start, end) 相交
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start < end && self.end > start
    }
}

// ==========================================
// PlotTimeline - 单地块时间线
// ==========================================
#[derive(Debug, Clone)]
pub struct PlotTimeline {
    plot_id: PlotId,
    buffer_days: i64,
    entries: Vec<PlotEntry>,
}

impl PlotTimeline {
    pub fn new(plot_id: PlotId) -> Self {
        Self::with_buffer(plot_id, DEFAULT_BUFFER_DAYS)
    }

    pub fn with_buffer(plot_id: PlotId, buffer_days: i64) -> Self {
        Self {
            plot_id,
            buffer_days,
            entries: Vec::new(),
        }
    }

    pub fn plot_id(&self) -> PlotId {
        self.plot_id
    }

    pub fn buffer_days(&self) -> i64 {
        self.buffer_days
    }

    /// 按开始日期升序的占用条目
    pub fn entries(&self) -> &[PlotEntry] {
        &self.entries
    }

    /// 记录一次种植, 插入后按开始日期重新排序
    ///
    /// 本方法不做重叠校验, 调用方必须先用 `is_free_during` 确认空闲
    pub fn add(&mut self, plant: &str, start: NaiveDate, end: NaiveDate, method: PlantingMethod) {
        self.entries.push(PlotEntry {
            plant: plant.to_string(),
            start,
            end,
            method,
        });
        self.entries.sort_by_key(|e| e.start);
    }

    /// 自 target 起地块首次空闲的日期 (含缓冲天数)
    ///
    /// 单趟升序扫描, 仅在条目不重叠且升序时收敛;
    /// 该前提由插入前的空闲校验保证
    pub fn earliest_free_after(&self, target: NaiveDate) -> NaiveDate {
        let buffer = Duration::days(self.buffer_days);
        let mut result = target;
        for e in &self.entries {
            let buffer_end = e.end + buffer;
            if e.start <= result && result < buffer_end {
                result = buffer_end;
            }
        }
        result
    }

    /// [start, end) 上没有任何条目相交时为 true
    pub fn is_free_during(&self, start: NaiveDate, end: NaiveDate) -> bool {
        !self.entries.iter().any(|e| e.overlaps(start, end))
    }

    /// 指定日期占用该地块的植物名, 无则为 None
    pub fn plant_at(&self, date: NaiveDate) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.start <= date && date < e.end)
            .map(|e| e.plant.as_str())
    }

    /// 与 [start, end) 相交的全部条目
    pub fn overlapping_entries(&self, start: NaiveDate, end: NaiveDate) -> Vec<&PlotEntry> {
        self.entries.iter().filter(|e| e.overlaps(start, end)).collect()
    }
}

// ==========================================
// FarmTimeline - 全场时间线
// ==========================================
// 地块全集与相邻关系在构造时从布局快照固定,
// 单次规划期间不再变化
#[derive(Debug, Clone)]
pub struct FarmTimeline {
    timelines: BTreeMap<PlotId, PlotTimeline>,
    adjacency: BTreeMap<PlotId, BTreeSet<PlotId>>,
}

impl FarmTimeline {
    pub fn new(layout: &dyn PlotLayout) -> Self {
        Self::with_buffer(layout, DEFAULT_BUFFER_DAYS)
    }

    pub fn with_buffer(layout: &dyn PlotLayout, buffer_days: i64) -> Self {
        let plot_ids = layout.plot_ids();
        let timelines = plot_ids
            .iter()
            .map(|&pid| (pid, PlotTimeline::with_buffer(pid, buffer_days)))
            .collect();
        let adjacency = plot_ids
            .iter()
            .map(|&pid| (pid, layout.adjacent_plots(pid)))
            .collect();
        Self {
            timelines,
            adjacency,
        }
    }

    /// 按地块编号升序遍历各地块时间线
    pub fn timelines(&self) -> impl Iterator<Item = (&PlotId, &PlotTimeline)> {
        self.timelines.iter()
    }

    pub fn plot_timeline(&self, plot_id: PlotId) -> Option<&PlotTimeline> {
        self.timelines.get(&plot_id)
    }

    /// 快照中记录的相邻地块集合
    pub fn adjacent_plots(&self, plot_id: PlotId) -> Option<&BTreeSet<PlotId>> {
        self.adjacency.get(&plot_id)
    }

    /// 向指定地块记录一次种植, 未知地块编号静默忽略
    pub fn add(
        &mut self,
        plot_id: PlotId,
        plant: &str,
        start: NaiveDate,
        end: NaiveDate,
        method: PlantingMethod,
    ) {
        if let Some(tl) = self.timelines.get_mut(&plot_id) {
            tl.add(plant, start, end, method);
        }
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 单日快照: 地块编号 -> 当日占用的植物名
    pub fn snapshot(&self, date: NaiveDate) -> BTreeMap<PlotId, Option<String>> {
        self.timelines
            .iter()
            .map(|(&pid, tl)| (pid, tl.plant_at(date).map(str::to_string)))
            .collect()
    }

    /// 相邻地块上与 [start, end) 时段重叠的植物名
    ///
    /// 不同相邻地块上的同名植物会重复出现, 由调用方按需去重
    pub fn adjacent_plants_during(
        &self,
        plot_id: PlotId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<String> {
        let mut plants = Vec::new();
        let Some(adjacent) = self.adjacency.get(&plot_id) else {
            return plants;
        };
        for adj_id in adjacent {
            if let Some(tl) = self.timelines.get(adj_id) {
                for e in tl.overlapping_entries(start, end) {
                    plants.push(e.plant.clone());
                }
            }
        }
        plants
    }

    // ==========================================
    // 序列化
    // ==========================================

    /// 导出为 地块编号 -> 有序条目列表, 供持久化与展示
    pub fn serialize(&self) -> BTreeMap<PlotId, Vec<PlotEntry>> {
        self.timelines
            .iter()
            .map(|(&pid, tl)| (pid, tl.entries.clone()))
            .collect()
    }
}
