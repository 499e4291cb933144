// ==========================================
// 农场种植规划系统 - 规划结果实体
// ==========================================
// 职责: 定义规划产出的不可变结果结构
// 红线: PlanResult 返回后不再被修改
// ==========================================

use crate::domain::timeline::PlotEntry;
use crate::domain::types::{PlantingMethod, PlotId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Placement - 已分配的种植位
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub plant: String,
    pub plot_id: PlotId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub method: PlantingMethod,
    /// 分配时刻对相邻在地植物的相容性得分
    pub score: i32,
}

// ==========================================
// AdjacencyEvent - 相邻互作事件
// ==========================================
// 记录两块相邻地块上同时在地的一对植物
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyEvent {
    pub plot_a: PlotId,
    pub plot_b: PlotId,
    pub plant_a: String,
    pub plant_b: String,
    pub overlap_start: NaiveDate,
    pub overlap_end: NaiveDate,
    pub compatibility: i32,
}

// ==========================================
// PlanResult - 年度规划结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    pub year: i32,
    /// 用户选定的植物 (排名顺序, 越靠前优先级越高)
    pub selected_plants: Vec<String>,
    /// 地块编号 -> 有序占用条目
    pub timeline: BTreeMap<PlotId, Vec<PlotEntry>>,
    pub assigned: Vec<Placement>,
    pub unassigned_plants: Vec<String>,
    pub adjacency_events: Vec<AdjacencyEvent>,
    /// 全年相邻相容性总分 (每对互作只计一次)
    pub score: i32,
}
