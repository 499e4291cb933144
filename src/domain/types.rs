// ==========================================
// 农场种植规划系统 - 领域类型定义
// ==========================================
// 职责: 定义跨模块共享的基础类型
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 地块标识 (Plot ID)
// ==========================================
// 网格单元取值 1-254 即地块编号, 0/255 为保留值
pub type PlotId = u8;

// ==========================================
// 种植方式 (Planting Method)
// ==========================================
// 序列化格式: snake_case (与计划 JSON 一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantingMethod {
    Start,      // 室内育苗 (不占用地块)
    Transplant, // 移栽定植
    DirectSow,  // 露地直播
}

impl PlantingMethod {
    /// 是否占用地块空间
    ///
    /// 室内育苗不占用地块, 排产时只考虑移栽与直播窗口
    pub fn occupies_plot(&self) -> bool {
        matches!(self, PlantingMethod::Transplant | PlantingMethod::DirectSow)
    }
}

impl fmt::Display for PlantingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlantingMethod::Start => write!(f, "start"),
            PlantingMethod::Transplant => write!(f, "transplant"),
            PlantingMethod::DirectSow => write!(f, "direct_sow"),
        }
    }
}

// ==========================================
// 种植窗口 (Planting Window)
// ==========================================
// 由日历换算工具从月份浮点数据生成, 排产核心只消费
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantingWindow {
    pub method: PlantingMethod,
    pub start: NaiveDate,
    pub end: NaiveDate,
}
