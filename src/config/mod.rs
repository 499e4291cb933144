// ==========================================
// 农场种植规划系统 - 配置层
// ==========================================
// 职责: 定义规划参数与静态数据表的配置对象
// 红线: 配置对象不可变地注入构造函数, 不做全局状态,
//       以保证测试隔离与并行规划互不干扰
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// 数据表别名
// ==========================================

/// 植物名 -> 伴生/相克植物名列表
pub type CompatibilityTable = BTreeMap<String, Vec<String>>;

/// 植物名 -> 占用地块天数
pub type GrowthDurations = BTreeMap<String, i64>;

/// 植物名 -> 各方式的种植月份数据
pub type PlantingCalendar = BTreeMap<String, PlantingTimes>;

// ==========================================
// PlantingTimes - 单植物种植月份数据
// ==========================================
// 月份浮点成对出现: [起, 止] 或 [起1, 止1, 起2, 止2]
// 例: [5.5, 6.5] 表示 5 月中旬至 6 月中旬
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantingTimes {
    #[serde(default)]
    pub start: Vec<f64>,
    #[serde(default)]
    pub transplant: Vec<f64>,
    #[serde(default)]
    pub direct_sow: Vec<f64>,
}

impl PlantingTimes {
    pub fn new(start: &[f64], transplant: &[f64], direct_sow: &[f64]) -> Self {
        Self {
            start: start.to_vec(),
            transplant: transplant.to_vec(),
            direct_sow: direct_sow.to_vec(),
        }
    }
}

// ==========================================
// PlannerConfig - 规划参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 同一地块相邻两茬之间的最小间隔天数
    pub buffer_days: i64,
    /// 生长周期表中查不到的植物使用的默认天数
    pub default_duration_days: i64,
    /// 季末截止月份 (种植不得晚于该日结束)
    pub season_end_month: u32,
    /// 季末截止日
    pub season_end_day: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            buffer_days: crate::domain::timeline::DEFAULT_BUFFER_DAYS,
            default_duration_days: 90,
            season_end_month: 12,
            season_end_day: 15,
        }
    }
}
