// ==========================================
// 农场种植规划系统 - 引擎层
// ==========================================
// 职责: 实现排产与评分的业务规则
// 红线: 引擎不做 IO, 静态数据经构造函数注入
// ==========================================

pub mod calendar;
pub mod compatibility;
pub mod planner;

// 重导出核心引擎
pub use calendar::{
    all_planting_windows, best_planting_window, month_float_to_date, parse_planting_windows,
};
pub use compatibility::{normalize_plant_name, CompatibilityIndex};
pub use planner::FarmPlanner;
