// ==========================================
// 农场种植规划系统 - 核心库
// ==========================================
// 技术栈: Rust + chrono + serde
// 系统定位: 时间感知的种植排产核心
//   - 地块占用时间线 (轮作缓冲)
//   - 最受约束优先的分配启发式
//   - 相邻地块伴生/相克相容性评分
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排产与评分规则
pub mod engine;

// 配置层 - 规划参数与数据表
pub mod config;

// 内置默认数据集
pub mod dataset;

// 导入层 - 外部数据
pub mod importer;

// 持久化层 - 网格/计划文件
pub mod persistence;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{PlantingMethod, PlantingWindow, PlotId};

// 领域实体
pub use domain::{
    AdjacencyEvent, FarmGrid, FarmTimeline, GridError, Placement, PlanResult, PlotEntry,
    PlotLayout, PlotTimeline, DEFAULT_BUFFER_DAYS,
};

// 引擎
pub use engine::{
    all_planting_windows, best_planting_window, month_float_to_date, normalize_plant_name,
    parse_planting_windows, CompatibilityIndex, FarmPlanner,
};

// 配置
pub use config::{
    CompatibilityTable, GrowthDurations, PlannerConfig, PlantingCalendar, PlantingTimes,
};

// 导入与持久化
pub use importer::ImportError;
pub use persistence::PersistenceError;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "农场种植规划系统";

// ==========================================
// 预编译检查
// ==========================================
