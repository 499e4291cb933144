// ==========================================
// 农场种植规划系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含排产算法逻辑, 不含文件访问逻辑
// ==========================================

pub mod grid;
pub mod plan;
pub mod timeline;
pub mod types;

// 重导出核心类型
pub use grid::{FarmGrid, GridError, PlotLayout};
pub use plan::{AdjacencyEvent, Placement, PlanResult};
pub use timeline::{FarmTimeline, PlotEntry, PlotTimeline, DEFAULT_BUFFER_DAYS};
pub use types::{PlantingMethod, PlantingWindow, PlotId};
