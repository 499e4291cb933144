// ==========================================
// 农场种植规划系统 - 数据导入层
// ==========================================
// 职责: 从外部 JSON 文件加载三类静态数据表
// 红线: 导入错误在此层结构化上报, 不进入排产核心
// ==========================================

use crate::config::{CompatibilityTable, GrowthDurations, PlantingCalendar};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// 伴生/相克数据文件结构
#[derive(Debug, Deserialize)]
pub struct CompatibilityDataset {
    pub compatible: CompatibilityTable,
    pub incompatible: CompatibilityTable,
}

fn read_file(path: &Path) -> Result<String, ImportError> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

/// 加载种植日历
///
/// 文件格式: 植物名 -> {"start": [...], "transplant": [...], "direct_sow": [...]}
/// 月份为成对的浮点数 (起, 止)
pub fn load_planting_calendar(path: &Path) -> Result<PlantingCalendar, ImportError> {
    let calendar: PlantingCalendar = serde_json::from_str(&read_file(path)?)?;
    info!(plants = calendar.len(), path = %path.display(), "种植日历加载完成");
    Ok(calendar)
}

/// 加载生长周期表 (植物名 -> 天数)
pub fn load_growth_durations(path: &Path) -> Result<GrowthDurations, ImportError> {
    let durations: GrowthDurations = serde_json::from_str(&read_file(path)?)?;
    info!(plants = durations.len(), path = %path.display(), "生长周期表加载完成");
    Ok(durations)
}

/// 加载伴生/相克关系表
///
/// 文件格式: {"compatible": {...}, "incompatible": {...}}
pub fn load_compatibility_tables(
    path: &Path,
) -> Result<(CompatibilityTable, CompatibilityTable), ImportError> {
    let dataset: CompatibilityDataset = serde_json::from_str(&read_file(path)?)?;
    info!(
        compatible = dataset.compatible.len(),
        incompatible = dataset.incompatible.len(),
        path = %path.display(),
        "伴生关系表加载完成"
    );
    Ok((dataset.compatible, dataset.incompatible))
}
