// ==========================================
// 占用时间线集成测试
// ==========================================
// 测试目标: 验证单地块/全场时间线的占用与查询逻辑
// 覆盖范围: 排序插入、缓冲空闲查询、半开区间、快照
// ==========================================

use chrono::NaiveDate;
use farm_planner::{FarmGrid, FarmTimeline, PlantingMethod, PlotTimeline};

// ==========================================
// 测试辅助函数
// ==========================================

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 两块相邻地块的最小网格
fn two_plot_grid() -> FarmGrid {
    FarmGrid::from_matrix(&[vec![1, 2]])
}

// ==========================================
// PlotTimeline
// ==========================================

#[test]
fn test_add_keeps_entries_sorted_by_start() {
    let mut tl = PlotTimeline::new(1);
    tl.add("Beans", d(2026, 6, 1), d(2026, 8, 5), PlantingMethod::DirectSow);
    tl.add("Radish", d(2026, 2, 1), d(2026, 3, 3), PlantingMethod::DirectSow);

    let entries = tl.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].plant, "Radish");
    assert_eq!(entries[1].plant, "Beans");
}

#[test]
fn test_earliest_free_after_empty_timeline() {
    let tl = PlotTimeline::new(1);
    assert_eq!(tl.earliest_free_after(d(2026, 4, 1)), d(2026, 4, 1));
}

#[test]
fn test_earliest_free_after_honors_buffer() {
    let mut tl = PlotTimeline::new(1);
    tl.add("Lettuce", d(2026, 4, 1), d(2026, 5, 21), PlantingMethod::DirectSow);

    // 占用中: 推进到 条目结束 + 7 天缓冲
    assert_eq!(tl.earliest_free_after(d(2026, 4, 15)), d(2026, 5, 28));
    // 占用前: 不受影响
    assert_eq!(tl.earliest_free_after(d(2026, 3, 1)), d(2026, 3, 1));
    // 缓冲期内: 仍然推进
    assert_eq!(tl.earliest_free_after(d(2026, 5, 25)), d(2026, 5, 28));
    // 缓冲期后: 原样返回
    assert_eq!(tl.earliest_free_after(d(2026, 5, 28)), d(2026, 5, 28));
}

#[test]
fn test_earliest_free_after_chains_through_successive_entries() {
    let mut tl = PlotTimeline::new(1);
    tl.add("Radish", d(2026, 3, 1), d(2026, 3, 31), PlantingMethod::DirectSow);
    tl.add("Beans", d(2026, 4, 7), d(2026, 6, 11), PlantingMethod::DirectSow);

    // 第一茬推进落入第二茬, 单趟扫描继续推进
    assert_eq!(tl.earliest_free_after(d(2026, 3, 10)), d(2026, 6, 18));
}

#[test]
fn test_earliest_free_after_custom_buffer() {
    let mut tl = PlotTimeline::with_buffer(1, 0);
    tl.add("Radish", d(2026, 3, 1), d(2026, 3, 31), PlantingMethod::DirectSow);
    assert_eq!(tl.earliest_free_after(d(2026, 3, 1)), d(2026, 3, 31));
}

#[test]
fn test_is_free_during_half_open_interval() {
    let mut tl = PlotTimeline::new(1);
    tl.add("Corn", d(2026, 5, 15), d(2026, 8, 8), PlantingMethod::DirectSow);

    // 相交
    assert!(!tl.is_free_during(d(2026, 6, 1), d(2026, 7, 1)));
    assert!(!tl.is_free_during(d(2026, 4, 1), d(2026, 5, 16)));
    // 端点相接不算相交 (end 排他)
    assert!(tl.is_free_during(d(2026, 8, 8), d(2026, 9, 1)));
    assert!(tl.is_free_during(d(2026, 4, 1), d(2026, 5, 15)));
}

#[test]
fn test_plant_at_boundaries() {
    let mut tl = PlotTimeline::new(1);
    tl.add("Corn", d(2026, 5, 15), d(2026, 8, 8), PlantingMethod::DirectSow);

    assert_eq!(tl.plant_at(d(2026, 5, 15)), Some("Corn"));
    assert_eq!(tl.plant_at(d(2026, 7, 1)), Some("Corn"));
    // end 排他
    assert_eq!(tl.plant_at(d(2026, 8, 8)), None);
    assert_eq!(tl.plant_at(d(2026, 5, 14)), None);
}

#[test]
fn test_overlapping_entries() {
    let mut tl = PlotTimeline::new(1);
    tl.add("Radish", d(2026, 3, 1), d(2026, 3, 31), PlantingMethod::DirectSow);
    tl.add("Beans", d(2026, 5, 15), d(2026, 7, 19), PlantingMethod::DirectSow);

    let hits = tl.overlapping_entries(d(2026, 3, 15), d(2026, 6, 1));
    assert_eq!(hits.len(), 2);

    let hits = tl.overlapping_entries(d(2026, 4, 1), d(2026, 5, 15));
    assert!(hits.is_empty());
}

// ==========================================
// FarmTimeline
// ==========================================

#[test]
fn test_snapshot_per_plot() {
    let grid = two_plot_grid();
    let mut timeline = FarmTimeline::new(&grid);
    timeline.add(1, "Tomatoes", d(2026, 5, 1), d(2026, 8, 9), PlantingMethod::Transplant);

    let snap = timeline.snapshot(d(2026, 6, 1));
    assert_eq!(snap.get(&1).unwrap().as_deref(), Some("Tomatoes"));
    assert_eq!(snap.get(&2).unwrap().as_deref(), None);

    let snap = timeline.snapshot(d(2026, 9, 1));
    assert_eq!(snap.get(&1).unwrap().as_deref(), None);
}

#[test]
fn test_adjacent_plants_during_keeps_duplicates() {
    // 三块一排: 2 与 1、3 均相邻
    let grid = FarmGrid::from_matrix(&[vec![1, 2, 3]]);
    let mut timeline = FarmTimeline::new(&grid);
    timeline.add(1, "Beans", d(2026, 5, 15), d(2026, 7, 19), PlantingMethod::DirectSow);
    timeline.add(3, "Beans", d(2026, 6, 1), d(2026, 8, 5), PlantingMethod::DirectSow);

    let plants = timeline.adjacent_plants_during(2, d(2026, 6, 1), d(2026, 7, 1));
    // 不同相邻地块上的同名植物各出现一次, 由调用方去重
    assert_eq!(plants, vec!["Beans".to_string(), "Beans".to_string()]);
}

#[test]
fn test_add_to_unknown_plot_is_ignored() {
    let grid = two_plot_grid();
    let mut timeline = FarmTimeline::new(&grid);
    timeline.add(99, "Tomatoes", d(2026, 5, 1), d(2026, 8, 9), PlantingMethod::Transplant);

    let serialized = timeline.serialize();
    assert!(!serialized.contains_key(&99));
    assert!(serialized.values().all(|entries| entries.is_empty()));
}

#[test]
fn test_serialize_keyed_by_plot_with_sorted_entries() {
    let grid = two_plot_grid();
    let mut timeline = FarmTimeline::new(&grid);
    timeline.add(2, "Beans", d(2026, 6, 1), d(2026, 8, 5), PlantingMethod::DirectSow);
    timeline.add(2, "Radish", d(2026, 2, 1), d(2026, 3, 3), PlantingMethod::DirectSow);

    let serialized = timeline.serialize();
    assert_eq!(serialized.len(), 2);
    assert!(serialized.get(&1).unwrap().is_empty());

    let plot2 = serialized.get(&2).unwrap();
    assert_eq!(plot2[0].plant, "Radish");
    assert_eq!(plot2[1].plant, "Beans");
}
