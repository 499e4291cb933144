// ==========================================
// 日历换算集成测试
// ==========================================
// 测试目标: 验证月份浮点到日历日期的换算与窗口解析
// 覆盖范围: 锚点值、比例折算、溢出记法、方式优先级
// ==========================================

use chrono::NaiveDate;
use farm_planner::{
    all_planting_windows, best_planting_window, month_float_to_date, parse_planting_windows,
    PlantingMethod, PlantingTimes,
};

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ==========================================
// 月份浮点换算
// ==========================================

#[test]
fn test_whole_month_maps_to_first_day() {
    assert_eq!(month_float_to_date(1.0, 2026), d(2026, 1, 1));
    assert_eq!(month_float_to_date(9.0, 2026), d(2026, 9, 1));
}

#[test]
fn test_mid_month_anchor() {
    // 规格锚点: 5.5 -> 2026年5月15日
    assert_eq!(month_float_to_date(5.5, 2026), d(2026, 5, 15));
    assert_eq!(month_float_to_date(1.5, 2026), d(2026, 1, 15));
}

#[test]
fn test_early_month_fraction() {
    assert_eq!(month_float_to_date(2.25, 2026), d(2026, 2, 8));
    assert_eq!(month_float_to_date(8.25, 2026), d(2026, 8, 8));
}

#[test]
fn test_late_month_fraction_is_proportional() {
    // 1.75: day = 1 + 0.75 * 31 = 24 (取整)
    assert_eq!(month_float_to_date(1.75, 2026), d(2026, 1, 24));
    // 4.75: day = 1 + 0.75 * 30 = 23
    assert_eq!(month_float_to_date(4.75, 2026), d(2026, 4, 23));
}

#[test]
fn test_overflow_notation_means_december_31() {
    // 规格锚点: 13.0 -> 2026年12月31日 (大蒜等跨年窗口)
    assert_eq!(month_float_to_date(13.0, 2026), d(2026, 12, 31));
    assert_eq!(month_float_to_date(14.5, 2026), d(2026, 12, 31));
}

// ==========================================
// 窗口解析
// ==========================================

#[test]
fn test_parse_single_window() {
    let windows = parse_planting_windows(&[5.5, 6.5], PlantingMethod::DirectSow, 2026);
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].method, PlantingMethod::DirectSow);
    assert_eq!(windows[0].start, d(2026, 5, 15));
    assert_eq!(windows[0].end, d(2026, 6, 15));
}

#[test]
fn test_parse_spring_and_fall_windows() {
    let windows = parse_planting_windows(&[2.0, 4.5, 9.0, 11.0], PlantingMethod::DirectSow, 2026);
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].start, d(2026, 2, 1));
    assert_eq!(windows[0].end, d(2026, 4, 15));
    assert_eq!(windows[1].start, d(2026, 9, 1));
    assert_eq!(windows[1].end, d(2026, 11, 1));
}

#[test]
fn test_parse_ignores_trailing_unpaired_value() {
    let windows = parse_planting_windows(&[5.5], PlantingMethod::DirectSow, 2026);
    assert!(windows.is_empty());
}

#[test]
fn test_all_planting_windows_sorted_across_methods() {
    let times = PlantingTimes::new(&[3.0, 4.5], &[4.5, 6.5], &[5.5, 6.5]);
    let windows = all_planting_windows(&times, 2026);
    assert_eq!(windows.len(), 3);
    assert_eq!(windows[0].method, PlantingMethod::Start);
    assert_eq!(windows[1].method, PlantingMethod::Transplant);
    assert_eq!(windows[2].method, PlantingMethod::DirectSow);
    assert!(windows.windows(2).all(|w| w[0].start <= w[1].start));
}

// ==========================================
// 最佳方式选择
// ==========================================

#[test]
fn test_best_window_prefers_transplant() {
    let times = PlantingTimes::new(&[3.0, 4.5], &[4.5, 6.5], &[5.5, 6.5]);
    let best = best_planting_window(&times, 2026).unwrap();
    assert_eq!(best.method, PlantingMethod::Transplant);
}

#[test]
fn test_best_window_falls_back_to_direct_sow_then_start() {
    let times = PlantingTimes::new(&[3.0, 4.5], &[], &[5.5, 6.5]);
    let best = best_planting_window(&times, 2026).unwrap();
    assert_eq!(best.method, PlantingMethod::DirectSow);

    let times = PlantingTimes::new(&[3.0, 4.5], &[], &[]);
    let best = best_planting_window(&times, 2026).unwrap();
    assert_eq!(best.method, PlantingMethod::Start);

    assert!(best_planting_window(&PlantingTimes::default(), 2026).is_none());
}
