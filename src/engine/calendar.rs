// ==========================================
// 农场种植规划系统 - 日历换算
// ==========================================
// 职责: 把种植月份浮点数据换算为具体日历日期
// 约定: 1.0 -> 1月1日, 1.5 -> 1月15日, 5.5 -> 5月15日
//       >=13.0 -> 12月31日 (大蒜等跨年窗口的溢出记法)
// ==========================================

use crate::config::PlantingTimes;
use crate::domain::types::{PlantingMethod, PlantingWindow};
use chrono::{Datelike, NaiveDate};

/// 指定年月的天数
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// 月份浮点 -> 日历日期
///
/// 整月取 1 日; 小数 <=0.25 取 8 日; <=0.5 取 15 日;
/// 其余按比例折算并钳制到月末; >=13.0 固定为 12 月 31 日
pub fn month_float_to_date(month_float: f64, year: i32) -> NaiveDate {
    if month_float >= 13.0 {
        return NaiveDate::from_ymd_opt(year, 12, 31).expect("12月31日恒为合法日期");
    }

    let whole = month_float.trunc();
    let month = (whole as i64).clamp(1, 12) as u32;
    let fraction = month_float - whole;
    let dim = days_in_month(year, month);

    let day = if fraction == 0.0 {
        1
    } else if fraction <= 0.25 {
        8
    } else if fraction <= 0.5 {
        15
    } else {
        ((1.0 + fraction * dim as f64) as u32).min(dim)
    };

    NaiveDate::from_ymd_opt(year, month, day).expect("月份与日期已钳制在合法范围内")
}

/// 把成对的月份浮点列表解析为结构化种植窗口
///
/// 输入形如 [起1, 止1] 或 [起1, 止1, 起2, 止2] (春/秋两季)
pub fn parse_planting_windows(
    date_list: &[f64],
    method: PlantingMethod,
    year: i32,
) -> Vec<PlantingWindow> {
    date_list
        .chunks_exact(2)
        .map(|pair| PlantingWindow {
            method,
            start: month_float_to_date(pair[0], year),
            end: month_float_to_date(pair[1], year),
        })
        .collect()
}

/// 一个植物全部方式的种植窗口, 按开始日期升序
pub fn all_planting_windows(times: &PlantingTimes, year: i32) -> Vec<PlantingWindow> {
    let mut windows = Vec::new();
    windows.extend(parse_planting_windows(&times.start, PlantingMethod::Start, year));
    windows.extend(parse_planting_windows(
        &times.transplant,
        PlantingMethod::Transplant,
        year,
    ));
    windows.extend(parse_planting_windows(
        &times.direct_sow,
        PlantingMethod::DirectSow,
        year,
    ));
    windows.sort_by_key(|w| w.start);
    windows
}

/// 选出单个最佳种植窗口
///
/// 方式优先级: 移栽 > 直播 > 育苗 (育苗缺少移栽步骤, 最次)
pub fn best_planting_window(times: &PlantingTimes, year: i32) -> Option<PlantingWindow> {
    for (dates, method) in [
        (&times.transplant, PlantingMethod::Transplant),
        (&times.direct_sow, PlantingMethod::DirectSow),
        (&times.start, PlantingMethod::Start),
    ] {
        let windows = parse_planting_windows(dates, method, year);
        if let Some(first) = windows.into_iter().next() {
            return Some(first);
        }
    }
    None
}
