// ==========================================
// 农场种植规划系统 - 演示主入口
// ==========================================
// 流程: 构建示例网格 -> 运行时间感知规划 ->
//       展示时间线/相邻互作/逐月快照 -> 保存计划 JSON
// ==========================================

use anyhow::Result;
use chrono::NaiveDate;
use farm_planner::{
    dataset, logging, persistence, CompatibilityIndex, FarmGrid, FarmPlanner, FarmTimeline,
    PlanResult, PlotId, PlotLayout,
};
use std::path::Path;

// ==========================================
// 展示辅助
// ==========================================

/// 打印年度计划
fn display_timeline(plan: &PlanResult) {
    println!("\n{}", "=".repeat(60));
    println!("  农场种植计划 — {}", plan.year);
    println!("{}", "=".repeat(60));

    println!("\n选定植物 (按排名): {}", plan.selected_plants.join(", "));
    println!("相容性总分: {}", plan.score);

    if !plan.unassigned_plants.is_empty() {
        println!("未能排入: {}", plan.unassigned_plants.join(", "));
    }

    println!("\n--- 各地块时间线 ---");
    for (plot_id, entries) in &plan.timeline {
        if entries.is_empty() {
            println!("\n  地块 {}: (空)", plot_id);
            continue;
        }
        println!("\n  地块 {}:", plot_id);
        for e in entries {
            println!(
                "    {}  至  {}  |  {:16}  ({})",
                e.start, e.end, e.plant, e.method
            );
        }
    }

    if !plan.adjacency_events.is_empty() {
        println!("\n--- 相邻互作 ---");
        for ev in &plan.adjacency_events {
            let tag = match ev.compatibility {
                s if s > 0 => "伴生",
                s if s < 0 => "相克",
                _ => "中性",
            };
            println!(
                "  地块 {} ({}) <-> 地块 {} ({}):  {} ({:+})  {} 至 {}",
                ev.plot_a,
                ev.plant_a,
                ev.plot_b,
                ev.plant_b,
                tag,
                ev.compatibility,
                ev.overlap_start,
                ev.overlap_end
            );
        }
    }
    println!();
}

/// 每月 1 日的全场快照 (逐月浏览视图的数据)
fn display_snapshots(timeline: &FarmTimeline, plot_ids: &[PlotId], year: i32) {
    println!("--- 逐月快照 ---");
    println!("(每月 1 日各地块的在地植物)\n");

    let col_w = 14;
    let mut header = format!("{:12}", "日期");
    for pid in plot_ids {
        header.push_str(&format!("{:<col_w$}", format!("地块 {}", pid)));
    }
    println!("{}", header);
    println!("{}", "-".repeat(header.chars().count() + col_w / 2));

    for month in 1..=12u32 {
        let Some(d) = NaiveDate::from_ymd_opt(year, month, 1) else {
            continue;
        };
        let snap = timeline.snapshot(d);
        let mut row = format!("{:12}", d.format("%m-%d").to_string());
        for pid in plot_ids {
            let plant = snap.get(pid).and_then(|p| p.clone());
            row.push_str(&format!("{:<col_w$}", plant.as_deref().unwrap_or("--")));
        }
        println!("{}", row);
    }
    println!();
}

/// 选定植物间的相容性交叉表
fn display_compat_matrix(plants: &[String], compat: &CompatibilityIndex) {
    let col_w = 13;
    let mut header = " ".repeat(col_w);
    for p in plants {
        let short: String = p.chars().take(11).collect();
        header.push_str(&format!("{:<col_w$}", short));
    }
    println!("{}", header);

    for pa in plants {
        let short: String = pa.chars().take(11).collect();
        let mut row = format!("{:<col_w$}", short);
        for pb in plants {
            if pa == pb {
                row.push_str(&format!("{:<col_w$}", "--"));
            } else {
                let s = compat.check_compatibility(pa, pb);
                row.push_str(&format!("{:<col_w$}", format!("{:+}", s)));
            }
        }
        println!("{}", row);
    }
}

// ==========================================
// 主流程
// ==========================================

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", farm_planner::APP_NAME, farm_planner::VERSION);
    tracing::info!("==================================================");

    // ---- 1. 构建示例农场网格 ----
    let x = FarmGrid::INVALID;
    let matrix = vec![
        vec![x, x, 1, 1, 2, 2],
        vec![x, x, 1, 1, 2, 2],
        vec![3, 3, 3, 4, 4, x],
        vec![3, 3, 3, 4, 4, x],
    ];
    let grid = FarmGrid::from_matrix(&matrix);

    println!("农场布局 ({}x{}):", grid.width(), grid.height());
    println!("{}", grid.display());

    let plot_ids = grid.plot_ids();
    println!("\n地块: {:?}", plot_ids);
    for &pid in &plot_ids {
        let cells = grid.plot_cells(pid);
        let adj = grid.adjacent_plots(pid);
        println!("  地块 {}: {} 个单元, 相邻 {:?}", pid, cells.len(), adj);
    }

    // ---- 2. 组装规划引擎 ----
    let compat = CompatibilityIndex::new(
        dataset::default_compatible_plants(),
        dataset::default_incompatible_plants(),
    );
    let planner = FarmPlanner::new(
        &grid,
        compat.clone(),
        dataset::default_planting_calendar(),
        dataset::default_growth_durations(),
    );

    // ---- 3. 运行年度规划 ----
    let selected: Vec<String> = ["Tomatoes", "Corn", "Onions", "Cucumbers", "Lettuce", "Radish"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let year = 2026;
    println!("\n用户选定植物 (按排名): {:?}", selected);

    let plan = planner.plan_year(&selected, year, 1);

    // ---- 4. 展示结果 ----
    display_timeline(&plan);

    let timeline = planner.get_timeline(&selected, year, 1);
    display_snapshots(&timeline, &plot_ids, year);

    println!("--- 相容性交叉表 ---");
    display_compat_matrix(&selected, &compat);

    // ---- 5. 持久化 ----
    let plan_path = Path::new("data/plan_2026.json");
    persistence::save_plan_json(&plan, plan_path)?;
    println!("\n计划已保存至 {}", plan_path.display());

    let grid_path = Path::new("data/test_farm.csv");
    persistence::save_grid_csv(&grid, grid_path)?;
    println!("网格已保存至 {}", grid_path.display());

    Ok(())
}
