// ==========================================
// 农场种植规划系统 - 年度规划引擎
// ==========================================
// 职责: 把排名列表中的植物分配到 (地块, 时间窗) 种植位
// 策略: 最受约束优先 (可选位最少的植物先排),
//       并列时用户排名 (列表顺序) 决定
// 红线: 比较必须用严格小于, 改成 <= 会悄悄改变
//       并列植物的胜出者, 破坏排名契约
// 红线: 缺失窗口/生长周期数据不是错误, 只会让该植物
//       落入 unassigned_plants
// ==========================================

use crate::config::{GrowthDurations, PlannerConfig, PlantingCalendar, PlantingTimes};
use crate::domain::grid::PlotLayout;
use crate::domain::plan::{AdjacencyEvent, Placement, PlanResult};
use crate::domain::timeline::FarmTimeline;
use crate::domain::types::{PlantingMethod, PlantingWindow, PlotId};
use crate::engine::calendar::parse_planting_windows;
use crate::engine::compatibility::{normalize_plant_name, CompatibilityIndex};
use chrono::{Duration, NaiveDate};
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, instrument};

// ==========================================
// 内部选位结构
// ==========================================

/// 一个候选种植位: 植物可落入的 (地块, 时间窗)
#[derive(Debug, Clone)]
struct PlacementOption {
    plot_id: PlotId,
    start: NaiveDate,
    end: NaiveDate,
    score: i32,
    method: PlantingMethod,
}

/// 单轮选择结果; option 为 None 表示所有剩余植物均无可用位
#[derive(Debug)]
struct Pick {
    plant: String,
    option: Option<PlacementOption>,
}

// ==========================================
// FarmPlanner - 年度规划引擎
// ==========================================
pub struct FarmPlanner<G: PlotLayout> {
    layout: G,
    compat: CompatibilityIndex,
    calendar: PlantingCalendar,
    durations: GrowthDurations,
    config: PlannerConfig,
    /// 归一化名 -> 种植日历原始键
    calendar_keys: HashMap<String, String>,
    /// 归一化名 -> 生长周期表原始键
    duration_keys: HashMap<String, String>,
}

impl<G: PlotLayout> FarmPlanner<G> {
    pub fn new(
        layout: G,
        compat: CompatibilityIndex,
        calendar: PlantingCalendar,
        durations: GrowthDurations,
    ) -> Self {
        Self::with_config(layout, compat, calendar, durations, PlannerConfig::default())
    }

    pub fn with_config(
        layout: G,
        compat: CompatibilityIndex,
        calendar: PlantingCalendar,
        durations: GrowthDurations,
        config: PlannerConfig,
    ) -> Self {
        let calendar_keys = calendar
            .keys()
            .map(|n| (normalize_plant_name(n), n.clone()))
            .collect();
        let duration_keys = durations
            .keys()
            .map(|n| (normalize_plant_name(n), n.clone()))
            .collect();
        Self {
            layout,
            compat,
            calendar,
            durations,
            config,
            calendar_keys,
            duration_keys,
        }
    }

    pub fn compatibility(&self) -> &CompatibilityIndex {
        &self.compat
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    // ==========================================
    // 公开接口
    // ==========================================

    /// 构建全年种植计划
    ///
    /// # 参数
    /// - `selected_plants`: 排名列表, 越靠前优先级越高
    /// - `year`: 规划年份
    /// - `start_month`: 最早可考虑的月份 (通常为 1)
    ///
    /// # 返回
    /// 不可变的 PlanResult (分配明细 + 未排植物 + 相邻互作 + 总分)
    #[instrument(skip(self, selected_plants), fields(plants = selected_plants.len()))]
    pub fn plan_year(
        &self,
        selected_plants: &[String],
        year: i32,
        start_month: u32,
    ) -> PlanResult {
        info!("开始年度规划: {} 个候选植物", selected_plants.len());

        let mut timeline = FarmTimeline::with_buffer(&self.layout, self.config.buffer_days);
        let mut assigned: Vec<Placement> = Vec::new();
        let mut unassigned: Vec<String> = Vec::new();
        let mut remaining: Vec<String> = selected_plants.to_vec();

        while !remaining.is_empty() {
            let pick = self.pick_next(&remaining, year, &timeline, start_month);
            if let Some(idx) = remaining.iter().position(|p| *p == pick.plant) {
                remaining.remove(idx);
            }

            match pick.option {
                Some(opt) => {
                    debug!(
                        plant = %pick.plant,
                        plot_id = opt.plot_id,
                        start = %opt.start,
                        end = %opt.end,
                        score = opt.score,
                        "选定种植位"
                    );
                    timeline.add(opt.plot_id, &pick.plant, opt.start, opt.end, opt.method);
                    assigned.push(Placement {
                        plant: pick.plant,
                        plot_id: opt.plot_id,
                        start: opt.start,
                        end: opt.end,
                        method: opt.method,
                        score: opt.score,
                    });
                }
                None => {
                    // 一轮之内所有剩余植物都拿不到种植位,
                    // 零选项状态单调不变, 后续轮次不会解冻, 整体终止
                    debug!(plant = %pick.plant, "剩余植物均无可用种植位, 规划终止");
                    unassigned.push(pick.plant);
                    unassigned.append(&mut remaining);
                }
            }
        }

        let (score, adjacency_events) = self.adjacency_report(&timeline);
        info!(
            assigned = assigned.len(),
            unassigned = unassigned.len(),
            score,
            "年度规划完成"
        );

        PlanResult {
            year,
            selected_plants: selected_plants.to_vec(),
            timeline: timeline.serialize(),
            assigned,
            unassigned_plants: unassigned,
            adjacency_events,
            score,
        }
    }

    /// 与 plan_year 相同的分配循环, 但直接返回 FarmTimeline,
    /// 供逐日/逐月快照查询使用
    #[instrument(skip(self, selected_plants), fields(plants = selected_plants.len()))]
    pub fn get_timeline(
        &self,
        selected_plants: &[String],
        year: i32,
        start_month: u32,
    ) -> FarmTimeline {
        let mut timeline = FarmTimeline::with_buffer(&self.layout, self.config.buffer_days);
        let mut remaining: Vec<String> = selected_plants.to_vec();

        while !remaining.is_empty() {
            let pick = self.pick_next(&remaining, year, &timeline, start_month);
            if let Some(idx) = remaining.iter().position(|p| *p == pick.plant) {
                remaining.remove(idx);
            }
            match pick.option {
                Some(opt) => {
                    timeline.add(opt.plot_id, &pick.plant, opt.start, opt.end, opt.method);
                }
                None => break,
            }
        }
        timeline
    }

    // ==========================================
    // 核心排产逻辑
    // ==========================================

    /// 选出下一个要分配的 (植物, 种植位)
    ///
    /// 对每个剩余植物按排名顺序枚举全部可选位;
    /// 可选位最少者胜出 (严格小于, 并列保留先遇到的植物);
    /// 该植物的可选位中取 (得分降序, 开始日期升序) 最优者。
    /// 所有植物都无可选位时返回哨兵: 取排名首位植物, 不带种植位
    fn pick_next(
        &self,
        remaining: &[String],
        year: i32,
        timeline: &FarmTimeline,
        start_month: u32,
    ) -> Pick {
        let mut best: Option<(usize, Pick)> = None;

        for plant in remaining {
            let options = self.find_options(plant, year, timeline, start_month);
            if options.is_empty() {
                continue;
            }
            let count = options.len();
            // 严格小于: 后出现的并列植物不得顶替先出现者
            let improves = best
                .as_ref()
                .map_or(true, |(min_count, _)| count < *min_count);
            if !improves {
                continue;
            }
            if let Some(opt) = options
                .into_iter()
                .min_by_key(|o| (Reverse(o.score), o.start))
            {
                best = Some((
                    count,
                    Pick {
                        plant: plant.clone(),
                        option: Some(opt),
                    },
                ));
            }
        }

        match best {
            Some((_, pick)) => pick,
            None => Pick {
                plant: remaining.first().cloned().unwrap_or_default(),
                option: None,
            },
        }
    }

    /// 枚举一个植物当前全部可落位的 (地块, 时间窗)
    fn find_options(
        &self,
        plant: &str,
        year: i32,
        timeline: &FarmTimeline,
        start_month: u32,
    ) -> Vec<PlacementOption> {
        let duration = Duration::days(self.growth_duration(plant));
        let windows = self.outdoor_windows(plant, year);
        if windows.is_empty() {
            return Vec::new();
        }

        let season_start = NaiveDate::from_ymd_opt(year, start_month.clamp(1, 12), 1)
            .expect("月份已钳制在合法范围内");
        let season_end = NaiveDate::from_ymd_opt(
            year,
            self.config.season_end_month,
            self.config.season_end_day,
        )
        .unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 12, 15).expect("12月15日恒为合法日期")
        });

        let mut options = Vec::new();
        for w in &windows {
            for (&pid, ptl) in timeline.timelines() {
                let earliest = w
                    .start
                    .max(ptl.earliest_free_after(w.start))
                    .max(season_start);
                if earliest > w.end {
                    continue; // 窗口已耗尽
                }
                let end = earliest + duration;
                if end > season_end {
                    continue; // 超出季末截止
                }
                // 缓冲推进只是启发式, 插入前再做一次空闲复核
                if !ptl.is_free_during(earliest, end) {
                    continue;
                }
                let score = self.score_placement(plant, pid, earliest, end, timeline);
                options.push(PlacementOption {
                    plot_id: pid,
                    start: earliest,
                    end,
                    score,
                    method: w.method,
                });
            }
        }
        options
    }

    /// 把植物落到 [start, end) 的某地块时, 对相邻在地植物的
    /// 相容性得分 (每个不同植物名只计一次)
    fn score_placement(
        &self,
        plant: &str,
        plot_id: PlotId,
        start: NaiveDate,
        end: NaiveDate,
        timeline: &FarmTimeline,
    ) -> i32 {
        let mut score = 0;
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for adj_plant in timeline.adjacent_plants_during(plot_id, start, end) {
            if seen.insert(adj_plant.clone()) {
                score += self.compat.check_compatibility(plant, &adj_plant);
            }
        }
        score
    }

    // ==========================================
    // 汇总报告
    // ==========================================

    /// 全年相容性总分与相邻互作事件列表
    ///
    /// 对每块地块的每个条目, 找出相邻地块上时段重叠的条目;
    /// 以 (地块, 植物, 开始日期) 三元组构成无序对键,
    /// 每个唯一对只处理一次
    fn adjacency_report(&self, timeline: &FarmTimeline) -> (i32, Vec<AdjacencyEvent>) {
        type PairKey = (PlotId, String, NaiveDate);
        let mut score = 0;
        let mut events = Vec::new();
        let mut seen: BTreeSet<(PairKey, PairKey)> = BTreeSet::new();

        for (&pid, tl) in timeline.timelines() {
            for entry in tl.entries() {
                let Some(adjacent) = timeline.adjacent_plots(pid) else {
                    continue;
                };
                for &adj_id in adjacent {
                    let Some(adj_tl) = timeline.plot_timeline(adj_id) else {
                        continue;
                    };
                    for ae in adj_tl.overlapping_entries(entry.start, entry.end) {
                        let a: PairKey = (pid, entry.plant.clone(), entry.start);
                        let b: PairKey = (adj_id, ae.plant.clone(), ae.start);
                        let key = if a <= b { (a, b) } else { (b, a) };
                        if !seen.insert(key) {
                            continue;
                        }
                        let s = self.compat.check_compatibility(&entry.plant, &ae.plant);
                        score += s;
                        events.push(AdjacencyEvent {
                            plot_a: pid,
                            plot_b: adj_id,
                            plant_a: entry.plant.clone(),
                            plant_b: ae.plant.clone(),
                            overlap_start: entry.start.max(ae.start),
                            overlap_end: entry.end.min(ae.end),
                            compatibility: s,
                        });
                    }
                }
            }
        }
        (score, events)
    }

    // ==========================================
    // 数据解析辅助
    // ==========================================

    /// 生长周期: 精确名 -> 归一化名 -> 默认值
    fn growth_duration(&self, plant: &str) -> i64 {
        if let Some(&d) = self.durations.get(plant) {
            return d;
        }
        if let Some(key) = self.duration_keys.get(&normalize_plant_name(plant)) {
            if let Some(&d) = self.durations.get(key) {
                return d;
            }
        }
        self.config.default_duration_days
    }

    fn planting_times(&self, plant: &str) -> Option<&PlantingTimes> {
        if let Some(times) = self.calendar.get(plant) {
            return Some(times);
        }
        self.calendar_keys
            .get(&normalize_plant_name(plant))
            .and_then(|key| self.calendar.get(key))
    }

    /// 占用地块的种植窗口 (仅移栽 + 直播), 按开始日期升序
    fn outdoor_windows(&self, plant: &str, year: i32) -> Vec<PlantingWindow> {
        let Some(times) = self.planting_times(plant) else {
            return Vec::new();
        };
        let mut windows =
            parse_planting_windows(&times.transplant, PlantingMethod::Transplant, year);
        windows.extend(parse_planting_windows(
            &times.direct_sow,
            PlantingMethod::DirectSow,
            year,
        ));
        windows.sort_by_key(|w| w.start);
        windows
    }
}
