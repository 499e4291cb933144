// ==========================================
// 农场种植规划系统 - 内置默认数据集
// ==========================================
// 职责: 提供常见菜园植物的生长周期/种植日历/伴生关系默认表
// 说明: 数值为粗略平均值, 因品种与气候而异;
//       多年生植物记 365 天 (全季占用, 年内不腾出地块)
// ==========================================

use crate::config::{CompatibilityTable, GrowthDurations, PlantingCalendar, PlantingTimes};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ==========================================
// 生长周期 (入土到清园的天数)
// ==========================================
pub fn default_growth_durations() -> GrowthDurations {
    let entries: [(&str, i64); 57] = [
        // 蔬菜
        ("Amaranth", 90),
        ("Asparagus", 365),
        ("Beans", 65),
        ("Broad Beans", 80),
        ("Soya Beans", 90),
        ("Beet", 60),
        ("Broccoli", 80),
        ("Brussels Sprouts", 100),
        ("Cabbage", 85),
        ("Carrots", 75),
        ("Cauliflower", 75),
        ("Celery", 100),
        ("Collards", 70),
        ("Corn", 85),
        ("Cucumber", 65),
        ("Eggplant", 80),
        ("Fennel", 70),
        ("Garlic", 240),
        ("Kale", 65),
        ("Kohlrabi", 55),
        ("Leeks", 120),
        ("Lettuce", 50),
        ("Melons", 85),
        ("Mustard", 40),
        ("Onions", 100),
        ("Peas", 65),
        ("Pepper", 80),
        ("Potatoes", 100),
        ("Radish", 30),
        ("Spinach", 45),
        ("Squash", 90),
        ("Strawberries", 365),
        ("Swiss Chard", 55),
        ("Tomatoes", 100),
        ("Turnip", 55),
        // 香草
        ("Basil", 70),
        ("Borage", 55),
        ("Chamomile", 60),
        ("Chervil", 45),
        ("Chives", 365),
        ("Cilantro", 45),
        ("Dill", 55),
        ("Lovage", 365),
        ("Mint", 365),
        ("Oregano", 365),
        ("Sweet Marjoram", 80),
        ("Parsley", 75),
        ("Rosemary", 365),
        ("Sage", 365),
        ("Summer Savory", 60),
        ("Sunflowers", 85),
        ("Thyme", 365),
        // 其他
        ("Nasturtiums", 80),
        ("Calendula", 60),
        ("Clover", 90),
        ("Oats", 90),
        ("Phacelia", 75),
    ];
    entries
        .iter()
        .map(|&(name, days)| (name.to_string(), days))
        .collect()
}

// ==========================================
// 种植日历 (月份浮点成对: 起, 止)
// ==========================================
pub fn default_planting_calendar() -> PlantingCalendar {
    let entries: Vec<(&str, PlantingTimes)> = vec![
        // 蔬菜
        ("Amaranth", PlantingTimes::new(&[], &[], &[5.5, 6.5])),
        ("Asparagus", PlantingTimes::new(&[2.5, 5.5], &[5.5, 6.5], &[])),
        ("Beans", PlantingTimes::new(&[], &[], &[5.5, 7.5])),
        ("Broad Beans", PlantingTimes::new(&[], &[], &[2.0, 4.5, 9.0, 11.0])),
        ("Soya Beans", PlantingTimes::new(&[], &[], &[5.5, 6.5])),
        ("Beet", PlantingTimes::new(&[], &[], &[4.0, 8.5])),
        ("Broccoli", PlantingTimes::new(&[3.0, 4.5], &[4.5, 6.0], &[])),
        ("Brussels Sprouts", PlantingTimes::new(&[5.5, 6.5], &[6.5, 7.5], &[])),
        ("Cabbage", PlantingTimes::new(&[3.0, 4.5], &[4.5, 6.0], &[])),
        ("Carrots", PlantingTimes::new(&[], &[], &[4.0, 7.5])),
        ("Cauliflower", PlantingTimes::new(&[3.0, 4.5], &[4.5, 6.5], &[])),
        ("Celery", PlantingTimes::new(&[3.0, 4.5], &[5.5, 6.5], &[])),
        ("Collards", PlantingTimes::new(&[], &[], &[2.0, 8.5])),
        ("Corn", PlantingTimes::new(&[], &[], &[5.5, 6.5])),
        ("Cucumber", PlantingTimes::new(&[4.5, 5.5], &[5.5, 6.5], &[5.5, 6.5])),
        ("Eggplant", PlantingTimes::new(&[3.5, 4.5], &[5.5, 6.5], &[])),
        ("Fennel", PlantingTimes::new(&[], &[], &[3.5, 6.5])),
        ("Garlic", PlantingTimes::new(&[], &[], &[2.0, 2.25, 9.0, 13.0])),
        ("Kale", PlantingTimes::new(&[], &[], &[2.0, 8.5])),
        ("Kohlrabi", PlantingTimes::new(&[], &[], &[3.5, 5.5, 7.5, 8.25])),
        ("Leeks", PlantingTimes::new(&[1.5, 4.0, 6.0, 6.5], &[4.0, 5.5, 7.0, 7.5], &[])),
        ("Lettuce", PlantingTimes::new(&[2.0, 4.0], &[3.5, 4.5], &[4.5, 9.5])),
        ("Melons", PlantingTimes::new(&[4.5, 5.5], &[5.5, 6.5], &[])),
        ("Mustard", PlantingTimes::new(&[], &[], &[2.0, 6.0, 9.0, 10.5])),
        ("Onions", PlantingTimes::new(&[1.0, 4.5], &[], &[3.5, 5.5])),
        ("Peas", PlantingTimes::new(&[], &[], &[2.0, 5.5, 6.5, 8.5])),
        ("Pepper", PlantingTimes::new(&[3.0, 4.5], &[5.5, 6.5], &[])),
        ("Radish", PlantingTimes::new(&[], &[], &[2.0, 5.5, 9.0, 10.0])),
        ("Spinach", PlantingTimes::new(&[], &[], &[2.0, 5.5, 9.0, 10.0])),
        ("Squash", PlantingTimes::new(&[4.5, 5.5], &[5.5, 6.5], &[5.5, 6.5])),
        ("Strawberries", PlantingTimes::new(&[1.0, 3.5], &[4.5, 5.5], &[])),
        ("Swiss Chard", PlantingTimes::new(&[], &[], &[4.5, 7.5])),
        ("Tomatoes", PlantingTimes::new(&[3.0, 4.5], &[4.5, 6.5], &[])),
        ("Turnip", PlantingTimes::new(&[], &[], &[3.5, 5.5, 8.5, 10.0])),
        // 香草
        ("Basil", PlantingTimes::new(&[4.0, 5.5], &[5.5, 6.5], &[5.5, 6.5])),
        ("Borage", PlantingTimes::new(&[], &[], &[4.0, 8.0])),
        ("Chamomile", PlantingTimes::new(&[], &[], &[4.0, 6.0, 9.0, 11.0])),
        ("Chervil", PlantingTimes::new(&[3.5, 4.0], &[], &[4.0, 8.0])),
        ("Chives", PlantingTimes::new(&[2.0, 4.5], &[4.5, 5.5], &[4.5, 6.5, 8.5, 9.5])),
        ("Cilantro", PlantingTimes::new(&[], &[], &[3.0, 9.5])),
        ("Dill", PlantingTimes::new(&[], &[], &[4.5, 8.5])),
        ("Lovage", PlantingTimes::new(&[3.5, 4.0], &[5.5, 6.0], &[4.0, 5.5, 9.0, 11.0])),
        ("Mint", PlantingTimes::new(&[2.0, 4.5], &[4.5, 6.5], &[5.5, 6.5])),
        ("Oregano", PlantingTimes::new(&[2.5, 5.5], &[4.5, 6.5], &[5.5, 6.5])),
        ("Sweet Marjoram", PlantingTimes::new(&[2.5, 5.5], &[4.5, 6.5], &[5.5, 6.5])),
        ("Parsley", PlantingTimes::new(&[], &[], &[3.5, 8.0])),
        ("Rosemary", PlantingTimes::new(&[2.0, 5.5], &[4.5, 6.5], &[5.5, 6.5])),
        ("Sage", PlantingTimes::new(&[2.0, 5.5], &[4.5, 6.5], &[5.5, 6.5])),
        ("Summer Savory", PlantingTimes::new(&[3.5, 5.5], &[5.5, 6.0], &[5.5, 6.5])),
        ("Thyme", PlantingTimes::new(&[2.0, 5.5], &[4.5, 6.5], &[5.5, 6.5])),
        // 日历图表中缺数据的植物 (窗口留空, 排产时自然落入未排列表)
        ("Agastache", PlantingTimes::default()),
        ("Calendula", PlantingTimes::default()),
        ("Catnip", PlantingTimes::default()),
        ("Clover", PlantingTimes::default()),
        ("Nasturtiums", PlantingTimes::default()),
        ("Oats", PlantingTimes::default()),
        ("Phacelia", PlantingTimes::default()),
        ("Potatoes", PlantingTimes::default()),
        ("Sunflowers", PlantingTimes::default()),
    ];
    entries
        .into_iter()
        .map(|(name, times)| (name.to_string(), times))
        .collect()
}

// ==========================================
// 伴生表 (相邻种植互利)
// ==========================================
pub fn default_compatible_plants() -> CompatibilityTable {
    let entries: Vec<(&str, Vec<String>)> = vec![
        ("Asparagus", names(&["Tomatoes", "Parsley", "Basil"])),
        ("Basil", names(&["Tomatoes", "Pepper", "Oregano"])),
        ("Beans", names(&["Corn", "Cucumber", "Squash", "Radish", "Carrots", "Celery", "Swiss Chard"])),
        ("Beet", names(&["Onions", "Cabbage", "Lettuce", "Kohlrabi"])),
        ("Borage", names(&["Tomatoes", "Squash", "Strawberries"])),
        ("Broccoli", names(&["Onions", "Celery", "Chamomile", "Beet"])),
        ("Brussels Sprouts", names(&["Onions", "Sage"])),
        ("Cabbage", names(&["Onions", "Potatoes", "Celery", "Dill", "Chamomile", "Beet", "Sage"])),
        ("Carrots", names(&["Tomatoes", "Onions", "Leeks", "Rosemary", "Sage", "Peas", "Lettuce", "Chives"])),
        ("Cauliflower", names(&["Celery", "Beans"])),
        ("Celery", names(&["Cabbage", "Onions", "Beans", "Tomatoes"])),
        ("Chamomile", names(&["Cabbage", "Onions"])),
        ("Chives", names(&["Carrots", "Tomatoes"])),
        ("Cilantro", names(&["Spinach", "Dill"])),
        ("Corn", names(&["Beans", "Squash", "Peas", "Cucumber", "Melons", "Potatoes", "Amaranth"])),
        ("Cucumber", names(&["Beans", "Corn", "Peas", "Radish", "Dill", "Sunflowers"])),
        ("Dill", names(&["Cabbage", "Cucumber", "Lettuce", "Onions"])),
        ("Eggplant", names(&["Beans", "Pepper", "Basil"])),
        ("Garlic", names(&["Tomatoes", "Beet", "Lettuce", "Cabbage"])),
        ("Kale", names(&["Onions", "Beet", "Celery"])),
        ("Kohlrabi", names(&["Beet", "Onions"])),
        ("Leeks", names(&["Carrots", "Celery", "Onions"])),
        ("Lettuce", names(&["Carrots", "Radish", "Strawberries", "Cucumber", "Onions"])),
        ("Melons", names(&["Corn", "Sunflowers"])),
        ("Mint", names(&["Cabbage", "Tomatoes"])),
        ("Nasturtiums", names(&["Cucumber", "Squash", "Radish"])),
        ("Onions", names(&["Carrots", "Beet", "Lettuce", "Cabbage", "Tomatoes", "Chamomile"])),
        ("Parsley", names(&["Tomatoes", "Asparagus", "Corn"])),
        ("Peas", names(&["Carrots", "Radish", "Cucumber", "Corn", "Beans", "Turnip"])),
        ("Pepper", names(&["Basil", "Onions", "Carrots"])),
        ("Potatoes", names(&["Beans", "Cabbage", "Corn", "Peas"])),
        ("Radish", names(&["Cucumber", "Lettuce", "Peas", "Nasturtiums"])),
        ("Rosemary", names(&["Beans", "Cabbage", "Carrots"])),
        ("Sage", names(&["Cabbage", "Carrots", "Rosemary"])),
        ("Spinach", names(&["Strawberries", "Peas", "Beans"])),
        ("Squash", names(&["Corn", "Beans", "Nasturtiums", "Borage"])),
        ("Strawberries", names(&["Spinach", "Lettuce", "Borage", "Beans"])),
        ("Summer Savory", names(&["Beans", "Onions"])),
        ("Sunflowers", names(&["Cucumber", "Corn"])),
        ("Swiss Chard", names(&["Beans", "Cabbage", "Onions"])),
        ("Thyme", names(&["Cabbage", "Strawberries"])),
        ("Tomatoes", names(&["Basil", "Carrots", "Onions", "Parsley", "Borage", "Chives", "Mint"])),
        ("Turnip", names(&["Peas"])),
    ];
    entries
        .into_iter()
        .map(|(name, list)| (name.to_string(), list))
        .collect()
}

// ==========================================
// 相克表 (相邻种植互害)
// ==========================================
pub fn default_incompatible_plants() -> CompatibilityTable {
    let entries: Vec<(&str, Vec<String>)> = vec![
        ("Asparagus", names(&["Onions", "Garlic"])),
        ("Beans", names(&["Onions", "Garlic", "Chives", "Leeks", "Fennel"])),
        ("Beet", names(&["Beans"])),
        ("Broccoli", names(&["Tomatoes", "Strawberries"])),
        ("Brussels Sprouts", names(&["Strawberries", "Tomatoes"])),
        ("Cabbage", names(&["Tomatoes", "Strawberries"])),
        ("Carrots", names(&["Dill"])),
        ("Cauliflower", names(&["Strawberries", "Tomatoes"])),
        ("Celery", names(&["Corn"])),
        ("Chives", names(&["Beans", "Peas"])),
        ("Cilantro", names(&["Fennel"])),
        ("Corn", names(&["Tomatoes"])),
        ("Cucumber", names(&["Sage"])),
        ("Dill", names(&["Carrots", "Tomatoes"])),
        ("Eggplant", names(&["Fennel"])),
        ("Fennel", names(&["Tomatoes", "Beans", "Kohlrabi", "Pepper"])),
        ("Garlic", names(&["Beans", "Peas"])),
        ("Kale", names(&["Strawberries", "Tomatoes"])),
        ("Kohlrabi", names(&["Tomatoes", "Pepper", "Beans"])),
        ("Leeks", names(&["Beans", "Peas"])),
        ("Melons", names(&["Potatoes"])),
        ("Mint", names(&["Parsley"])),
        ("Onions", names(&["Beans", "Peas", "Asparagus"])),
        ("Peas", names(&["Onions", "Garlic", "Leeks", "Chives"])),
        ("Pepper", names(&["Fennel", "Kohlrabi", "Beans"])),
        ("Potatoes", names(&["Tomatoes", "Cucumber", "Squash", "Sunflowers"])),
        ("Squash", names(&["Potatoes"])),
        ("Strawberries", names(&["Cabbage", "Broccoli", "Cauliflower"])),
        ("Sunflowers", names(&["Potatoes", "Beans"])),
        ("Tomatoes", names(&["Cabbage", "Corn", "Fennel", "Potatoes", "Kohlrabi"])),
    ];
    entries
        .into_iter()
        .map(|(name, list)| (name.to_string(), list))
        .collect()
}
