// ==========================================
// 农场种植规划系统 - 相容性索引
// ==========================================
// 职责: 归一化植物名并评估相邻种植的伴生/相克得分
// 数据源: 两张 植物名 -> 名单 关系表 (伴生表 + 相克表)
// 红线: 两个方向独立计分, 以容忍不对称的源数据
// ==========================================

use crate::config::CompatibilityTable;
use std::collections::HashMap;

// ==========================================
// 植物名归一化
// ==========================================
// 常见英文复数后缀以有序规则表处理, 便于审计与逐条测试,
// 使 "Tomato" 与 "Tomatoes" 这类录入差异落到同一键上

/// 单条复数后缀规则
struct SuffixRule {
    /// 匹配的词尾
    suffix: &'static str,
    /// 应用规则要求的最小长度 (含等于)
    min_len: usize,
    /// 去掉的尾部字符数
    drop: usize,
    /// 去尾后追加的字符
    append: &'static str,
    /// 命中即跳过本规则的词尾 (如 "grass"/"asparagus")
    excluded_endings: &'static [&'static str],
}

/// 按声明顺序逐条尝试, 首条命中即生效
const PLURAL_RULES: &[SuffixRule] = &[
    // strawberries -> strawberry
    SuffixRule {
        suffix: "ies",
        min_len: 5,
        drop: 3,
        append: "y",
        excluded_endings: &[],
    },
    // tomatoes -> tomato
    SuffixRule {
        suffix: "oes",
        min_len: 5,
        drop: 2,
        append: "",
        excluded_endings: &[],
    },
    // carrots -> carrot
    SuffixRule {
        suffix: "s",
        min_len: 4,
        drop: 1,
        append: "",
        excluded_endings: &["ss", "us"],
    },
];

/// 把植物名归一化为小写单数形式
pub fn normalize_plant_name(name: &str) -> String {
    let name = name.trim().to_lowercase();
    for rule in PLURAL_RULES {
        if name.len() < rule.min_len || !name.ends_with(rule.suffix) {
            continue;
        }
        if rule.excluded_endings.iter().any(|e| name.ends_with(e)) {
            continue;
        }
        let mut stem = name[..name.len() - rule.drop].to_string();
        stem.push_str(rule.append);
        return stem;
    }
    name
}

// ==========================================
// CompatibilityIndex - 相容性索引
// ==========================================
// 构造时对两张表键的并集建立 归一化名 -> 原始键 的反查映射,
// 之后只读, 可在多次规划间安全共享
#[derive(Debug, Clone)]
pub struct CompatibilityIndex {
    compatible: CompatibilityTable,
    incompatible: CompatibilityTable,
    name_map: HashMap<String, String>,
}

impl CompatibilityIndex {
    pub fn new(compatible: CompatibilityTable, incompatible: CompatibilityTable) -> Self {
        let mut name_map = HashMap::new();
        for name in compatible.keys().chain(incompatible.keys()) {
            name_map.insert(normalize_plant_name(name), name.clone());
        }
        Self {
            compatible,
            incompatible,
            name_map,
        }
    }

    /// 把任意写法的植物名解析到关系表的原始键, 未命中回退原名
    fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.name_map
            .get(&normalize_plant_name(name))
            .map(String::as_str)
            .unwrap_or(name)
    }

    /// 归一化成员测试
    fn contains(list: &[String], plant: &str) -> bool {
        let norm = normalize_plant_name(plant);
        list.iter().any(|p| normalize_plant_name(p) == norm)
    }

    /// 两个植物相邻种植的相容性得分
    ///
    /// 每个方向独立累计: 伴生 +1, 相克 -3; 取值范围 [-6, +2]
    /// 互为伴生 +2, 单向伴生 +1, 无记录 0,
    /// 单向相克 -3, 互为相克 -6
    pub fn check_compatibility(&self, plant_a: &str, plant_b: &str) -> i32 {
        let mut score = 0;
        let key_a = self.resolve(plant_a);
        let key_b = self.resolve(plant_b);

        if let Some(list) = self.compatible.get(key_a) {
            if Self::contains(list, plant_b) {
                score += 1;
            }
        }
        if let Some(list) = self.compatible.get(key_b) {
            if Self::contains(list, plant_a) {
                score += 1;
            }
        }
        if let Some(list) = self.incompatible.get(key_a) {
            if Self::contains(list, plant_b) {
                score -= 3;
            }
        }
        if let Some(list) = self.incompatible.get(key_b) {
            if Self::contains(list, plant_a) {
                score -= 3;
            }
        }
        score
    }

    /// 伴生名单
    pub fn compatible_with(&self, plant: &str) -> &[String] {
        self.compatible
            .get(self.resolve(plant))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 相克名单
    pub fn incompatible_with(&self, plant: &str) -> &[String] {
        self.incompatible
            .get(self.resolve(plant))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
