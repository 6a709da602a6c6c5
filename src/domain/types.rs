// ==========================================
// 地铁失物资源规划 - 领域类型定义
// ==========================================
// 职责: 预测等级、备注类型、计算口径常量
// 红线: 等级由失物件数唯一确定,不是评分制
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 计算口径常量
// ==========================================

/// 每名工作人员可处理的失物件数（预测口径）
pub const ITEMS_PER_STAFF: u32 = 10;

/// 每辆车可运送的失物件数（预测口径）
pub const ITEMS_PER_TRUCK: u32 = 25;

/// 高等级阈值: items > 50
pub const HIGH_TAG_THRESHOLD: u32 = 50;

/// 中等级阈值: items > 30
pub const MEDIUM_TAG_THRESHOLD: u32 = 30;

/// 按预测口径计算所需人员: max(1, ceil(items/10))
pub fn staff_needed_for(items: u32) -> u32 {
    items.div_ceil(ITEMS_PER_STAFF).max(1)
}

/// 按预测口径计算所需车辆: max(1, ceil(items/25))
pub fn trucks_needed_for(items: u32) -> u32 {
    items.div_ceil(ITEMS_PER_TRUCK).max(1)
}

// ==========================================
// 预测等级 (Forecast Tag)
// ==========================================
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastTag {
    Low,    // 常规
    Medium, // 需关注
    High,   // 需额外资源
}

impl ForecastTag {
    /// 由失物件数判定等级
    pub fn from_items(items: u32) -> Self {
        if items > HIGH_TAG_THRESHOLD {
            ForecastTag::High
        } else if items > MEDIUM_TAG_THRESHOLD {
            ForecastTag::Medium
        } else {
            ForecastTag::Low
        }
    }
}

impl fmt::Display for ForecastTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastTag::Low => write!(f, "low"),
            ForecastTag::Medium => write!(f, "medium"),
            ForecastTag::High => write!(f, "high"),
        }
    }
}

// ==========================================
// 备注类型 (Note Kind)
// ==========================================
// 优先级: Festival > Weekend > BusyWeekday > None
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Festival,    // 节日
    Weekend,     // 周末
    BusyWeekday, // 周一/周五
    None,        // 无备注
}

impl NoteKind {
    /// 备注对应的国际化 key（None 无 key）
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            NoteKind::Festival => Some("notes.festival"),
            NoteKind::Weekend => Some("notes.weekend"),
            NoteKind::BusyWeekday => Some("notes.busy_weekday"),
            NoteKind::None => None,
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteKind::Festival => write!(f, "festival"),
            NoteKind::Weekend => write!(f, "weekend"),
            NoteKind::BusyWeekday => write!(f, "busy_weekday"),
            NoteKind::None => write!(f, "none"),
        }
    }
}

// ==========================================
// 待办动作类型 (Action Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    EmptyStock,   // 高等级日: 清空库存
    ProcessFound, // 中等级日: 处理拾获
}

impl ActionKind {
    /// 动作标题的国际化 key
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ActionKind::EmptyStock => "actions.empty_stock",
            ActionKind::ProcessFound => "actions.process_found",
        }
    }

    /// 动作 id 前缀
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ActionKind::EmptyStock => "action",
            ActionKind::ProcessFound => "action-medium",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_thresholds() {
        assert_eq!(ForecastTag::from_items(0), ForecastTag::Low);
        assert_eq!(ForecastTag::from_items(30), ForecastTag::Low);
        assert_eq!(ForecastTag::from_items(31), ForecastTag::Medium);
        assert_eq!(ForecastTag::from_items(50), ForecastTag::Medium);
        assert_eq!(ForecastTag::from_items(51), ForecastTag::High);
    }

    #[test]
    fn test_staff_and_truck_minimums() {
        assert_eq!(staff_needed_for(0), 1);
        assert_eq!(trucks_needed_for(0), 1);
        assert_eq!(staff_needed_for(10), 1);
        assert_eq!(staff_needed_for(11), 2);
        assert_eq!(trucks_needed_for(25), 1);
        assert_eq!(trucks_needed_for(26), 2);
    }

    #[test]
    fn test_tag_serde_lowercase() {
        let json = serde_json::to_string(&ForecastTag::High).unwrap();
        assert_eq!(json, "\"high\"");
        let kind = serde_json::to_string(&NoteKind::BusyWeekday).unwrap();
        assert_eq!(kind, "\"busy_weekday\"");
    }
}
