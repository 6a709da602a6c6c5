// ==========================================
// 地铁失物资源规划 - API 响应 DTO
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::action::ActionItem;
use crate::domain::analytics::{MonthSummary, TopDay, WeekdayAverage};
use crate::domain::forecast::DayForecast;
use crate::domain::resource::{ResourceCost, ResourcePlan};

/// 驾驶舱总览
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub today: NaiveDate,
    pub summary: Option<MonthSummary>,
    pub today_forecast: Option<DayForecast>,
    pub today_actions: Vec<ActionItem>,
    /// 非今日且未完成
    pub upcoming_actions: Vec<ActionItem>,
    pub days: Vec<DayForecast>,
    pub actions: Vec<ActionItem>,
}

/// 每日趋势点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub items: u32,
    pub staff_needed: u32,
    pub trucks_needed: u32,
}

/// 分析页总览
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    pub month: NaiveDate,
    pub weekly: Vec<WeekdayAverage>,
    pub daily: Vec<DailyPoint>,
    pub top_days: Vec<TopDay>,
}

/// 待办动作的资源方案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPlan {
    pub action: ActionItem,
    pub plan: ResourcePlan,
    pub cost: ResourceCost,
}
