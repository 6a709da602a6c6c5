// ==========================================
// 地铁失物资源规划 - 统计读模型
// ==========================================
// 职责: 驾驶舱/分析页使用的聚合结果
// ==========================================

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// 月度汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: NaiveDate, // 当月1日
    pub day_count: u32,
    pub total_items: u64,
    pub total_staff_days: u64, // 人·天
    pub total_truck_days: u64, // 车·天
    pub high_days: u32,
    pub medium_days: u32,
    pub low_days: u32,
}

/// 按星期统计的日均值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayAverage {
    pub weekday: Weekday,
    pub day_name: String, // Sun/Mon/...
    pub items: u32,
    pub staff_needed: u32,
    pub trucks_needed: u32,
    pub day_count: u32,
}

/// 高峰日
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopDay {
    pub date: NaiveDate,
    pub items: u32,
    pub staff_needed: u32,
    pub trucks_needed: u32,
}
