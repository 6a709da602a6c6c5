// ==========================================
// 地铁失物资源规划 - 预测统计引擎
// ==========================================
// 职责: 驾驶舱/分析页的聚合计算
// 输入: 月度预测
// 输出: 月度汇总 / 星期日均 / 高峰日 / 日期与站点查找
// ==========================================

use crate::domain::analytics::{MonthSummary, TopDay, WeekdayAverage};
use crate::domain::forecast::{DayForecast, StationForecast};
use crate::domain::types::ForecastTag;
use chrono::{Datelike, NaiveDate};

/// 分析页默认高峰日数量
pub const DEFAULT_TOP_DAYS: usize = 5;

// ==========================================
// ForecastAnalytics - 预测统计引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastAnalytics;

impl ForecastAnalytics {
    pub fn new() -> Self {
        Self
    }

    /// 月度汇总（空输入返回 None）
    pub fn summarize_month(&self, days: &[DayForecast]) -> Option<MonthSummary> {
        let first = days.first()?;
        let month = first.date.with_day(1)?;

        let mut summary = MonthSummary {
            month,
            day_count: days.len() as u32,
            total_items: 0,
            total_staff_days: 0,
            total_truck_days: 0,
            high_days: 0,
            medium_days: 0,
            low_days: 0,
        };

        for day in days {
            summary.total_items += day.items as u64;
            summary.total_staff_days += day.staff_needed as u64;
            summary.total_truck_days += day.trucks_needed as u64;
            match day.tag {
                ForecastTag::High => summary.high_days += 1,
                ForecastTag::Medium => summary.medium_days += 1,
                ForecastTag::Low => summary.low_days += 1,
            }
        }

        Some(summary)
    }

    /// 按星期统计日均值（周日在前,只包含出现过的星期）
    pub fn weekday_averages(&self, days: &[DayForecast]) -> Vec<WeekdayAverage> {
        // [items, staff, trucks, count]，下标 = 距周日天数
        let mut buckets = [[0u64; 4]; 7];
        for day in days {
            let slot = &mut buckets[day.date.weekday().num_days_from_sunday() as usize];
            slot[0] += day.items as u64;
            slot[1] += day.staff_needed as u64;
            slot[2] += day.trucks_needed as u64;
            slot[3] += 1;
        }

        buckets
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot[3] > 0)
            .map(|(offset, slot)| {
                let weekday = weekday_from_sunday(offset);
                WeekdayAverage {
                    weekday,
                    day_name: weekday.to_string(),
                    items: round_div(slot[0], slot[3]),
                    staff_needed: round_div(slot[1], slot[3]),
                    trucks_needed: round_div(slot[2], slot[3]),
                    day_count: slot[3] as u32,
                }
            })
            .collect()
    }

    /// 件数最高的 limit 天（件数降序,同件数按日期先后）
    pub fn top_days(&self, days: &[DayForecast], limit: usize) -> Vec<TopDay> {
        let mut sorted: Vec<&DayForecast> = days.iter().collect();
        sorted.sort_by(|a, b| b.items.cmp(&a.items));
        sorted
            .into_iter()
            .take(limit)
            .map(|day| TopDay {
                date: day.date,
                items: day.items,
                staff_needed: day.staff_needed,
                trucks_needed: day.trucks_needed,
            })
            .collect()
    }
}

/// 按日期查找
pub fn find_day(days: &[DayForecast], date: NaiveDate) -> Option<&DayForecast> {
    days.iter().find(|day| day.date == date)
}

/// 按站点名查找
pub fn find_station<'a>(day: &'a DayForecast, name: &str) -> Option<&'a StationForecast> {
    day.stations.iter().find(|s| s.name == name)
}

fn weekday_from_sunday(offset: usize) -> chrono::Weekday {
    // Weekday::Sun.succ() 依次为 Mon, Tue, ...
    (0..offset).fold(chrono::Weekday::Sun, |w, _| w.succ())
}

/// 四舍五入整除
fn round_div(sum: u64, count: u64) -> u32 {
    ((sum * 2 + count) / (count * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{staff_needed_for, trucks_needed_for, NoteKind};
    use chrono::Weekday;

    fn day(d: u32, items: u32) -> DayForecast {
        DayForecast {
            date: NaiveDate::from_ymd_opt(2025, 6, d).unwrap(),
            items,
            staff_needed: staff_needed_for(items),
            trucks_needed: trucks_needed_for(items),
            notes: String::new(),
            note_kind: NoteKind::None,
            tag: ForecastTag::from_items(items),
            stations: vec![StationForecast::new("AIIMS", items)],
        }
    }

    #[test]
    fn test_summarize_month() {
        let days = vec![day(1, 60), day(2, 40), day(3, 20)];
        let summary = ForecastAnalytics::new().summarize_month(&days).unwrap();
        assert_eq!(summary.month, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(summary.day_count, 3);
        assert_eq!(summary.total_items, 120);
        assert_eq!(summary.total_staff_days, 6 + 4 + 2);
        assert_eq!(summary.total_truck_days, 3 + 2 + 1);
        assert_eq!((summary.high_days, summary.medium_days, summary.low_days), (1, 1, 1));

        assert!(ForecastAnalytics::new().summarize_month(&[]).is_none());
    }

    #[test]
    fn test_weekday_averages_rounded_sunday_first() {
        // 2025-06-01 周日, 2025-06-08 周日, 2025-06-02 周一
        let days = vec![day(1, 20), day(2, 33), day(8, 25)];
        let averages = ForecastAnalytics::new().weekday_averages(&days);
        assert_eq!(averages.len(), 2);

        assert_eq!(averages[0].weekday, Weekday::Sun);
        assert_eq!(averages[0].day_name, "Sun");
        // (20 + 25) / 2 = 22.5 → 23
        assert_eq!(averages[0].items, 23);
        // (2 + 3) / 2 = 2.5 → 3
        assert_eq!(averages[0].staff_needed, 3);
        assert_eq!(averages[0].day_count, 2);

        assert_eq!(averages[1].weekday, Weekday::Mon);
        assert_eq!(averages[1].items, 33);
    }

    #[test]
    fn test_top_days_bounded_and_sorted() {
        let days = vec![day(1, 20), day(2, 70), day(3, 45), day(4, 70), day(5, 10)];
        let top = ForecastAnalytics::new().top_days(&days, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].date.day(), 2);
        assert_eq!(top[1].date.day(), 4);
        assert_eq!(top[2].items, 45);

        assert_eq!(ForecastAnalytics::new().top_days(&days, 10).len(), 5);
    }

    #[test]
    fn test_find_day_and_station() {
        let days = vec![day(1, 20), day(2, 30)];
        let found = find_day(&days, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()).unwrap();
        assert_eq!(found.items, 30);
        assert!(find_day(&days, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()).is_none());

        assert_eq!(find_station(found, "AIIMS").map(|s| s.items), Some(30));
        assert!(find_station(found, "RITHALA").is_none());
    }
}
