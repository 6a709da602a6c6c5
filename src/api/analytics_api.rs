// ==========================================
// 地铁失物资源规划 - 分析 API
// ==========================================
// 职责: 星期日均 / 每日趋势 / 高峰日
// ==========================================

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::instrument;

use crate::api::dto::{AnalyticsOverview, DailyPoint};
use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::parse_reference_date;
use crate::domain::forecast::DayForecast;
use crate::engine::analytics::ForecastAnalytics;
use crate::engine::ForecastSource;
use crate::perf::PerfGuard;

/// 分析API
pub struct AnalyticsApi {
    source: Arc<dyn ForecastSource>,
    analytics: ForecastAnalytics,
    top_days_limit: usize,
}

impl AnalyticsApi {
    pub fn new(source: Arc<dyn ForecastSource>, top_days_limit: usize) -> Self {
        Self {
            source,
            analytics: ForecastAnalytics::new(),
            top_days_limit,
        }
    }

    /// 分析总览（原始日期输入）
    pub fn overview_str(&self, reference: &str) -> ApiResult<AnalyticsOverview> {
        self.overview(parse_reference_date(reference)?)
    }

    /// 分析总览（生成参考日期所在月份的预测后统计）
    #[instrument(skip(self))]
    pub fn overview(&self, reference: NaiveDate) -> ApiResult<AnalyticsOverview> {
        let _perf = PerfGuard::new("analytics_overview");
        let days = self.source.month_forecast(reference)?;
        self.overview_of(&days)
    }

    /// 对已有预测统计
    pub fn overview_of(&self, days: &[DayForecast]) -> ApiResult<AnalyticsOverview> {
        let month = days
            .first()
            .and_then(|d| d.date.with_day(1))
            .ok_or_else(|| ApiError::InvalidArgument("预测数据为空".to_string()))?;

        Ok(AnalyticsOverview {
            month,
            weekly: self.analytics.weekday_averages(days),
            daily: days
                .iter()
                .map(|d| DailyPoint {
                    date: d.date,
                    items: d.items,
                    staff_needed: d.staff_needed,
                    trucks_needed: d.trucks_needed,
                })
                .collect(),
            top_days: self.analytics.top_days(days, self.top_days_limit),
        })
    }
}
