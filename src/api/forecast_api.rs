// ==========================================
// 地铁失物资源规划 - 预测日历 API
// ==========================================
// 职责: 月度预测查询、单日详情、站点详情
// 架构: API 层 → ForecastSource
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::instrument;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::parse_reference_date;
use crate::domain::action::ActionItem;
use crate::domain::forecast::{DayForecast, StationForecast};
use crate::engine::analytics::{find_day, find_station};
use crate::engine::ForecastSource;
use crate::perf::PerfGuard;

/// 预测日历API
pub struct ForecastApi {
    source: Arc<dyn ForecastSource>,
}

impl ForecastApi {
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self { source }
    }

    /// 查询月度预测（原始日期输入）
    ///
    /// # 参数
    /// - reference: `YYYY-MM-DD` 或 `YYYY-MM`
    ///
    /// # 返回
    /// - Ok(Vec<DayForecast>): 整月逐日预测
    /// - Err(ApiError::InvalidArgument): 日期格式非法
    pub fn month_forecast(&self, reference: &str) -> ApiResult<Vec<DayForecast>> {
        let date = parse_reference_date(reference)?;
        self.month_forecast_for(date)
    }

    /// 查询月度预测
    #[instrument(skip(self))]
    pub fn month_forecast_for(&self, reference: NaiveDate) -> ApiResult<Vec<DayForecast>> {
        let _perf = PerfGuard::new("month_forecast");
        Ok(self.source.month_forecast(reference)?)
    }

    /// 派生待办动作
    pub fn actions(&self, days: &[DayForecast]) -> Vec<ActionItem> {
        self.source.synthesize_actions(days)
    }

    /// 单日详情
    pub fn day_detail(&self, days: &[DayForecast], date: NaiveDate) -> ApiResult<DayForecast> {
        find_day(days, date)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("预测日(date={})不存在", date)))
    }

    /// 站点详情
    pub fn station_detail(&self, day: &DayForecast, name: &str) -> ApiResult<StationForecast> {
        find_station(day, name).cloned().ok_or_else(|| {
            ApiError::NotFound(format!("站点(name={}, date={})不存在", name, day.date))
        })
    }
}
