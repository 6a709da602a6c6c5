// ==========================================
// 地铁失物资源规划 - 驾驶舱 API
// ==========================================
// 职责: 当月预测 + 今日/后续待办 + 月度汇总
// 架构: API 层 → ForecastSource + ForecastAnalytics
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::api::dto::DashboardOverview;
use crate::api::error::ApiResult;
use crate::engine::analytics::{find_day, ForecastAnalytics};
use crate::engine::ForecastSource;
use crate::perf::PerfGuard;

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// 职责：
/// 1. 生成当月预测与待办动作
/// 2. 拆分今日待办 / 后续待办
/// 3. 月度汇总（总件数、人·天、车·天、高等级天数）
pub struct DashboardApi {
    source: Arc<dyn ForecastSource>,
    analytics: ForecastAnalytics,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - source: 预测数据源
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self {
            source,
            analytics: ForecastAnalytics::new(),
        }
    }

    /// 驾驶舱总览
    ///
    /// # 参数
    /// - today: 当前日期（决定月份与今日/后续拆分）
    ///
    /// # 返回
    /// - Ok(DashboardOverview)
    /// - Err(ApiError): 数据源失败
    #[instrument(skip(self))]
    pub fn overview(&self, today: NaiveDate) -> ApiResult<DashboardOverview> {
        let _perf = PerfGuard::new("dashboard_overview");

        let days = self.source.month_forecast(today)?;
        let actions = self.source.synthesize_actions(&days);

        let (today_actions, upcoming_actions): (Vec<_>, Vec<_>) =
            actions.iter().cloned().partition(|a| a.is_on(today));
        let upcoming_actions: Vec<_> = upcoming_actions
            .into_iter()
            .filter(|a| !a.completed)
            .collect();

        let summary = self.analytics.summarize_month(&days);
        let today_forecast = find_day(&days, today).cloned();

        info!(
            day_count = days.len(),
            action_count = actions.len(),
            today_actions = today_actions.len(),
            "驾驶舱总览生成完成"
        );

        Ok(DashboardOverview {
            today,
            summary,
            today_forecast,
            today_actions,
            upcoming_actions,
            days,
            actions,
        })
    }
}
