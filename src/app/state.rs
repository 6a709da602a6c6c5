// ==========================================
// 地铁失物资源规划 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{AnalyticsApi, ApiResult, DashboardApi, ForecastApi, PlanningApi};
use crate::config::{ConfigManager, PlannerConfig};
use crate::engine::{ForecastSource, MockForecastSource, ResourceOptimizer};

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 当前配置
    pub config: PlannerConfig,

    /// 预测数据源
    pub source: Arc<dyn ForecastSource>,

    /// 预测日历API
    pub forecast_api: Arc<ForecastApi>,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,

    /// 分析API
    pub analytics_api: Arc<AnalyticsApi>,

    /// 资源规划API
    pub planning_api: Arc<PlanningApi>,
}

impl AppState {
    /// 由配置创建（使用模拟数据源）
    pub fn new(config_manager: &ConfigManager) -> ApiResult<Self> {
        let config = config_manager.config().clone();
        config.validate()?;
        // validate() 已保证语言受支持
        crate::i18n::set_locale(&config.locale);

        let source: Arc<dyn ForecastSource> = Arc::new(MockForecastSource::from_config(&config));
        Ok(Self::with_source(config, source))
    }

    /// 使用指定数据源创建（替换为真实数据接入时使用）
    pub fn with_source(config: PlannerConfig, source: Arc<dyn ForecastSource>) -> Self {
        tracing::info!(
            stations = config.stations.len(),
            festival_day = config.festival_day_of_month,
            locale = %config.locale,
            "初始化AppState"
        );

        let optimizer = ResourceOptimizer::new(config.rates());

        Self {
            forecast_api: Arc::new(ForecastApi::new(source.clone())),
            dashboard_api: Arc::new(DashboardApi::new(source.clone())),
            analytics_api: Arc::new(AnalyticsApi::new(source.clone(), config.top_days_limit)),
            planning_api: Arc::new(PlanningApi::new(source.clone(), optimizer)),
            source,
            config,
        }
    }
}
