// ==========================================
// 地铁失物资源规划 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供视图层调用
// ==========================================

pub mod analytics_api;
pub mod dashboard_api;
pub mod dto;
pub mod error;
pub mod forecast_api;
pub mod planning_api;
pub mod validator;

// 重导出核心类型
pub use analytics_api::AnalyticsApi;
pub use dashboard_api::DashboardApi;
pub use dto::{ActionPlan, AnalyticsOverview, DailyPoint, DashboardOverview};
pub use error::{ApiError, ApiResult};
pub use forecast_api::ForecastApi;
pub use planning_api::PlanningApi;
