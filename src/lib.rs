// ==========================================
// 地铁失物资源规划 - 核心库
// ==========================================
// 系统定位: 失物预测 + 人力/车辆资源规划（决策支持）
// 数据来源: 随机模拟预测（可替换为真实数据接入）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 预测生成与资源计算
pub mod engine;

// 配置层 - 站点目录与费率
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 导出层 - CSV
pub mod exporter;

// 应用层 - 装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ActionItem, ActionKind, DayForecast, ForecastTag, MonthSummary, NoteKind, ResourceCost,
    ResourcePlan, ResourceRates, StationForecast, TopDay, WeekdayAverage,
};

// 引擎
pub use engine::{
    optimal_resources, ActionSynthesizer, EngineError, ForecastAnalytics, ForecastGenerator,
    ForecastSource, MockForecastSource, ResourceOptimizer, StationAllocator,
};

// API
pub use api::{AnalyticsApi, ApiError, ApiResult, DashboardApi, ForecastApi, PlanningApi};

// 配置
pub use config::{ConfigManager, PlannerConfig, StationCatalog};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "地铁失物资源规划";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
