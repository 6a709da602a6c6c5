// ==========================================
// 地铁失物资源规划 - 引擎层
// ==========================================
// 职责: 预测生成、站点分配、动作合成、资源优化、统计
// 红线: 引擎无状态,随机源由调用方注入
// ==========================================

pub mod action_synthesizer;
pub mod analytics;
pub mod error;
pub mod forecast_generator;
pub mod forecast_source;
pub mod resource_optimizer;
pub mod station_allocator;

// 重导出核心引擎
pub use action_synthesizer::ActionSynthesizer;
pub use analytics::{find_day, find_station, ForecastAnalytics};
pub use error::{EngineError, EngineResult};
pub use forecast_generator::{month_days, DayProfile, ForecastGenerator};
pub use forecast_source::{ForecastSource, MockForecastSource};
pub use resource_optimizer::{optimal_resources, ResourceOptimizer};
pub use station_allocator::StationAllocator;
