// ==========================================
// 地铁失物资源规划 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含生成逻辑,实体均为值对象
// ==========================================

pub mod action;
pub mod analytics;
pub mod forecast;
pub mod resource;
pub mod types;

// 重导出核心类型
pub use action::ActionItem;
pub use analytics::{MonthSummary, TopDay, WeekdayAverage};
pub use forecast::{DayForecast, StationForecast};
pub use resource::{ResourceCost, ResourcePlan, ResourceRates};
pub use types::{ActionKind, ForecastTag, NoteKind};
