// ==========================================
// 地铁失物资源规划 - 应用层
// ==========================================
// 职责: 配置 → 数据源 → API 的装配
// ==========================================

pub mod state;

pub use state::AppState;
