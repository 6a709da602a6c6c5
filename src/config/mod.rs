// ==========================================
// 地铁失物资源规划 - 配置层
// ==========================================
// 职责: 规划配置（站点目录、节日、费率、语言）
// 存储: JSON 文件
// ==========================================

pub mod config_manager;
pub mod station_catalog;

// 重导出核心配置
pub use config_manager::{config_keys, ConfigError, ConfigManager, PlannerConfig};
pub use station_catalog::{StationCatalog, DEFAULT_STATIONS};
