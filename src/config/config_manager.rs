// ==========================================
// 地铁失物资源规划 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、保存
// 存储: JSON 文件（缺失时使用默认值）
// 路径: $LOST_ITEMS_PLANNER_CONFIG 或 <config_dir>/lost-items-planner/config.json
// ==========================================

use crate::config::station_catalog::StationCatalog;
use crate::domain::resource::ResourceRates;
use crate::engine::analytics::DEFAULT_TOP_DAYS;
use crate::engine::forecast_generator::DEFAULT_FESTIVAL_DAY;
use crate::i18n;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// 配置路径环境变量
pub const CONFIG_PATH_ENV: &str = "LOST_ITEMS_PLANNER_CONFIG";

// ==========================================
// 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读写失败: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置非法: {0}")]
    Invalid(String),
}

// ==========================================
// PlannerConfig - 规划配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 站点目录
    pub stations: StationCatalog,

    /// 节日（每月第几日）
    pub festival_day_of_month: u32,

    /// 人员日费率（卢比）
    pub staff_rate_per_day: u32,

    /// 车辆日费率（卢比）
    pub truck_rate_per_day: u32,

    /// 界面语言
    pub locale: String,

    /// 分析页高峰日数量
    pub top_days_limit: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let rates = ResourceRates::default();
        Self {
            stations: StationCatalog::default(),
            festival_day_of_month: DEFAULT_FESTIVAL_DAY,
            staff_rate_per_day: rates.staff_per_day,
            truck_rate_per_day: rates.truck_per_day,
            locale: i18n::DEFAULT_LOCALE.to_string(),
            top_days_limit: DEFAULT_TOP_DAYS,
        }
    }
}

impl PlannerConfig {
    pub fn rates(&self) -> ResourceRates {
        ResourceRates {
            staff_per_day: self.staff_rate_per_day,
            truck_per_day: self.truck_rate_per_day,
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stations.is_empty() {
            return Err(ConfigError::Invalid("站点目录不能为空".to_string()));
        }
        if let Some(dup) = self.stations.first_duplicate() {
            return Err(ConfigError::Invalid(format!("站点重复: {}", dup)));
        }
        if !(1..=31).contains(&self.festival_day_of_month) {
            return Err(ConfigError::Invalid(format!(
                "festival_day_of_month 必须在 1..=31 之间: {}",
                self.festival_day_of_month
            )));
        }
        if self.staff_rate_per_day == 0 || self.truck_rate_per_day == 0 {
            return Err(ConfigError::Invalid("费率必须为正数".to_string()));
        }
        if !i18n::is_supported(&self.locale) {
            return Err(ConfigError::Invalid(format!("不支持的语言: {}", self.locale)));
        }
        if self.top_days_limit == 0 {
            return Err(ConfigError::Invalid("top_days_limit 必须为正数".to_string()));
        }
        Ok(())
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: Option<PathBuf>,
    config: PlannerConfig,
}

impl ConfigManager {
    /// 由内存配置创建（会校验）
    pub fn from_config(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { path: None, config })
    }

    /// 默认配置路径
    ///
    /// 优先使用环境变量 LOST_ITEMS_PLANNER_CONFIG
    pub fn default_config_path() -> Option<PathBuf> {
        if let Ok(p) = std::env::var(CONFIG_PATH_ENV) {
            if !p.trim().is_empty() {
                return Some(PathBuf::from(p));
            }
        }
        dirs::config_dir().map(|d| d.join("lost-items-planner").join("config.json"))
    }

    /// 从默认路径加载
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_config_path() {
            Some(path) => Self::load(&path),
            None => {
                warn!("无法确定配置目录，使用默认配置");
                Self::from_config(PlannerConfig::default())
            }
        }
    }

    /// 从文件加载（文件不存在时使用默认值）
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let config: PlannerConfig = serde_json::from_str(&text)?;
            info!(path = %path.display(), stations = config.stations.len(), "配置加载完成");
            config
        } else {
            info!(path = %path.display(), "配置文件不存在，使用默认配置");
            PlannerConfig::default()
        };

        config.validate()?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            config,
        })
    }

    /// 保存到加载路径（内存配置无路径时报错）
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| ConfigError::Invalid("配置未绑定文件路径".to_string()))?;
        self.save_to(path)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&self.config)?;
        fs::write(path, text).map_err(io_err)
    }

    /// 更新配置（校验通过才生效）
    pub fn update(&mut self, config: PlannerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 站点
    pub const STATIONS: &str = "stations";

    // 日期规则
    pub const FESTIVAL_DAY_OF_MONTH: &str = "festival_day_of_month";

    // 费率
    pub const STAFF_RATE_PER_DAY: &str = "staff_rate_per_day";
    pub const TRUCK_RATE_PER_DAY: &str = "truck_rate_per_day";

    // 界面
    pub const LOCALE: &str = "locale";
    pub const TOP_DAYS_LIMIT: &str = "top_days_limit";
}
