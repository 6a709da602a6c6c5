// ==========================================
// 地铁失物资源规划 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/配置错误为用户友好的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::engine::EngineError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("参数非法: {0}")]
    InvalidArgument(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置非法: {0}")]
    InvalidConfig(String),

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidArgument { .. } | EngineError::InvalidDate(_) => {
                ApiError::InvalidArgument(err.to_string())
            }
            EngineError::EmptyCatalog => ApiError::InvalidConfig(err.to_string()),
        }
    }
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::InvalidConfig(err.to_string())
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// API层Result类型
pub type ApiResult<T> = Result<T, ApiError>;
