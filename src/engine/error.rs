// ==========================================
// 地铁失物资源规划 - 引擎层错误类型
// ==========================================
// 红线: 错误信息必须包含显式原因
// ==========================================

use thiserror::Error;

/// 引擎层错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 参数非法（如负数件数）
    #[error("参数非法: {field}={value}, {reason}")]
    InvalidArgument {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// 日期非法（无法确定所在月份）
    #[error("日期非法: {0}")]
    InvalidDate(String),

    /// 站点目录为空
    #[error("站点目录为空，无法分配站点预测")]
    EmptyCatalog,
}

impl EngineError {
    /// 负数件数
    pub fn negative(field: &'static str, value: i64) -> Self {
        EngineError::InvalidArgument {
            field,
            value: value.to_string(),
            reason: "不能为负数".to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
