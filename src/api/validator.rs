// ==========================================
// 地铁失物资源规划 - 输入校验
// ==========================================
// 职责: 解析并校验前端原始输入（日期、件数）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use chrono::NaiveDate;

/// 解析参考日期
///
/// 支持 `YYYY-MM-DD` 与 `YYYY-MM`（取当月 1 日）
pub fn parse_reference_date(raw: &str) -> ApiResult<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ApiError::InvalidArgument("日期不能为空".to_string()));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"))
        .map_err(|_| {
            ApiError::InvalidArgument(format!("日期格式非法: {}（应为 YYYY-MM-DD 或 YYYY-MM）", s))
        })
}

/// 解析件数输入（非负整数）
pub fn parse_item_count(raw: &str) -> ApiResult<i64> {
    let s = raw.trim();
    let count = s
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidArgument(format!("件数必须为整数: {}", s)))?;
    if count < 0 {
        return Err(ApiError::InvalidArgument(format!("件数不能为负数: {}", count)));
    }
    Ok(count)
}
