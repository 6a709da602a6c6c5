// ==========================================
// 地铁失物资源规划 - 待办动作
// ==========================================
// 由高/中等级预测日派生,不单独创建
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 待办动作（收集/处理失物）
///
/// `id` 仅用于前端列表 key，不保证跨调用唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub item_count: u32,
    pub staff_assigned: u32,
    pub trucks_assigned: u32,
    pub completed: bool,
}

impl ActionItem {
    /// 是否为指定日期的动作
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
