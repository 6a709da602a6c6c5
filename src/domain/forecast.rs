// ==========================================
// 地铁失物资源规划 - 预测实体
// ==========================================
// 职责: 单日预测 + 站点预测
// 生命周期: 每次生成时新建,生成后不再修改
// ==========================================

use crate::domain::types::{staff_needed_for, trucks_needed_for, ForecastTag, NoteKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// StationForecast - 站点预测
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationForecast {
    pub name: String,         // 站点名称（取自站点目录）
    pub items: u32,           // 预测失物件数
    pub staff_needed: u32,    // 所需人员
    pub trucks_needed: u32,   // 所需车辆
}

impl StationForecast {
    /// 按件数构造站点预测（人员/车辆按预测口径派生）
    pub fn new(name: impl Into<String>, items: u32) -> Self {
        Self {
            name: name.into(),
            items,
            staff_needed: staff_needed_for(items),
            trucks_needed: trucks_needed_for(items),
        }
    }
}

// ==========================================
// DayForecast - 单日预测
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub items: u32,
    pub staff_needed: u32,
    pub trucks_needed: u32,
    pub notes: String,                  // 已本地化的备注文本
    pub note_kind: NoteKind,            // 备注类型
    pub tag: ForecastTag,
    pub stations: Vec<StationForecast>, // 按件数降序
}

impl DayForecast {
    /// 站点件数合计（与 items 不保证相等）
    pub fn station_items_total(&self) -> u64 {
        self.stations.iter().map(|s| s.items as u64).sum()
    }
}
