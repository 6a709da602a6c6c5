// ==========================================
// 地铁失物资源规划 - 资源方案
// ==========================================

use serde::{Deserialize, Serialize};

/// 推荐资源方案（人员 + 车辆）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub item_count: u32,
    pub staff: u32,
    pub trucks: u32,
}

/// 单日资源费用（卢比/天）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCost {
    pub staff: u32,
    pub trucks: u32,
    pub staff_cost: u64,
    pub truck_cost: u64,
    pub total_cost: u64,
}

/// 资源日费率
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRates {
    pub staff_per_day: u32,
    pub truck_per_day: u32,
}

impl Default for ResourceRates {
    fn default() -> Self {
        Self {
            staff_per_day: 800,
            truck_per_day: 2000,
        }
    }
}
