// ==========================================
// 地铁失物资源规划 - 资源优化器
// ==========================================
// 职责: 失物件数 → 推荐 (人员, 车辆)
// 说明: 固定分档启发式,不是求解器
// ==========================================
// 分档:
// - 基础: staff = ceil(n/10), trucks = ceil(n/30)
// - n > 100: staff = ceil(n/12), trucks = ceil(n/35)（规模效应）
// - n < 20: 两者至少为 1
// ==========================================

use crate::domain::resource::{ResourceCost, ResourcePlan, ResourceRates};
use crate::engine::error::{EngineError, EngineResult};

/// 规模效应起点（件）
pub const LARGE_VOLUME_THRESHOLD: u32 = 100;

/// 最低配置适用上限（件）
pub const SMALL_VOLUME_THRESHOLD: u32 = 20;

// ==========================================
// ResourceOptimizer - 资源优化器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ResourceOptimizer {
    rates: ResourceRates,
}

impl ResourceOptimizer {
    pub fn new(rates: ResourceRates) -> Self {
        Self { rates }
    }

    /// 计算推荐资源方案
    ///
    /// # 参数
    /// - item_count: 失物件数（负数非法）
    ///
    /// # 返回
    /// - Ok(ResourcePlan): 推荐方案（纯函数，相同输入结果相同）
    /// - Err(EngineError::InvalidArgument): 件数为负
    pub fn optimal_resources(&self, item_count: i64) -> EngineResult<ResourcePlan> {
        optimal_resources(item_count)
    }

    /// 估算单日资源费用
    pub fn estimate_cost(&self, staff: u32, trucks: u32) -> ResourceCost {
        estimate_cost(staff, trucks, self.rates)
    }
}

/// 计算推荐资源方案（无状态版本）
pub fn optimal_resources(item_count: i64) -> EngineResult<ResourcePlan> {
    if item_count < 0 {
        return Err(EngineError::negative("item_count", item_count));
    }
    let n = u32::try_from(item_count).map_err(|_| EngineError::InvalidArgument {
        field: "item_count",
        value: item_count.to_string(),
        reason: "超出可计算范围".to_string(),
    })?;

    let (staff, trucks) = if n > LARGE_VOLUME_THRESHOLD {
        (n.div_ceil(12), n.div_ceil(35))
    } else if n < SMALL_VOLUME_THRESHOLD {
        (n.div_ceil(10).max(1), n.div_ceil(30).max(1))
    } else {
        (n.div_ceil(10), n.div_ceil(30))
    };

    Ok(ResourcePlan {
        item_count: n,
        staff,
        trucks,
    })
}

/// 估算单日资源费用
pub fn estimate_cost(staff: u32, trucks: u32, rates: ResourceRates) -> ResourceCost {
    let staff_cost = staff as u64 * rates.staff_per_day as u64;
    let truck_cost = trucks as u64 * rates.truck_per_day as u64;
    ResourceCost {
        staff,
        trucks,
        staff_cost,
        truck_cost,
        total_cost: staff_cost + truck_cost,
    }
}
