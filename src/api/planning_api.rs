// ==========================================
// 地铁失物资源规划 - 资源规划 API
// ==========================================
// 职责: 推荐资源方案、费用估算、待办动作配资源
// ==========================================

use std::sync::Arc;

use tracing::debug;

use crate::api::dto::ActionPlan;
use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::parse_item_count;
use crate::domain::action::ActionItem;
use crate::domain::resource::{ResourceCost, ResourcePlan};
use crate::engine::{ForecastSource, ResourceOptimizer};

/// 资源规划API
pub struct PlanningApi {
    source: Arc<dyn ForecastSource>,
    optimizer: ResourceOptimizer,
}

impl PlanningApi {
    pub fn new(source: Arc<dyn ForecastSource>, optimizer: ResourceOptimizer) -> Self {
        Self { source, optimizer }
    }

    /// 推荐资源方案
    ///
    /// # 返回
    /// - Err(ApiError::InvalidArgument): 件数为负
    pub fn optimize(&self, item_count: i64) -> ApiResult<ResourcePlan> {
        let plan = self.source.optimal_resources(item_count)?;
        debug!(item_count, staff = plan.staff, trucks = plan.trucks, "推荐资源方案");
        Ok(plan)
    }

    /// 推荐资源方案（原始输入）
    pub fn optimize_input(&self, raw: &str) -> ApiResult<ResourcePlan> {
        self.optimize(parse_item_count(raw)?)
    }

    /// 费用估算
    pub fn estimate_cost(&self, staff: u32, trucks: u32) -> ResourceCost {
        self.optimizer.estimate_cost(staff, trucks)
    }

    /// 为待办动作生成资源方案
    pub fn plan_for_action(&self, actions: &[ActionItem], action_id: &str) -> ApiResult<ActionPlan> {
        let action = actions
            .iter()
            .find(|a| a.id == action_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("待办动作(id={})不存在", action_id)))?;

        let plan = self.optimize(action.item_count as i64)?;
        let cost = self.estimate_cost(plan.staff, plan.trucks);

        Ok(ActionPlan { action, plan, cost })
    }
}
