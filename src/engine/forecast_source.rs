// ==========================================
// 地铁失物资源规划 - 预测数据源
// ==========================================
// 职责: 隔离三项数据契约,便于替换为真实数据接入
// - month_forecast: 月度逐日预测
// - synthesize_actions: 待办动作
// - optimal_resources: 推荐资源方案
// 当前实现: MockForecastSource（随机模拟数据）
// ==========================================

use crate::config::PlannerConfig;
use crate::domain::action::ActionItem;
use crate::domain::forecast::DayForecast;
use crate::domain::resource::ResourcePlan;
use crate::engine::action_synthesizer::ActionSynthesizer;
use crate::engine::error::EngineResult;
use crate::engine::forecast_generator::ForecastGenerator;
use crate::engine::resource_optimizer;
use crate::engine::station_allocator::StationAllocator;
use chrono::NaiveDate;

/// 预测数据源
///
/// API 层只依赖该 trait
pub trait ForecastSource: Send + Sync {
    /// 参考日期所在月份的逐日预测（按日期升序）
    fn month_forecast(&self, reference: NaiveDate) -> EngineResult<Vec<DayForecast>>;

    /// 由逐日预测派生待办动作
    fn synthesize_actions(&self, days: &[DayForecast]) -> Vec<ActionItem>;

    /// 推荐资源方案（纯函数）
    fn optimal_resources(&self, item_count: i64) -> EngineResult<ResourcePlan> {
        resource_optimizer::optimal_resources(item_count)
    }
}

// ==========================================
// MockForecastSource - 随机模拟数据源
// ==========================================
// 每次调用使用线程随机源,结果不可复现
#[derive(Debug, Clone)]
pub struct MockForecastSource {
    generator: ForecastGenerator,
    synthesizer: ActionSynthesizer,
}

impl MockForecastSource {
    pub fn new(generator: ForecastGenerator) -> Self {
        Self {
            generator,
            synthesizer: ActionSynthesizer::new(),
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        let allocator = StationAllocator::new(config.stations.clone());
        Self::new(ForecastGenerator::new(
            allocator,
            config.festival_day_of_month,
        ))
    }
}

impl ForecastSource for MockForecastSource {
    fn month_forecast(&self, reference: NaiveDate) -> EngineResult<Vec<DayForecast>> {
        self.generator
            .generate_month_forecast(reference, &mut rand::thread_rng())
    }

    fn synthesize_actions(&self, days: &[DayForecast]) -> Vec<ActionItem> {
        self.synthesizer
            .synthesize_actions(days, &mut rand::thread_rng())
    }
}
