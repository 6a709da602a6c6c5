// ==========================================
// 地铁失物资源规划 - 站点分配器
// ==========================================
// 职责: 将单日失物总数分摊到随机抽取的站点
// 输入: 单日失物总数 + 站点目录
// 输出: 站点预测列表（按件数降序）
// ==========================================
// 分摊规则:
// 1. 活跃站点数 ∈ [10, 29]，不超过目录大小
// 2. 无放回随机抽取站点
// 3. 除最后一站外，每站取 max(1, U[0, ceil(剩余/剩余站数*1.5)))
// 4. 最后一站吸收剩余（为负时取 0）
// 注意: 站点合计不保证等于单日总数（1.5 倍上限 + 每站至少 1 件）
// ==========================================

use crate::config::station_catalog::StationCatalog;
use crate::domain::forecast::StationForecast;
use crate::engine::error::{EngineError, EngineResult};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// 活跃站点数下限（含）
pub const MIN_ACTIVE_STATIONS: usize = 10;

/// 活跃站点数上限（不含）
pub const MAX_ACTIVE_STATIONS_EXCLUSIVE: usize = 30;

/// 单站份额上限倍数
const SHARE_OVERSHOOT: f64 = 1.5;

// ==========================================
// StationAllocator - 站点分配器
// ==========================================
#[derive(Debug, Clone)]
pub struct StationAllocator {
    catalog: StationCatalog,
}

impl StationAllocator {
    pub fn new(catalog: StationCatalog) -> Self {
        Self { catalog }
    }

    /// 分配站点预测
    ///
    /// # 参数
    /// - total_items: 单日失物总数（负数非法）
    /// - rng: 随机源
    ///
    /// # 返回
    /// - Ok(Vec<StationForecast>): 按件数降序
    /// - Err(EngineError): 件数为负或超出 u32 / 站点目录为空
    pub fn allocate_stations<R: Rng + ?Sized>(
        &self,
        total_items: i64,
        rng: &mut R,
    ) -> EngineResult<Vec<StationForecast>> {
        if total_items < 0 {
            return Err(EngineError::negative("total_items", total_items));
        }
        let total = u32::try_from(total_items).map_err(|_| EngineError::InvalidArgument {
            field: "total_items",
            value: total_items.to_string(),
            reason: "超出可计算范围".to_string(),
        })?;
        if self.catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        // 1. 活跃站点数
        let active_count = rng
            .gen_range(MIN_ACTIVE_STATIONS..MAX_ACTIVE_STATIONS_EXCLUSIVE)
            .min(self.catalog.len());

        // 2. 无放回抽取（partial_shuffle 的前段即为随机顺序的样本）
        let mut pool: Vec<&String> = self.catalog.names().iter().collect();
        let (selected, _) = pool.partial_shuffle(rng, active_count);

        // 3. 逐站分摊
        let last_index = selected.len() - 1;
        let mut remaining = i64::from(total);
        let mut stations = Vec::with_capacity(selected.len());

        for (index, name) in selected.iter().enumerate() {
            // 非最后一站 stations_left ≥ 2，份额 < 0.75*total，不会超出 u32
            let items = if index == last_index {
                remaining.max(0) as u32
            } else {
                let stations_left = (active_count - index) as f64;
                let cap = (remaining as f64 / stations_left * SHARE_OVERSHOOT).ceil() as i64;
                let draw = if cap > 0 { rng.gen_range(0..cap) } else { 0 };
                let share = draw.max(1);
                remaining -= share;
                share as u32
            };

            stations.push(StationForecast::new(name.as_str(), items));
        }

        // 4. 按件数降序（稳定排序）
        stations.sort_by(|a, b| b.items.cmp(&a.items));

        debug!(
            total_items,
            active_count,
            allocated = stations.iter().map(|s| s.items as u64).sum::<u64>(),
            "站点分配完成"
        );

        Ok(stations)
    }
}
