use std::sync::OnceLock;
use std::time::Instant;

static SLOW_OP_THRESHOLD_MS: OnceLock<u64> = OnceLock::new();

/// 慢操作阈值（毫秒）
///
/// - `LOST_ITEMS_PLANNER_SLOW_OP_MS=50` 配置阈值
/// - 未配置时 Debug 为 50ms，Release 为 200ms；0 表示关闭慢操作告警
fn slow_op_threshold_ms() -> u64 {
    *SLOW_OP_THRESHOLD_MS.get_or_init(|| {
        std::env::var("LOST_ITEMS_PLANNER_SLOW_OP_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 })
    })
}

/// 性能统计 Guard：记录 elapsed_ms，超过阈值时额外输出 warn
///
/// 使用方式：
/// ```ignore
/// let _perf = lost_items_planner::perf::PerfGuard::new("dashboard_overview");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;

        tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");

        let threshold = slow_op_threshold_ms();
        if threshold > 0 && elapsed_ms >= threshold {
            tracing::warn!(target: "slow_op", op = self.op, elapsed_ms, "slow op");
        }
    }
}
