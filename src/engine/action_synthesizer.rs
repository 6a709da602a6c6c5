// ==========================================
// 地铁失物资源规划 - 待办动作合成器
// ==========================================
// 职责: 由月度预测派生待办动作
// 规则:
// - 高等级日: 全部生成 action-{n}
// - 中等级日: 各自以 50% 概率生成 action-medium-{n}
// - 低等级日: 不生成
// 顺序: 先高等级（按日期）,后中等级（按日期）,两组编号各自从 1 开始
// ==========================================

use crate::domain::action::ActionItem;
use crate::domain::forecast::DayForecast;
use crate::domain::types::{ActionKind, ForecastTag};
use crate::i18n::action_title;
use rand::Rng;
use tracing::{debug, instrument};

/// 中等级日被抽中的概率
pub const MEDIUM_ACTION_PROBABILITY: f64 = 0.5;

// ==========================================
// ActionSynthesizer - 待办动作合成器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionSynthesizer;

impl ActionSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// 合成待办动作
    #[instrument(skip(self, days, rng), fields(days = days.len()))]
    pub fn synthesize_actions<R: Rng + ?Sized>(
        &self,
        days: &[DayForecast],
        rng: &mut R,
    ) -> Vec<ActionItem> {
        let mut actions: Vec<ActionItem> = days
            .iter()
            .filter(|day| day.tag == ForecastTag::High)
            .enumerate()
            .map(|(index, day)| build_action(ActionKind::EmptyStock, index + 1, day))
            .collect();
        let high_count = actions.len();

        // 每个中等级日独立抽签,编号只对抽中的日期连续
        let sampled: Vec<&DayForecast> = days
            .iter()
            .filter(|day| day.tag == ForecastTag::Medium)
            .filter(|_| rng.gen_bool(MEDIUM_ACTION_PROBABILITY))
            .collect();

        actions.extend(
            sampled
                .into_iter()
                .enumerate()
                .map(|(index, day)| build_action(ActionKind::ProcessFound, index + 1, day)),
        );

        debug!(
            high_count,
            medium_count = actions.len() - high_count,
            "待办动作合成完成"
        );

        actions
    }
}

fn build_action(kind: ActionKind, seq: usize, day: &DayForecast) -> ActionItem {
    ActionItem {
        id: format!("{}-{}", kind.id_prefix(), seq),
        title: action_title(kind, day.items),
        date: day.date,
        item_count: day.items,
        staff_assigned: day.staff_needed,
        trucks_assigned: day.trucks_needed,
        completed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{staff_needed_for, trucks_needed_for, NoteKind};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(d: u32, items: u32) -> DayForecast {
        DayForecast {
            date: NaiveDate::from_ymd_opt(2025, 6, d).unwrap(),
            items,
            staff_needed: staff_needed_for(items),
            trucks_needed: trucks_needed_for(items),
            notes: String::new(),
            note_kind: NoteKind::None,
            tag: ForecastTag::from_items(items),
            stations: Vec::new(),
        }
    }

    #[test]
    fn test_high_days_always_produce_actions_first() {
        let days = vec![day(1, 40), day(2, 60), day(3, 12), day(4, 75), day(5, 45)];
        let mut rng = StdRng::seed_from_u64(1);
        let actions = ActionSynthesizer::new().synthesize_actions(&days, &mut rng);

        assert!(actions.len() >= 2);
        assert_eq!(actions[0].id, "action-1");
        assert_eq!(actions[0].date, days[1].date);
        assert_eq!(actions[0].item_count, 60);
        assert_eq!(actions[0].staff_assigned, 6);
        assert_eq!(actions[0].trucks_assigned, 3);
        assert_eq!(actions[1].id, "action-2");
        assert_eq!(actions[1].date, days[3].date);

        for action in &actions[2..] {
            assert!(action.id.starts_with("action-medium-"));
        }
        assert!(actions.iter().all(|a| !a.completed));
    }

    #[test]
    fn test_low_days_never_produce_actions() {
        let days: Vec<_> = (1..=30).map(|d| day(d, 10 + d % 20)).collect();
        let mut rng = StdRng::seed_from_u64(99);
        let actions = ActionSynthesizer::new().synthesize_actions(&days, &mut rng);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_medium_sampling_is_subset_in_day_order() {
        let days: Vec<_> = (1..=30).map(|d| day(d, 35)).collect();
        let mut rng = StdRng::seed_from_u64(5);
        let actions = ActionSynthesizer::new().synthesize_actions(&days, &mut rng);

        assert!(actions.len() <= days.len());
        for (i, action) in actions.iter().enumerate() {
            assert_eq!(action.id, format!("action-medium-{}", i + 1));
        }
        for pair in actions.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_medium_sampling_picks_some_and_skips_some() {
        let days: Vec<_> = (1..=30).map(|d| day(d, 35)).collect();
        let synthesizer = ActionSynthesizer::new();

        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let actions = synthesizer.synthesize_actions(&days, &mut rng);
            // 30 次独立 50% 抽签: 全中或全不中的概率为 2^-29
            assert!(!actions.is_empty(), "seed {} 未抽中任何中等级日", seed);
            assert!(actions.len() < days.len(), "seed {} 抽中全部中等级日", seed);
            assert!(actions.iter().all(|a| a.item_count == 35 && a.title.contains("35")));
        }
    }
}
