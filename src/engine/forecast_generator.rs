// ==========================================
// 地铁失物资源规划 - 月度预测生成器
// ==========================================
// 职责: 生成参考日期所在月份的逐日模拟预测
// 输入: 参考日期 + 随机源
// 输出: Vec<DayForecast>（按日期升序,覆盖整月）
// ==========================================
// 单日规则:
// - 基础件数 U[10, 29]
// - 周末 +U[15, 44]，周一/周五 +U[5, 19]，节日 +U[20, 49]（可叠加）
// - 备注优先级: 节日 > 周末 > 繁忙工作日
// 红线: 无固定随机种子,两次调用结果不保证相同
// ==========================================

use crate::domain::forecast::DayForecast;
use crate::domain::types::{staff_needed_for, trucks_needed_for, ForecastTag, NoteKind};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::station_allocator::StationAllocator;
use crate::i18n;
use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::{info, instrument};

/// 默认节日（每月 15 日）
pub const DEFAULT_FESTIVAL_DAY: u32 = 15;

const BASE_ITEMS: RangeInclusive<u32> = 10..=29;
const WEEKEND_BONUS: RangeInclusive<u32> = 15..=44;
const BUSY_WEEKDAY_BONUS: RangeInclusive<u32> = 5..=19;
const FESTIVAL_BONUS: RangeInclusive<u32> = 20..=49;

// ==========================================
// DayProfile - 日期特征
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayProfile {
    pub is_weekend: bool,
    pub is_busy_weekday: bool,
    pub is_festival: bool,
}

impl DayProfile {
    pub fn classify(date: NaiveDate, festival_day: u32) -> Self {
        let weekday = date.weekday();
        Self {
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
            is_busy_weekday: matches!(weekday, Weekday::Mon | Weekday::Fri),
            is_festival: date.day() == festival_day,
        }
    }

    /// 备注类型（节日 > 周末 > 繁忙工作日）
    pub fn note_kind(&self) -> NoteKind {
        if self.is_festival {
            NoteKind::Festival
        } else if self.is_weekend {
            NoteKind::Weekend
        } else if self.is_busy_weekday {
            NoteKind::BusyWeekday
        } else {
            NoteKind::None
        }
    }
}

/// 参考日期所在月份的全部日期（升序）
pub fn month_days(reference: NaiveDate) -> EngineResult<Vec<NaiveDate>> {
    let first = reference
        .with_day(1)
        .ok_or_else(|| EngineError::InvalidDate(reference.to_string()))?;
    let month = first.month();
    Ok(first.iter_days().take_while(|d| d.month() == month).collect())
}

// ==========================================
// ForecastGenerator - 月度预测生成器
// ==========================================
#[derive(Debug, Clone)]
pub struct ForecastGenerator {
    allocator: StationAllocator,
    festival_day: u32,
}

impl ForecastGenerator {
    pub fn new(allocator: StationAllocator, festival_day: u32) -> Self {
        Self {
            allocator,
            festival_day,
        }
    }

    /// 生成月度预测
    ///
    /// # 参数
    /// - reference: 参考日期（取其所在月份）
    /// - rng: 随机源
    ///
    /// # 返回
    /// 整月逐日预测,每日包含站点分配
    #[instrument(skip(self, rng))]
    pub fn generate_month_forecast<R: Rng + ?Sized>(
        &self,
        reference: NaiveDate,
        rng: &mut R,
    ) -> EngineResult<Vec<DayForecast>> {
        let days = month_days(reference)?
            .into_iter()
            .map(|date| self.generate_day(date, rng))
            .collect::<EngineResult<Vec<_>>>()?;

        info!(
            month = %reference.format("%Y-%m"),
            day_count = days.len(),
            high_days = days.iter().filter(|d| d.tag == ForecastTag::High).count(),
            "月度预测生成完成"
        );

        Ok(days)
    }

    /// 生成单日预测
    pub fn generate_day<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        rng: &mut R,
    ) -> EngineResult<DayForecast> {
        let profile = DayProfile::classify(date, self.festival_day);

        let mut items = rng.gen_range(BASE_ITEMS);
        if profile.is_weekend {
            items += rng.gen_range(WEEKEND_BONUS);
        }
        if profile.is_busy_weekday {
            items += rng.gen_range(BUSY_WEEKDAY_BONUS);
        }
        if profile.is_festival {
            items += rng.gen_range(FESTIVAL_BONUS);
        }

        let stations = self.allocator.allocate_stations(items as i64, rng)?;
        let note_kind = profile.note_kind();

        Ok(DayForecast {
            date,
            items,
            staff_needed: staff_needed_for(items),
            trucks_needed: trucks_needed_for(items),
            notes: i18n::note_text(note_kind),
            note_kind,
            tag: ForecastTag::from_items(items),
            stations,
        })
    }
}
