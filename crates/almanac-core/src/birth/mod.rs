//! Birth record → four pillars, zodiac, nayin and elemental tally.

mod record;

pub use record::{BirthDate, BirthRecord, Gender};

use serde::{Deserialize, Serialize};

use crate::balance::ElementalTally;
use crate::error::{CoreError, Result};
use crate::sexagenary::{AnchorStrategy, SexagenaryClock, Stem, StemBranchPair, Zodiac};

/// Twelve-entry nayin phrase table indexed by `(year − 1984) mod 12`.
///
/// A simplification: the traditional table has 30 phrases keyed by the full
/// pillar pair.
const NAYIN: [&str; 12] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
    "泉中水", "屋上土",
];

/// Year, month, day and hour pillars of a birth moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: StemBranchPair,
    pub month: StemBranchPair,
    pub day: StemBranchPair,
    pub hour: StemBranchPair,
    pub zodiac: Zodiac,
    pub nayin: String,
    /// Day-cycle formula the day and hour pillars came from.
    pub strategy: AnchorStrategy,
}

impl FourPillars {
    pub fn pillars(&self) -> [StemBranchPair; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Stem of the day pillar.
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// e.g. `庚午 壬午 乙丑 癸未`
    pub fn label(&self) -> String {
        self.pillars()
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Everything computed for one birth record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub birth_date: BirthDate,
    pub gender: Gender,
    pub location: String,
    pub pillars: FourPillars,
    pub tally: ElementalTally,
}

impl BirthProfile {
    pub fn day_master(&self) -> Stem {
        self.pillars.day_master()
    }

    pub fn zodiac(&self) -> Zodiac {
        self.pillars.zodiac
    }
}

/// Builds [`BirthProfile`]s with a fixed day-cycle strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthProfileCalculator {
    clock: SexagenaryClock,
}

impl BirthProfileCalculator {
    pub fn new(strategy: AnchorStrategy) -> Self {
        Self {
            clock: SexagenaryClock::new(strategy),
        }
    }

    pub fn compute(&self, record: &BirthRecord) -> Result<BirthProfile> {
        let birth_date = record
            .birth_date
            .ok_or_else(|| CoreError::missing("birth_date"))?;
        let gender = record.gender.ok_or_else(|| CoreError::missing("gender"))?;
        let location = record
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| CoreError::missing("location"))?
            .to_string();

        let pillars = self.pillars(&birth_date)?;
        let tally = ElementalTally::from_pillars(&pillars.pillars());

        tracing::debug!(
            pillars = %pillars.label(),
            zodiac = %pillars.zodiac,
            "birth profile computed"
        );

        Ok(BirthProfile {
            birth_date,
            gender,
            location,
            pillars,
            tally,
        })
    }

    /// Four pillars for a birth date.
    pub fn pillars(&self, birth: &BirthDate) -> Result<FourPillars> {
        let civil = birth.civil_date()?;
        let year = SexagenaryClock::year_position(birth.year);
        let month = SexagenaryClock::month_position(year, birth.month)?;
        let day = self.clock.day_position(civil);
        let hour = SexagenaryClock::hour_position(day, birth.hour)?;

        let cycle_index = usize::from(year.value()) % 12;

        Ok(FourPillars {
            year: year.stem_branch(),
            month: month.stem_branch(),
            day: day.stem_branch(),
            hour: hour.stem_branch(),
            zodiac: Zodiac::from_index(cycle_index),
            nayin: NAYIN[cycle_index].to_string(),
            strategy: self.clock.strategy(),
        })
    }
}
