//! Civil date → cycle position.
//!
//! ## Anchors
//!
//! | Pillar | Rule |
//! |--------|------|
//! | Year   | `(year − 1984) mod 60`, 1984 = 甲子 |
//! | Month  | stem `(2·year + month) mod 10`, branch `month mod 12` (Feb = 寅) |
//! | Day    | accurate: `(51 + days since 2025-08-14) mod 60`, 2025-08-14 = 乙卯 |
//! | Day    | approximate: `(365·year + 30·month + day) mod 60` |
//! | Hour   | branch `⌊hour/2⌋ mod 12`, stem `(2·day + branch) mod 10` |
//!
//! Month and hour pillars are fixed policy formulas, not solar-term astronomy.
//! Each is combined into a single cycle position so the pillar is always a
//! reachable stem/branch pair.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::position::{CyclePosition, StemBranchPair};
use super::symbols::{Branch, Stem};
use crate::error::{CoreError, Result};

/// Reference year whose cycle position is 0 (甲子).
pub const BASE_CYCLIC_YEAR: i32 = 1984;

/// 2025-08-14 as days from the common era (chrono `num_days_from_ce`).
pub const ANCHOR_DAYS_FROM_CE: i32 = 739_477;

/// Cycle position of the anchor day (乙卯).
pub const ANCHOR_POSITION: i64 = 51;

/// Which day-cycle formula a computation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorStrategy {
    /// Offset from the calibrated 2025-08-14 anchor.
    #[default]
    Accurate,
    /// Naive 365/30-day count. Labeled wherever it is used.
    Approximate,
}

impl std::str::FromStr for AnchorStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "accurate" => Ok(AnchorStrategy::Accurate),
            "approximate" => Ok(AnchorStrategy::Approximate),
            other => Err(CoreError::invalid(
                "strategy",
                format!("expected 'accurate' or 'approximate', got '{other}'"),
            )),
        }
    }
}

/// Converts civil dates and hours into cycle positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SexagenaryClock {
    strategy: AnchorStrategy,
}

impl SexagenaryClock {
    pub fn new(strategy: AnchorStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> AnchorStrategy {
        self.strategy
    }

    /// Day-cycle position for a calendar date.
    pub fn day_position(&self, date: NaiveDate) -> CyclePosition {
        match self.strategy {
            AnchorStrategy::Accurate => {
                let days = i64::from(date.num_days_from_ce() - ANCHOR_DAYS_FROM_CE);
                CyclePosition::offset(CyclePosition::new(ANCHOR_POSITION), days)
            }
            AnchorStrategy::Approximate => {
                let naive = i64::from(date.year()) * 365
                    + i64::from(date.month()) * 30
                    + i64::from(date.day());
                CyclePosition::new(naive)
            }
        }
    }

    pub fn day_pillar(&self, date: NaiveDate) -> StemBranchPair {
        self.day_position(date).stem_branch()
    }

    /// `(year − 1984) mod 60`.
    pub fn year_position(year: i32) -> CyclePosition {
        CyclePosition::new(i64::from(year) - i64::from(BASE_CYCLIC_YEAR))
    }

    /// Month pillar from the year position and a civil month in `1..=12`.
    pub fn month_position(year: CyclePosition, month: u32) -> Result<CyclePosition> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::invalid(
                "month",
                format!("month {month} is outside 1..=12"),
            ));
        }
        let m = month as usize;
        let stem = Stem::from_index(usize::from(year.value()) * 2 + m);
        let branch = Branch::from_index(m);
        combine(stem, branch)
    }

    /// Hour pillar from the day position and an hour in `0..=23`.
    pub fn hour_position(day: CyclePosition, hour: u32) -> Result<CyclePosition> {
        if hour > 23 {
            return Err(CoreError::invalid(
                "hour",
                format!("hour {hour} is outside 0..=23"),
            ));
        }
        let slot = (hour / 2) as usize;
        let branch = Branch::from_index(slot);
        let stem = Stem::from_index(usize::from(day.value()) * 2 + branch.index());
        combine(stem, branch)
    }
}

fn combine(stem: Stem, branch: Branch) -> Result<CyclePosition> {
    // Both formulas keep stem and branch at equal parity.
    CyclePosition::from_stem_branch(stem, branch).ok_or_else(|| {
        CoreError::invalid("pillar", format!("{stem}{branch} is not a cycle position"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_constant_matches_chrono() {
        assert_eq!(date(2025, 8, 14).num_days_from_ce(), ANCHOR_DAYS_FROM_CE);
    }

    #[test]
    fn accurate_anchor_day_is_yi_mao() {
        let pair = SexagenaryClock::default().day_pillar(date(2025, 8, 14));
        assert_eq!(pair.stem().index(), 1);
        assert_eq!(pair.branch().index(), 3);
    }

    #[test]
    fn accurate_day_advances_one_per_day() {
        let clock = SexagenaryClock::new(AnchorStrategy::Accurate);
        assert_eq!(clock.day_position(date(2025, 8, 15)).value(), 52);
        assert_eq!(clock.day_position(date(2025, 8, 13)).value(), 50);
        assert_eq!(clock.day_position(date(2025, 10, 13)).value(), 51);
    }

    #[test]
    fn accurate_day_before_anchor_is_non_negative() {
        let clock = SexagenaryClock::default();
        // 2000-01-01 was a 戊午 day.
        let pair = clock.day_pillar(date(2000, 1, 1));
        assert_eq!(pair.label(), "戊午");
    }

    #[test]
    fn approximate_day_uses_naive_count() {
        let clock = SexagenaryClock::new(AnchorStrategy::Approximate);
        let expected = (2025 * 365 + 8 * 30 + 14) % 60;
        assert_eq!(i64::from(clock.day_position(date(2025, 8, 14)).value()), expected);
    }

    #[test]
    fn year_position_base() {
        assert_eq!(SexagenaryClock::year_position(1984).value(), 0);
        assert_eq!(SexagenaryClock::year_position(1990).value(), 6);
        assert_eq!(SexagenaryClock::year_position(1983).value(), 59);
    }

    #[test]
    fn month_position_uses_year_stem_formula() {
        let year = SexagenaryClock::year_position(1990);
        let month = SexagenaryClock::month_position(year, 6).unwrap();
        assert_eq!(month.stem().index(), (6 * 2 + 6) % 10);
        assert_eq!(month.branch().index(), 6);
        assert!(SexagenaryClock::month_position(year, 0).is_err());
        assert!(SexagenaryClock::month_position(year, 13).is_err());
    }

    #[test]
    fn hour_position_branch_and_stem() {
        let day = CyclePosition::new(51);
        let hour = SexagenaryClock::hour_position(day, 14).unwrap();
        assert_eq!(hour.branch(), Branch::Wei);
        assert_eq!(hour.stem().index(), (51 * 2 + 7) % 10);
        assert!(SexagenaryClock::hour_position(day, 24).unwrap_err().is_invalid_input());
    }

    #[test]
    fn strategy_parses() {
        assert_eq!("approximate".parse::<AnchorStrategy>().unwrap(), AnchorStrategy::Approximate);
        assert!("exact".parse::<AnchorStrategy>().is_err());
    }
}
