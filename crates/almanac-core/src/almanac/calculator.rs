//! Self-contained daily almanac.
//!
//! Everything is a function of the date: the day pillar comes from the clock,
//! and the activity lists, hourly grid and score come from a day index
//! counted from 2000-01-01. Activity selection uses a PCG generator seeded
//! with that index and built inside each call, so the same date always yields
//! the same lists in the same order and concurrent calls never share state.

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use super::lunar::{approximate_lunar_label, solar_term_on, LunarLabel};
use super::tables::{conflict_zodiac, wealth_direction, SUITABLE_CANDIDATES, UNSUITABLE_CANDIDATES};
use crate::birth::BirthProfile;
use crate::compass::Direction;
use crate::date::{format_iso_date, parse_iso_date};
use crate::error::Result;
use crate::sexagenary::{AnchorStrategy, Branch, SexagenaryClock, Stem, StemBranchPair, Zodiac};

/// 2000-01-01 as days from the common era; day index 0.
pub const DAY_INDEX_BASE_DAYS_FROM_CE: i32 = 730_120;

/// Hourly grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneGrade {
    GreatFortune,
    Fortune,
    Neutral,
    Inauspicious,
    GreatInauspicious,
}

impl FortuneGrade {
    pub const TABLE: [FortuneGrade; 5] = [
        FortuneGrade::GreatFortune,
        FortuneGrade::Fortune,
        FortuneGrade::Neutral,
        FortuneGrade::Inauspicious,
        FortuneGrade::GreatInauspicious,
    ];

    pub fn hanzi(self) -> &'static str {
        match self {
            FortuneGrade::GreatFortune => "大吉",
            FortuneGrade::Fortune => "吉",
            FortuneGrade::Neutral => "平",
            FortuneGrade::Inauspicious => "凶",
            FortuneGrade::GreatInauspicious => "大凶",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSlot {
    pub branch: Branch,
    pub label: String,
    pub grade: FortuneGrade,
    /// e.g. `大吉`
    pub fortune: String,
}

/// How a person's day master relates to today's stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemRelation {
    Same,
    Combining,
    Clashing,
}

/// Label attached to a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl FortuneTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => FortuneTier::Excellent,
            60..=79 => FortuneTier::Good,
            40..=59 => FortuneTier::Fair,
            _ => FortuneTier::Poor,
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            FortuneTier::Excellent => "今日运势极佳，适合进行重要决策和新的开始",
            FortuneTier::Good => "今日运势良好，可以正常进行各项活动",
            FortuneTier::Fair => "今日运势平平，宜保持平常心，不宜冒险",
            FortuneTier::Poor => "今日运势不佳，宜谨慎行事，避免重要决策",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalCompatibility {
    pub day_master: Stem,
    pub day_stem: Stem,
    pub relation: StemRelation,
    pub score: u8,
    pub tier: FortuneTier,
    pub advice: String,
}

impl PersonalCompatibility {
    pub fn between(day_master: Stem, day_stem: Stem) -> Self {
        let (relation, delta) = if day_master == day_stem {
            (StemRelation::Same, 20)
        } else if day_master.combines_with(day_stem) {
            (StemRelation::Combining, 10)
        } else {
            (StemRelation::Clashing, -10)
        };
        let score = (50i32 + delta).clamp(0, 100) as u8;
        let tier = FortuneTier::from_score(score);
        Self {
            day_master,
            day_stem,
            relation,
            score,
            tier,
            advice: tier.advice().to_string(),
        }
    }
}

/// One day's almanac.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAlmanac {
    /// Canonical `YYYY-MM-DD`.
    pub date: String,
    pub day_pillar: StemBranchPair,
    pub strategy: AnchorStrategy,
    pub suitable: Vec<String>,
    pub unsuitable: Vec<String>,
    /// Twelve slots, 子 first.
    pub hourly: Vec<HourSlot>,
    pub wealth_direction: Direction,
    pub conflict_zodiac: Zodiac,
    /// `[0, 100]`
    pub score: u8,
    pub personal: Option<PersonalCompatibility>,
    pub lunar: LunarLabel,
    pub solar_term: Option<String>,
}

impl DailyAlmanac {
    /// More suitable than unsuitable activities.
    pub fn is_generally_auspicious(&self) -> bool {
        self.suitable.len() > self.unsuitable.len()
    }
}

/// `clamp(20·suitable − 10·unsuitable, 0, 100)`
pub fn composite_score(suitable: usize, unsuitable: usize) -> u8 {
    let raw = suitable as i64 * 20 - unsuitable as i64 * 10;
    raw.clamp(0, 100) as u8
}

/// Days since 2000-01-01; negative before it.
pub fn day_index(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce() - DAY_INDEX_BASE_DAYS_FROM_CE)
}

/// Built-in almanac calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyAlmanacCalculator {
    clock: SexagenaryClock,
}

impl DailyAlmanacCalculator {
    pub fn new(strategy: AnchorStrategy) -> Self {
        Self {
            clock: SexagenaryClock::new(strategy),
        }
    }

    /// Almanac for an ISO date string.
    pub fn compute(&self, date: &str, birth: Option<&BirthProfile>) -> Result<DailyAlmanac> {
        let date = parse_iso_date("date", date)?;
        self.compute_date(date, birth)
    }

    pub fn compute_date(&self, date: NaiveDate, birth: Option<&BirthProfile>) -> Result<DailyAlmanac> {
        let index = day_index(date);
        let day_pillar = self.clock.day_pillar(date);

        let suitable_count = 3 + index.rem_euclid(4) as usize;
        let unsuitable_count = 2 + index.rem_euclid(3) as usize;

        let mut rng = Mcg128Xsl64::seed_from_u64(index as u64);
        let suitable = sample(&mut rng, &SUITABLE_CANDIDATES, suitable_count);
        let unsuitable = sample(&mut rng, &UNSUITABLE_CANDIDATES, unsuitable_count);

        let hourly = Branch::ALL
            .iter()
            .enumerate()
            .map(|(slot, &branch)| {
                let grade = FortuneGrade::TABLE[(index + slot as i64).rem_euclid(5) as usize];
                HourSlot {
                    branch,
                    label: branch.hour_label().to_string(),
                    grade,
                    fortune: grade.hanzi().to_string(),
                }
            })
            .collect();

        let personal = birth
            .map(|profile| {
                self.day_master_of(profile)
                    .map(|master| PersonalCompatibility::between(master, day_pillar.stem()))
            })
            .transpose()?;

        let almanac = DailyAlmanac {
            date: format_iso_date(date),
            day_pillar,
            strategy: self.clock.strategy(),
            suitable,
            unsuitable,
            hourly,
            wealth_direction: wealth_direction(day_pillar.stem()),
            conflict_zodiac: conflict_zodiac(day_pillar.branch()),
            score: composite_score(suitable_count, unsuitable_count),
            personal,
            lunar: approximate_lunar_label(date),
            solar_term: solar_term_on(date).map(str::to_string),
        };

        tracing::debug!(
            date = %almanac.date,
            pillar = %almanac.day_pillar,
            score = almanac.score,
            "daily almanac computed"
        );

        Ok(almanac)
    }

    /// Day master under this calculator's strategy. A profile built with the
    /// other strategy gets its day pillar recomputed from the birth date.
    fn day_master_of(&self, profile: &BirthProfile) -> Result<Stem> {
        let strategy = self.clock.strategy();
        if profile.pillars.strategy == strategy {
            return Ok(profile.day_master());
        }
        let master = self.clock.day_pillar(profile.birth_date.civil_date()?).stem();
        tracing::debug!(
            profile_strategy = ?profile.pillars.strategy,
            ?strategy,
            day_master = %master,
            "day master recomputed"
        );
        Ok(master)
    }
}

fn sample(rng: &mut Mcg128Xsl64, pool: &[&str], amount: usize) -> Vec<String> {
    rand::seq::index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].to_string())
        .collect()
}
