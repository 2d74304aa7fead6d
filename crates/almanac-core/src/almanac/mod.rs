//! Daily almanac: day pillar, activity lists, hourly grades, wealth direction,
//! conflict animal and an optional personal compatibility section. Also
//! reads charts supplied as pillar labels.

mod calculator;
mod chart;
pub mod lunar;
mod provider;
pub mod tables;

pub use calculator::{
    composite_score, day_index, DailyAlmanac, DailyAlmanacCalculator, FortuneGrade, FortuneTier,
    HourSlot, PersonalCompatibility, StemRelation, DAY_INDEX_BASE_DAYS_FROM_CE,
};
pub use chart::ChartReading;
pub use lunar::{approximate_lunar_label, solar_term_on, solar_terms, LunarLabel, SolarTermDate};
pub use provider::AlmanacProvider;
