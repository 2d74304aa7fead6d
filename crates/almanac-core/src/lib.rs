//! # Almanac Core Library
//!
//! This library provides the calendar and divination logic for the almanac.
//! It follows a CLI-first layout: every operation is a plain synchronous
//! function here, and the `almanac-cli` binary is a thin JSON layer over it.
//!
//! ## Architecture
//!
//! - **Sexagenary cycle**: stems, branches, elements and the 60-term cycle,
//!   with day positions from a calibrated anchor or an approximate formula
//! - **Birth profiles**: four pillars, zodiac, nayin and elemental tally
//! - **Element balance**: strength tiers, favorable elements and lucky
//!   attributes
//! - **Almanac**: deterministic daily almanac and auspicious-day search
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`SexagenaryClock`]: Stem-branch positions for years, months, days, hours
//! - [`BirthProfileCalculator`]: Birth record to four pillars
//! - [`ElementBalanceAnalyzer`]: Tally to balance profile and recommendations
//! - [`DailyAlmanacCalculator`]: Per-date almanac
//! - [`AuspiciousRangeFinder`]: Best days in a date range
//! - [`AlmanacProvider`]: Trait for almanac sources
//! - [`Config`]: Application configuration management

pub mod almanac;
pub mod balance;
pub mod birth;
pub mod compass;
pub mod date;
pub mod error;
pub mod range;
pub mod sexagenary;
pub mod storage;

pub use almanac::{AlmanacProvider, ChartReading, DailyAlmanac, DailyAlmanacCalculator, PersonalCompatibility};
pub use balance::{ElementAnalysis, ElementBalanceAnalyzer, ElementalTally, RecommendationBundle};
pub use birth::{BirthDate, BirthProfile, BirthProfileCalculator, BirthRecord, FourPillars, Gender};
pub use compass::{fengshui_advice, lucky_directions, CompassAdvice, Direction, FengshuiAdvice, FengshuiQuery};
pub use error::{ConfigError, CoreError, Result};
pub use range::{ActivityType, AuspiciousDay, AuspiciousRangeFinder};
pub use sexagenary::{AnchorStrategy, Branch, Element, SexagenaryClock, Stem, StemBranchPair, Zodiac};
pub use storage::Config;
