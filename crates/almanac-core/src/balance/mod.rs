//! Five-element balance analysis.
//!
//! This module scores how evenly a tally is spread across the five elements,
//! flags deficient and excessive elements, and maps the resulting favorable
//! set onto lucky colors, directions, numbers and items.

mod analyzer;
mod recommendation;
mod tally;

pub use analyzer::{
    balance_score, BalanceProfile, ElementAnalysis, ElementBalanceAnalyzer, ElementStrength,
    StrengthTier, IDEAL_PERCENTAGE,
};
pub use recommendation::{attributes, ElementAttributes, RecommendationBundle};
pub use tally::ElementalTally;
