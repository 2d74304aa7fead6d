//! Element strength scoring and favorable-element derivation.
//!
//! ## Strength tiers
//!
//! | Share of tally | Tier |
//! |----------------|------|
//! | > 25% | thriving |
//! | > 15% | moderate |
//! | > 5%  | weak |
//! | else  | absent |
//!
//! ## Favorable elements
//!
//! 1. Every absent element is favorable.
//! 2. Every thriving element is unfavorable, and the element that overcomes it
//!    becomes favorable.
//! 3. If nothing is favorable yet: the first two weak elements, or wood and
//!    fire when there are no weak elements either.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::recommendation::RecommendationBundle;
use super::tally::ElementalTally;
use crate::error::{CoreError, Result};
use crate::sexagenary::Element;

/// Share each element would have in a perfectly even tally.
pub const IDEAL_PERCENTAGE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Thriving,
    Moderate,
    Weak,
    Absent,
}

impl StrengthTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 25.0 {
            StrengthTier::Thriving
        } else if percentage > 15.0 {
            StrengthTier::Moderate
        } else if percentage > 5.0 {
            StrengthTier::Weak
        } else {
            StrengthTier::Absent
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStrength {
    pub element: Element,
    pub count: u32,
    /// Rounded to one decimal.
    pub percentage: f64,
    pub tier: StrengthTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceProfile {
    /// One entry per element, in element order.
    pub strengths: Vec<ElementStrength>,
    pub missing_elements: Vec<Element>,
    pub excessive_elements: Vec<Element>,
    pub favorable_elements: Vec<Element>,
    pub unfavorable_elements: Vec<Element>,
    /// `100 − Σ|pct − 20|`, clamped to `[0, 100]`.
    pub balance_score: f64,
}

impl BalanceProfile {
    pub fn strength(&self, element: Element) -> &ElementStrength {
        &self.strengths[element.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementAnalysis {
    pub profile: BalanceProfile,
    pub recommendations: RecommendationBundle,
}

/// Stateless analyzer over an [`ElementalTally`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementBalanceAnalyzer;

impl ElementBalanceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a raw element → count map. All five elements must be keys.
    pub fn analyze_counts(&self, counts: &BTreeMap<Element, u32>) -> Result<ElementAnalysis> {
        let tally = ElementalTally::try_from(counts.clone())?;
        self.analyze(&tally)
    }

    pub fn analyze(&self, tally: &ElementalTally) -> Result<ElementAnalysis> {
        let total = tally.total();
        if total == 0 {
            return Err(CoreError::invalid("tally", "tally has no symbols"));
        }

        let strengths: Vec<ElementStrength> = tally
            .iter()
            .map(|(element, count)| {
                let raw = f64::from(count) / f64::from(total) * 100.0;
                ElementStrength {
                    element,
                    count,
                    percentage: round1(raw),
                    tier: StrengthTier::from_percentage(raw),
                }
            })
            .collect();

        let with_tier = |tier: StrengthTier| -> Vec<Element> {
            strengths
                .iter()
                .filter(|s| s.tier == tier)
                .map(|s| s.element)
                .collect()
        };
        let missing = with_tier(StrengthTier::Absent);
        let excessive = with_tier(StrengthTier::Thriving);
        let weak = with_tier(StrengthTier::Weak);

        let (favorable, unfavorable) = favorable_split(&missing, &excessive, &weak);
        let balance_score = balance_score(strengths.iter().map(|s| s.percentage));
        let recommendations = RecommendationBundle::for_elements(&favorable, &unfavorable);

        tracing::debug!(
            ?favorable,
            ?unfavorable,
            balance_score,
            "element balance analyzed"
        );

        Ok(ElementAnalysis {
            profile: BalanceProfile {
                strengths,
                missing_elements: missing,
                excessive_elements: excessive,
                favorable_elements: favorable,
                unfavorable_elements: unfavorable,
                balance_score,
            },
            recommendations,
        })
    }
}

fn favorable_split(
    missing: &[Element],
    excessive: &[Element],
    weak: &[Element],
) -> (Vec<Element>, Vec<Element>) {
    let mut favorable: Vec<Element> = missing.to_vec();
    let unfavorable: Vec<Element> = excessive.to_vec();

    for element in excessive {
        let counter = element.overcome_by();
        if !favorable.contains(&counter) {
            favorable.push(counter);
        }
    }

    if favorable.is_empty() {
        favorable = if weak.is_empty() {
            vec![Element::Wood, Element::Fire]
        } else {
            weak.iter().take(2).copied().collect()
        };
    }

    (favorable, unfavorable)
}

/// Deviation of the given percentages from an even split.
pub fn balance_score(percentages: impl IntoIterator<Item = f64>) -> f64 {
    let deviation: f64 = percentages
        .into_iter()
        .map(|p| (p - IDEAL_PERCENTAGE).abs())
        .sum();
    round1((100.0 - deviation).clamp(0.0, 100.0))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
