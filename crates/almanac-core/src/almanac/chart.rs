//! Charts given as text, such as the pillar labels an external almanac
//! returns.
//!
//! Every symbol goes through the lookup tables one by one. A label holding
//! symbols outside the stem/branch tables still gets a full reading, with the
//! table defaults applied and the offending symbols listed.

use serde::Serialize;

use super::tables::{conflict_zodiac_for_symbol, wealth_direction_for_symbol};
use crate::balance::ElementalTally;
use crate::compass::Direction;
use crate::error::{CoreError, Result};
use crate::sexagenary::{Branch, Stem, Zodiac};

/// Four pillars of two symbols each.
const CHART_SYMBOLS: usize = 8;

/// Offset of the day stem; the day branch follows it.
const DAY_STEM: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReading {
    /// Normalized `年 月 日 时` label.
    pub label: String,
    pub tally: ElementalTally,
    /// Symbols that are neither stems nor branches, counted as earth.
    pub unknown_symbols: Vec<char>,
    pub wealth_direction: Direction,
    /// The day stem was not a stem and the default direction was used.
    pub wealth_direction_defaulted: bool,
    /// `None` when the day branch is not a branch.
    pub conflict_zodiac: Option<Zodiac>,
}

impl ChartReading {
    /// Read a chart like `庚午 壬午 乙丑 癸未`. Whitespace is ignored.
    pub fn parse(label: &str) -> Result<Self> {
        let symbols: Vec<char> = label.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CHART_SYMBOLS {
            return Err(CoreError::invalid(
                "chart",
                format!(
                    "expected four two-symbol pillars, got {} symbols in '{label}'",
                    symbols.len()
                ),
            ));
        }

        let tally = ElementalTally::from_symbols(symbols.iter().copied());
        let unknown_symbols: Vec<char> = symbols
            .iter()
            .copied()
            .filter(|&c| Stem::from_hanzi(c).is_none() && Branch::from_hanzi(c).is_none())
            .collect();
        let wealth = wealth_direction_for_symbol(symbols[DAY_STEM]);
        let conflict_zodiac = conflict_zodiac_for_symbol(symbols[DAY_STEM + 1]);

        let label = symbols
            .chunks(2)
            .map(|pillar| pillar.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!(%label, unknown = unknown_symbols.len(), "chart read");

        Ok(Self {
            label,
            tally,
            unknown_symbols,
            wealth_direction_defaulted: wealth.is_default(),
            wealth_direction: wealth.value(),
            conflict_zodiac,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::Element;

    #[test]
    fn reads_a_well_formed_chart() {
        let reading = ChartReading::parse("庚午 壬午 乙丑 癸未").unwrap();
        assert_eq!(reading.label, "庚午 壬午 乙丑 癸未");
        assert!(reading.unknown_symbols.is_empty());
        assert_eq!(reading.tally.total(), 8);
        assert_eq!(reading.tally.count(Element::Fire), 2);
        assert_eq!(reading.wealth_direction, Direction::Southeast);
        assert!(!reading.wealth_direction_defaulted);
        assert_eq!(reading.conflict_zodiac, Some(Zodiac::Goat));
    }

    #[test]
    fn whitespace_is_optional() {
        let spaced = ChartReading::parse("庚午 壬午 乙丑 癸未").unwrap();
        let packed = ChartReading::parse("庚午壬午乙丑癸未").unwrap();
        assert_eq!(spaced, packed);
    }

    #[test]
    fn foreign_symbols_fall_back_to_table_defaults() {
        let reading = ChartReading::parse("庚午 壬午 XY 癸未").unwrap();
        assert_eq!(reading.unknown_symbols, vec!['X', 'Y']);
        assert_eq!(reading.tally.total(), 8);
        assert_eq!(reading.wealth_direction, Direction::Southeast);
        assert!(reading.wealth_direction_defaulted);
        assert_eq!(reading.conflict_zodiac, None);

        let known = ChartReading::parse("庚午 壬午 乙丑 癸未").unwrap();
        assert_eq!(
            reading.tally.count(Element::Earth),
            known.tally.count(Element::Earth) + 1,
            "乙丑 is wood + earth, XY is earth + earth"
        );
    }

    #[test]
    fn wrong_length_is_invalid_input() {
        assert!(ChartReading::parse("庚午 壬午 乙丑").unwrap_err().is_invalid_input());
        assert!(ChartReading::parse("").unwrap_err().is_invalid_input());
    }
}
