use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::sexagenary::{classify_symbol, Element, StemBranchPair};

/// Count of symbols per element.
///
/// Serialized as a map keyed by element name. Deserializing (or converting
/// from a map) requires all five elements to be present, zero or not.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Element, u32>", try_from = "BTreeMap<Element, u32>")]
pub struct ElementalTally {
    counts: [u32; 5],
}

impl ElementalTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts in element order: wood, fire, earth, metal, water.
    pub fn from_counts(counts: [u32; 5]) -> Self {
        Self { counts }
    }

    /// Classify every stem and branch of the given pillars.
    pub fn from_pillars<'a>(pillars: impl IntoIterator<Item = &'a StemBranchPair>) -> Self {
        let mut tally = Self::new();
        for pillar in pillars {
            tally.add(pillar.stem().element());
            tally.add(pillar.branch().element());
        }
        tally
    }

    /// Classify raw hanzi symbols; unknown symbols count as earth.
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut tally = Self::new();
        for symbol in symbols {
            tally.add(classify_symbol(symbol).element());
        }
        tally
    }

    pub fn add(&mut self, element: Element) {
        self.counts[element.index()] += 1;
    }

    pub fn count(&self, element: Element) -> u32 {
        self.counts[element.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::ALL.into_iter().map(|e| (e, self.count(e)))
    }
}

impl From<ElementalTally> for BTreeMap<Element, u32> {
    fn from(tally: ElementalTally) -> Self {
        tally.iter().collect()
    }
}

impl TryFrom<BTreeMap<Element, u32>> for ElementalTally {
    type Error = CoreError;

    fn try_from(map: BTreeMap<Element, u32>) -> Result<Self> {
        let mut counts = [0u32; 5];
        for element in Element::ALL {
            counts[element.index()] = *map.get(&element).ok_or_else(|| {
                CoreError::invalid("tally", format!("element '{element:?}' is missing"))
            })?;
        }
        Ok(Self { counts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::CyclePosition;

    #[test]
    fn pillar_tally_counts_two_symbols_each() {
        let pillars = [CyclePosition::new(0).stem_branch(), CyclePosition::new(51).stem_branch()];
        let tally = ElementalTally::from_pillars(&pillars);
        assert_eq!(tally.total(), 4);
        // 甲子 + 乙卯: wood, water, wood, wood
        assert_eq!(tally.count(Element::Wood), 3);
        assert_eq!(tally.count(Element::Water), 1);
    }

    #[test]
    fn symbol_tally_defaults_unknown_to_earth() {
        let tally = ElementalTally::from_symbols("甲?".chars());
        assert_eq!(tally.count(Element::Wood), 1);
        assert_eq!(tally.count(Element::Earth), 1);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn map_conversion_requires_every_element() {
        let mut map: BTreeMap<Element, u32> = Element::ALL.into_iter().map(|e| (e, 1)).collect();
        assert!(ElementalTally::try_from(map.clone()).is_ok());
        map.remove(&Element::Metal);
        let err = ElementalTally::try_from(map).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn json_form_is_a_named_map() {
        let tally = ElementalTally::from_counts([1, 3, 2, 2, 0]);
        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(json["fire"], 3);
        assert_eq!(json["water"], 0);

        let parsed: ElementalTally = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, tally);

        let partial = serde_json::json!({"wood": 1, "fire": 1});
        assert!(serde_json::from_value::<ElementalTally>(partial).is_err());
    }
}
