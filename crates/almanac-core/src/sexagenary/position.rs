//! Positions in the 60-term cycle and the stem/branch pairs they name.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::symbols::{Branch, Stem};

/// Length of the stem-branch cycle.
pub const CYCLE_LEN: i64 = 60;

/// A position `p` in `[0, 60)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CyclePosition(u8);

impl CyclePosition {
    /// Normalize any integer into the cycle.
    pub fn new(raw: i64) -> Self {
        Self(raw.rem_euclid(CYCLE_LEN) as u8)
    }

    /// `(anchor + days) mod 60`, never negative.
    pub fn offset(anchor: CyclePosition, days: i64) -> Self {
        Self::new(i64::from(anchor.0) + days)
    }

    /// The position whose stem and branch are the given pair, if the pair is
    /// reachable. Stem and branch must share parity.
    pub fn from_stem_branch(stem: Stem, branch: Branch) -> Option<Self> {
        let (s, b) = (stem.index() as i64, branch.index() as i64);
        if s % 2 != b % 2 {
            return None;
        }
        Some(Self::new(6 * s - 5 * b))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn stem(self) -> Stem {
        Stem::from_index(usize::from(self.0))
    }

    pub fn branch(self) -> Branch {
        Branch::from_index(usize::from(self.0))
    }

    pub fn stem_branch(self) -> StemBranchPair {
        StemBranchPair { position: self }
    }
}

impl TryFrom<u8> for CyclePosition {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if i64::from(value) < CYCLE_LEN {
            Ok(Self(value))
        } else {
            Err(format!("cycle position {value} is outside [0, 60)"))
        }
    }
}

impl From<CyclePosition> for u8 {
    fn from(position: CyclePosition) -> Self {
        position.0
    }
}

/// One pillar. Only constructible from a [`CyclePosition`], so the stem and
/// branch always come from the same `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "PillarRepr", try_from = "PillarRepr")]
pub struct StemBranchPair {
    position: CyclePosition,
}

impl StemBranchPair {
    pub fn position(&self) -> CyclePosition {
        self.position
    }

    pub fn stem(&self) -> Stem {
        self.position.stem()
    }

    pub fn branch(&self) -> Branch {
        self.position.branch()
    }

    /// Hanzi label such as `乙卯`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl From<CyclePosition> for StemBranchPair {
    fn from(position: CyclePosition) -> Self {
        position.stem_branch()
    }
}

impl fmt::Display for StemBranchPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem(), self.branch())
    }
}

/// Wire form of a pillar: the position plus the derived fields for readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PillarRepr {
    position: u8,
    stem: Stem,
    branch: Branch,
    label: String,
}

impl From<StemBranchPair> for PillarRepr {
    fn from(pair: StemBranchPair) -> Self {
        Self {
            position: pair.position.value(),
            stem: pair.stem(),
            branch: pair.branch(),
            label: pair.label(),
        }
    }
}

impl TryFrom<PillarRepr> for StemBranchPair {
    type Error = String;

    fn try_from(repr: PillarRepr) -> Result<Self, Self::Error> {
        let position = CyclePosition::try_from(repr.position)?;
        if position.stem() != repr.stem || position.branch() != repr.branch {
            return Err(format!(
                "pillar {}{} does not match cycle position {}",
                repr.stem,
                repr.branch,
                repr.position
            ));
        }
        Ok(position.stem_branch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_normalizes_negative_days() {
        let anchor = CyclePosition::new(51);
        assert_eq!(CyclePosition::offset(anchor, -52).value(), 59);
        assert_eq!(CyclePosition::offset(anchor, 9).value(), 0);
        assert_eq!(CyclePosition::offset(anchor, -6000).value(), 51);
    }

    #[test]
    fn from_stem_branch_inverts_every_position() {
        for p in 0..60 {
            let pos = CyclePosition::new(p);
            assert_eq!(CyclePosition::from_stem_branch(pos.stem(), pos.branch()), Some(pos));
        }
    }

    #[test]
    fn from_stem_branch_rejects_mixed_parity() {
        assert_eq!(CyclePosition::from_stem_branch(Stem::Jia, Branch::Chou), None);
        assert_eq!(CyclePosition::from_stem_branch(Stem::Yi, Branch::Zi), None);
    }

    #[test]
    fn pair_label_and_indices() {
        let pair = CyclePosition::new(51).stem_branch();
        assert_eq!(pair.stem(), Stem::Yi);
        assert_eq!(pair.branch(), Branch::Mao);
        assert_eq!(pair.label(), "乙卯");
    }

    #[test]
    fn pair_json_carries_label_and_rejects_inconsistent_input() {
        let pair = CyclePosition::new(6).stem_branch();
        let json = serde_json::to_value(pair).unwrap();
        assert_eq!(json["position"], 6);
        assert_eq!(json["stem"], "geng");
        assert_eq!(json["branch"], "wu");
        assert_eq!(json["label"], "庚午");

        let parsed: StemBranchPair = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, pair);

        let bad = serde_json::json!({"position": 6, "stem": "jia", "branch": "wu", "label": ""});
        assert!(serde_json::from_value::<StemBranchPair>(bad).is_err());
    }
}
