//! The 60-term stem-branch cycle.

mod clock;
mod position;
mod symbols;

pub use clock::{AnchorStrategy, SexagenaryClock, ANCHOR_DAYS_FROM_CE, ANCHOR_POSITION, BASE_CYCLIC_YEAR};
pub use position::{CyclePosition, StemBranchPair, CYCLE_LEN};
pub use symbols::{classify_symbol, Branch, Element, Lookup, Stem, SymbolElement, Zodiac};
