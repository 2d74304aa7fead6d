//! Heavenly stems, earthly branches, the five elements and zodiac animals.
//!
//! Every symbol set is a closed enum with a fixed index order. Lookups keyed by
//! foreign text (hanzi coming from an external provider, CLI input) go through
//! [`classify_symbol`] or return a [`Lookup`], so the default branch is an
//! observable value rather than a silent fallthrough.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    const HANZI: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

    /// Stem at `index mod 10`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 10]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn hanzi(self) -> char {
        Self::HANZI[self.index()]
    }

    pub fn from_hanzi(symbol: char) -> Option<Self> {
        Self::HANZI
            .iter()
            .position(|&c| c == symbol)
            .map(Self::from_index)
    }

    /// Stems pair up two per element: 甲乙 wood, 丙丁 fire, ...
    pub fn element(self) -> Element {
        Element::ALL[self.index() / 2]
    }

    /// The five combining pairs (甲己, 乙庚, 丙辛, 丁壬, 戊癸) are five apart.
    pub fn combines_with(self, other: Stem) -> bool {
        self.index().abs_diff(other.index()) == 5
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// One of the twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    const HANZI: [char; 12] = [
        '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
    ];

    const ELEMENTS: [Element; 12] = [
        Element::Water,
        Element::Earth,
        Element::Wood,
        Element::Wood,
        Element::Earth,
        Element::Fire,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Metal,
        Element::Earth,
        Element::Water,
    ];

    const HOUR_LABELS: [&'static str; 12] = [
        "子时(23-01)",
        "丑时(01-03)",
        "寅时(03-05)",
        "卯时(05-07)",
        "辰时(07-09)",
        "巳时(09-11)",
        "午时(11-13)",
        "未时(13-15)",
        "申时(15-17)",
        "酉时(17-19)",
        "戌时(19-21)",
        "亥时(21-23)",
    ];

    /// Branch at `index mod 12`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn hanzi(self) -> char {
        Self::HANZI[self.index()]
    }

    pub fn from_hanzi(symbol: char) -> Option<Self> {
        Self::HANZI
            .iter()
            .position(|&c| c == symbol)
            .map(Self::from_index)
    }

    pub fn element(self) -> Element {
        Self::ELEMENTS[self.index()]
    }

    pub fn zodiac(self) -> Zodiac {
        Zodiac::ALL[self.index()]
    }

    /// Traditional two-hour block label, e.g. `午时(11-13)`.
    pub fn hour_label(self) -> &'static str {
        Self::HOUR_LABELS[self.index()]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// The five elements, in generating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn hanzi(self) -> char {
        ['木', '火', '土', '金', '水'][self.index()]
    }

    /// wood → fire → earth → metal → water → wood
    pub fn generates(self) -> Element {
        Self::ALL[(self.index() + 1) % 5]
    }

    /// wood → earth → water → fire → metal → wood
    pub fn overcomes(self) -> Element {
        Self::ALL[(self.index() + 2) % 5]
    }

    /// The element that keeps this one in check.
    pub fn overcome_by(self) -> Element {
        Self::ALL[(self.index() + 3) % 5]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

impl std::str::FromStr for Element {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "wood" | "木" => Ok(Element::Wood),
            "fire" | "火" => Ok(Element::Fire),
            "earth" | "土" => Ok(Element::Earth),
            "metal" | "金" => Ok(Element::Metal),
            "water" | "水" => Ok(Element::Water),
            other => Err(crate::error::CoreError::invalid(
                "element",
                format!("unknown element '{other}'"),
            )),
        }
    }
}

/// Zodiac animals, indexed like the branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Rat,
        Zodiac::Ox,
        Zodiac::Tiger,
        Zodiac::Rabbit,
        Zodiac::Dragon,
        Zodiac::Snake,
        Zodiac::Horse,
        Zodiac::Goat,
        Zodiac::Monkey,
        Zodiac::Rooster,
        Zodiac::Dog,
        Zodiac::Pig,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn hanzi(self) -> char {
        ['鼠', '牛', '虎', '兔', '龙', '蛇', '马', '羊', '猴', '鸡', '狗', '猪'][self as usize]
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// Result of classifying a symbol through the stem/branch → element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolElement {
    /// The symbol is a stem or branch.
    Table(Element),
    /// Not a known symbol; counted as earth.
    Fallback,
}

impl SymbolElement {
    pub fn element(self) -> Element {
        match self {
            SymbolElement::Table(element) => element,
            SymbolElement::Fallback => Element::Earth,
        }
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, SymbolElement::Fallback)
    }
}

/// Classify a stem or branch hanzi.
pub fn classify_symbol(symbol: char) -> SymbolElement {
    if let Some(stem) = Stem::from_hanzi(symbol) {
        SymbolElement::Table(stem.element())
    } else if let Some(branch) = Branch::from_hanzi(symbol) {
        SymbolElement::Table(branch.element())
    } else {
        tracing::warn!(%symbol, "unknown sexagenary symbol, classifying as earth");
        SymbolElement::Fallback
    }
}

/// A table lookup that either hit an entry or fell back to the table default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Default(T),
}

impl<T> Lookup<T> {
    pub fn value(self) -> T {
        match self {
            Lookup::Found(value) | Lookup::Default(value) => value,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Lookup::Default(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_elements_pair_up() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Yi.element(), Element::Wood);
        assert_eq!(Stem::Wu.element(), Element::Earth);
        assert_eq!(Stem::Xin.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn branch_elements_match_table() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::Si.element(), Element::Fire);
        assert_eq!(Branch::You.element(), Element::Metal);
        assert_eq!(Branch::Hai.element(), Element::Water);
    }

    #[test]
    fn hanzi_round_trips_for_every_symbol() {
        for stem in Stem::ALL {
            assert_eq!(Stem::from_hanzi(stem.hanzi()), Some(stem));
        }
        for branch in Branch::ALL {
            assert_eq!(Branch::from_hanzi(branch.hanzi()), Some(branch));
        }
    }

    #[test]
    fn element_cycles() {
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Earth.overcomes(), Element::Water);
        assert_eq!(Element::Water.overcomes(), Element::Fire);
        assert_eq!(Element::Fire.overcomes(), Element::Metal);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
        for element in Element::ALL {
            assert_eq!(element.overcome_by().overcomes(), element);
        }
    }

    #[test]
    fn combining_pairs() {
        assert!(Stem::Jia.combines_with(Stem::Ji));
        assert!(Stem::Gui.combines_with(Stem::Wu));
        assert!(!Stem::Jia.combines_with(Stem::Yi));
        assert!(!Stem::Jia.combines_with(Stem::Jia));
    }

    #[test]
    fn classify_unknown_symbol_falls_back_to_earth() {
        let result = classify_symbol('X');
        assert!(result.is_fallback());
        assert_eq!(result.element(), Element::Earth);
        assert_eq!(classify_symbol('丙'), SymbolElement::Table(Element::Fire));
        assert_eq!(classify_symbol('亥'), SymbolElement::Table(Element::Water));
    }

    #[test]
    fn element_parses_from_english_and_hanzi() {
        assert_eq!("metal".parse::<Element>().unwrap(), Element::Metal);
        assert_eq!("水".parse::<Element>().unwrap(), Element::Water);
        assert!("aether".parse::<Element>().is_err());
    }
}
