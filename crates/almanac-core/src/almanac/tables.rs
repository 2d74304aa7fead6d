//! Fixed almanac tables.

use crate::compass::Direction;
use crate::sexagenary::{Branch, Lookup, Stem, Zodiac};

/// Candidate activities a day may be suitable for.
pub const SUITABLE_CANDIDATES: [&str; 24] = [
    "祭祀", "祈福", "求嗣", "开光", "塑绘", "斋醮", "沐浴", "会亲友", "立卷", "交易", "纳财", "开市",
    "启钻", "安床", "结网", "畋猎", "取渔", "捕捉", "牧养", "安葬", "破土", "纳采", "入殓", "移柩",
];

/// Candidate activities a day may be unsuitable for.
pub const UNSUITABLE_CANDIDATES: [&str; 16] = [
    "嫁娶", "出行", "搬家", "入宅", "动土", "破土", "安门", "上梁", "开仓", "出货财", "开渠", "掘井",
    "栽种", "牧养", "开厕", "造船",
];

/// Wealth-god direction keyed by day stem.
const WEALTH_DIRECTIONS: [Direction; 10] = [
    Direction::Northeast, // 甲
    Direction::Southeast, // 乙
    Direction::Southwest, // 丙
    Direction::Northwest, // 丁
    Direction::Northeast, // 戊
    Direction::North,     // 己
    Direction::Northeast, // 庚
    Direction::Southeast, // 辛
    Direction::South,     // 壬
    Direction::Southeast, // 癸
];

/// Direction used when a provider hands back a symbol that is not a stem.
pub const DEFAULT_WEALTH_DIRECTION: Direction = Direction::Southeast;

/// Animal in conflict with the day, keyed by day branch.
const CONFLICT_ZODIAC: [Zodiac; 12] = [
    Zodiac::Horse,   // 子
    Zodiac::Goat,    // 丑
    Zodiac::Monkey,  // 寅
    Zodiac::Rooster, // 卯
    Zodiac::Dog,     // 辰
    Zodiac::Pig,     // 巳
    Zodiac::Rat,     // 午
    Zodiac::Ox,      // 未
    Zodiac::Tiger,   // 申
    Zodiac::Rabbit,  // 酉
    Zodiac::Dragon,  // 戌
    Zodiac::Snake,   // 亥
];

pub fn wealth_direction(stem: Stem) -> Direction {
    WEALTH_DIRECTIONS[stem.index()]
}

/// Wealth direction for a stem given as hanzi.
pub fn wealth_direction_for_symbol(symbol: char) -> Lookup<Direction> {
    match Stem::from_hanzi(symbol) {
        Some(stem) => Lookup::Found(wealth_direction(stem)),
        None => Lookup::Default(DEFAULT_WEALTH_DIRECTION),
    }
}

pub fn conflict_zodiac(branch: Branch) -> Zodiac {
    CONFLICT_ZODIAC[branch.index()]
}

/// Conflict animal for a branch given as hanzi; `None` when it is not a branch.
pub fn conflict_zodiac_for_symbol(symbol: char) -> Option<Zodiac> {
    Branch::from_hanzi(symbol).map(conflict_zodiac)
}
