//! Compass directions and their element/color/number associations.
//!
//! Used by the recommendation bundle (directions per favorable element), by
//! the daily almanac (wealth direction) and by [`lucky_directions`], which
//! turns a set of favorable elements into concrete compass advice.
//! [`fengshui_advice`] builds topic-specific advice (home, career,
//! relationship) on top of that from a birth profile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::birth::{BirthProfile, Gender};
use crate::error::{CoreError, Result};
use crate::sexagenary::{Element, Lookup, Zodiac};

/// Eight compass points plus the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    Center,
}

impl Direction {
    /// The eight points of the compass, clockwise from north.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
    ];

    pub fn hanzi(self) -> &'static str {
        match self {
            Direction::North => "北",
            Direction::Northeast => "东北",
            Direction::East => "东",
            Direction::Southeast => "东南",
            Direction::South => "南",
            Direction::Southwest => "西南",
            Direction::West => "西",
            Direction::Northwest => "西北",
            Direction::Center => "中",
        }
    }

    /// Parse a hanzi label, with or without the trailing `方`.
    pub fn from_hanzi(label: &str) -> Option<Self> {
        let trimmed = label.trim().trim_end_matches('方');
        let trimmed = if trimmed == "中央" { "中" } else { trimmed };
        Self::COMPASS
            .into_iter()
            .chain(std::iter::once(Direction::Center))
            .find(|d| d.hanzi() == trimmed)
    }

    /// Compass advice for this point. The center has no entry and gets the
    /// balanced default.
    pub fn advice(self) -> Lookup<&'static DirectionAdvice> {
        match COMPASS_TABLE.iter().find(|a| a.direction == self) {
            Some(advice) => Lookup::Found(advice),
            None => Lookup::Default(&BALANCED_ADVICE),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// What a compass point stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionAdvice {
    pub direction: Direction,
    /// `None` only for the balanced default.
    pub element: Option<Element>,
    pub color: &'static str,
    pub number: Option<u8>,
    pub benefit: &'static str,
    pub suggestions: &'static [&'static str],
}

static COMPASS_TABLE: [DirectionAdvice; 8] = [
    DirectionAdvice {
        direction: Direction::North,
        element: Some(Element::Water),
        color: "黑色",
        number: Some(1),
        benefit: "事业运、智慧运",
        suggestions: &["摆放水景装饰", "使用蓝黑色调", "放置镜子或玻璃制品"],
    },
    DirectionAdvice {
        direction: Direction::Northeast,
        element: Some(Element::Earth),
        color: "黄色",
        number: Some(8),
        benefit: "学业运、智慧运",
        suggestions: &["摆放书籍文具", "使用土色调", "保持安静整齐"],
    },
    DirectionAdvice {
        direction: Direction::East,
        element: Some(Element::Wood),
        color: "绿色",
        number: Some(3),
        benefit: "健康运、家庭运",
        suggestions: &["摆放绿色植物", "使用木制家具", "保持空气流通"],
    },
    DirectionAdvice {
        direction: Direction::Southeast,
        element: Some(Element::Wood),
        color: "绿色",
        number: Some(4),
        benefit: "财运、学业运",
        suggestions: &["摆放富贵竹", "使用绿色装饰", "保持明亮通风"],
    },
    DirectionAdvice {
        direction: Direction::South,
        element: Some(Element::Fire),
        color: "红色",
        number: Some(9),
        benefit: "名声运、桃花运",
        suggestions: &["使用红色装饰", "增加照明亮度", "摆放红色花卉"],
    },
    DirectionAdvice {
        direction: Direction::Southwest,
        element: Some(Element::Earth),
        color: "黄色",
        number: Some(2),
        benefit: "人际运、婚恋运",
        suggestions: &["摆放成双摆件", "使用暖色调", "保持温馨整洁"],
    },
    DirectionAdvice {
        direction: Direction::West,
        element: Some(Element::Metal),
        color: "白色",
        number: Some(7),
        benefit: "贵人运、财运",
        suggestions: &["摆放金属制品", "使用白色主调", "保持整洁明亮"],
    },
    DirectionAdvice {
        direction: Direction::Northwest,
        element: Some(Element::Metal),
        color: "白色",
        number: Some(6),
        benefit: "事业运、权威运",
        suggestions: &["摆放金属饰品", "使用白银色调", "保持威严整洁"],
    },
];

static BALANCED_ADVICE: DirectionAdvice = DirectionAdvice {
    direction: Direction::Center,
    element: None,
    color: "中性色",
    number: None,
    benefit: "整体运势",
    suggestions: &["保持空间整洁", "通风透光", "摆放绿色植物"],
};

/// Compass points whose element is favorable, in compass order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompassAdvice {
    pub primary_direction: Direction,
    pub lucky_directions: Vec<&'static DirectionAdvice>,
}

/// Points whose element is in `favorable`. The primary direction is the first
/// match, or southeast when nothing matches.
pub fn lucky_directions(favorable: &[Element]) -> CompassAdvice {
    let lucky: Vec<&'static DirectionAdvice> = COMPASS_TABLE
        .iter()
        .filter(|a| a.element.is_some_and(|e| favorable.contains(&e)))
        .collect();
    let primary_direction = lucky
        .first()
        .map(|a| a.direction)
        .unwrap_or(Direction::Southeast);
    CompassAdvice {
        primary_direction,
        lucky_directions: lucky,
    }
}

/// Topic of a fengshui query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FengshuiQuery {
    #[default]
    General,
    Home,
    Career,
    Relationship,
}

impl FengshuiQuery {
    pub const ALL: [FengshuiQuery; 4] = [
        FengshuiQuery::General,
        FengshuiQuery::Home,
        FengshuiQuery::Career,
        FengshuiQuery::Relationship,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FengshuiQuery::General => "general",
            FengshuiQuery::Home => "home",
            FengshuiQuery::Career => "career",
            FengshuiQuery::Relationship => "relationship",
        }
    }
}

impl FromStr for FengshuiQuery {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|q| q.as_str() == wanted)
            .ok_or_else(|| {
                CoreError::invalid(
                    "query",
                    format!("unknown fengshui query '{s}' (expected general, home, career or relationship)"),
                )
            })
    }
}

impl fmt::Display for FengshuiQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Home decoration that suits a zodiac sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZodiacHomeTips {
    pub zodiac: Zodiac,
    pub colors: &'static [&'static str],
    pub avoid: &'static str,
    pub items: &'static [&'static str],
}

/// Indexed like [`Zodiac::ALL`].
static ZODIAC_HOME_TIPS: [ZodiacHomeTips; 12] = [
    ZodiacHomeTips { zodiac: Zodiac::Rat, colors: &["蓝色", "黑色"], avoid: "红色过多", items: &["水景装饰"] },
    ZodiacHomeTips { zodiac: Zodiac::Ox, colors: &["黄色", "棕色"], avoid: "绿色过多", items: &["土制品"] },
    ZodiacHomeTips { zodiac: Zodiac::Tiger, colors: &["绿色", "蓝色"], avoid: "白色过多", items: &["木制家具"] },
    ZodiacHomeTips { zodiac: Zodiac::Rabbit, colors: &["绿色", "红色"], avoid: "白色", items: &["植物装饰"] },
    ZodiacHomeTips { zodiac: Zodiac::Dragon, colors: &["黄色", "金色"], avoid: "绿色过多", items: &["金属装饰"] },
    ZodiacHomeTips { zodiac: Zodiac::Snake, colors: &["红色", "黄色"], avoid: "黑色过多", items: &["明亮灯具"] },
    ZodiacHomeTips { zodiac: Zodiac::Horse, colors: &["红色", "绿色"], avoid: "蓝色过多", items: &["向阳装饰"] },
    ZodiacHomeTips { zodiac: Zodiac::Goat, colors: &["黄色", "红色"], avoid: "黑色", items: &["温暖装饰"] },
    ZodiacHomeTips { zodiac: Zodiac::Monkey, colors: &["白色", "黄色"], avoid: "红色过多", items: &["金属工艺品"] },
    ZodiacHomeTips { zodiac: Zodiac::Rooster, colors: &["白色", "金色"], avoid: "绿色过多", items: &["亮色装饰"] },
    ZodiacHomeTips { zodiac: Zodiac::Dog, colors: &["黄色", "红色"], avoid: "绿色", items: &["土色装饰"] },
    ZodiacHomeTips { zodiac: Zodiac::Pig, colors: &["黑色", "蓝色"], avoid: "黄色过多", items: &["水元素装饰"] },
];

pub fn zodiac_home_tips(zodiac: Zodiac) -> &'static ZodiacHomeTips {
    &ZODIAC_HOME_TIPS[zodiac as usize]
}

/// Romance direction: southwest for men, northwest for women.
pub fn peach_blossom_direction(gender: Gender) -> Direction {
    match gender {
        Gender::Male => Direction::Southwest,
        Gender::Female => Direction::Northwest,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomAdvice {
    pub room: &'static str,
    pub orientation: &'static str,
    pub colors: &'static [&'static str],
    pub items: &'static [&'static str],
}

static ROOM_LAYOUT: [RoomAdvice; 3] = [
    RoomAdvice {
        room: "bedroom",
        orientation: "根据个人喜用神选择朝向",
        colors: &["温暖色调", "避免过于鲜艳的颜色"],
        items: &["床头靠墙", "避免梁压床", "保持通风"],
    },
    RoomAdvice {
        room: "living_room",
        orientation: "朝向开阔处",
        colors: &["明亮温馨色调"],
        items: &["沙发背靠实墙", "茶几选圆形", "适当绿植"],
    },
    RoomAdvice {
        room: "kitchen",
        orientation: "避开卧室正对",
        colors: &["清洁明亮"],
        items: &["保持整洁", "刀具收纳好", "通风良好"],
    },
];

const GENERAL_TIPS: &[&str] = &[
    "保持室内整洁，气场流通顺畅",
    "在有利方位摆放相应颜色的装饰品",
    "避免在休息区域摆放过多电器",
    "定期清理杂物，避免阻塞气场流动",
];

/// Advice for one [`FengshuiQuery`], tagged with the query in JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum FengshuiAdvice {
    General {
        compass: CompassAdvice,
        tips: &'static [&'static str],
    },
    Home {
        zodiac_tips: &'static ZodiacHomeTips,
        room_layout: &'static [RoomAdvice],
        plants: &'static [&'static str],
        avoid_items: &'static [&'static str],
    },
    Career {
        office_orientation: &'static str,
        /// Primary lucky direction.
        meeting_direction: Direction,
        desk_placement: &'static [&'static str],
        colors: &'static [&'static str],
        beneficial_items: &'static [&'static str],
        promotion_tips: &'static [&'static str],
    },
    Relationship {
        peach_blossom_direction: Direction,
        bedroom: &'static [&'static str],
        personal_enhancement: &'static [&'static str],
        date_suggestions: &'static [&'static str],
        lucky_flowers: &'static [&'static str],
        enhance_charm: &'static [&'static str],
    },
}

/// Advice on `query` for a person, given the favorable elements of their
/// balance analysis.
pub fn fengshui_advice(
    query: FengshuiQuery,
    profile: &BirthProfile,
    favorable: &[Element],
) -> FengshuiAdvice {
    match query {
        FengshuiQuery::General => FengshuiAdvice::General {
            compass: lucky_directions(favorable),
            tips: GENERAL_TIPS,
        },
        FengshuiQuery::Home => FengshuiAdvice::Home {
            zodiac_tips: zodiac_home_tips(profile.zodiac()),
            room_layout: &ROOM_LAYOUT,
            plants: &["绿萝", "富贵竹", "发财树"],
            avoid_items: &["尖锐装饰", "破损物品", "枯萎植物"],
        },
        FengshuiQuery::Career => FengshuiAdvice::Career {
            office_orientation: "面向东或南方办公",
            meeting_direction: lucky_directions(favorable).primary_direction,
            desk_placement: &["背靠实墙坐", "面向门口但不正对", "桌面保持整洁"],
            colors: &["深蓝色", "棕色", "金色"],
            beneficial_items: &["文昌塔", "水晶球", "绿色植物"],
            promotion_tips: &[
                "在办公桌左侧摆放升职物品",
                "穿着有利颜色的服装",
                "选择吉利时间进行重要决策",
            ],
        },
        FengshuiQuery::Relationship => FengshuiAdvice::Relationship {
            peach_blossom_direction: peach_blossom_direction(profile.gender),
            bedroom: &["成双成对的装饰品", "粉色或暖色调布置", "避免单人照片"],
            personal_enhancement: &["佩戴有利颜色的配饰", "在桃花位摆放鲜花", "保持个人整洁形象"],
            date_suggestions: &[
                "选择在您的吉利方位约会",
                "穿着幸运颜色的服装",
                "选择吉利日期进行重要交流",
            ],
            lucky_flowers: &["玫瑰", "牡丹", "桃花"],
            enhance_charm: &["在桃花位摆放鲜花", "佩戴粉水晶饰品", "保持愉悦心情"],
        },
    }
}
