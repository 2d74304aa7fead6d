//! Element attribute table and the recommendation bundle built from it.

use serde::{Deserialize, Serialize};

use crate::compass::Direction;
use crate::sexagenary::Element;

/// Colors, directions, numbers and items associated with one element.
#[derive(Debug)]
pub struct ElementAttributes {
    pub colors: &'static [&'static str],
    pub directions: &'static [Direction],
    pub numbers: &'static [u8],
    pub items: &'static [&'static str],
}

static ELEMENT_ATTRIBUTES: [ElementAttributes; 5] = [
    // wood
    ElementAttributes {
        colors: &["绿色", "青色", "蓝色"],
        directions: &[Direction::East, Direction::Southeast],
        numbers: &[3, 8],
        items: &["植物", "木制品", "书籍"],
    },
    // fire
    ElementAttributes {
        colors: &["红色", "紫色", "粉色"],
        directions: &[Direction::South],
        numbers: &[2, 7],
        items: &["蜡烛", "红色装饰", "电器"],
    },
    // earth
    ElementAttributes {
        colors: &["黄色", "棕色", "米色"],
        directions: &[Direction::Center, Direction::Southwest, Direction::Northeast],
        numbers: &[5, 10],
        items: &["陶瓷", "石制品", "土制工艺品"],
    },
    // metal
    ElementAttributes {
        colors: &["白色", "银色", "金色"],
        directions: &[Direction::West, Direction::Northwest],
        numbers: &[4, 9],
        items: &["金属制品", "钟表", "车辆"],
    },
    // water
    ElementAttributes {
        colors: &["黑色", "深蓝色", "灰色"],
        directions: &[Direction::North],
        numbers: &[1, 6],
        items: &["水景", "鱼缸", "镜子"],
    },
];

pub fn attributes(element: Element) -> &'static ElementAttributes {
    &ELEMENT_ATTRIBUTES[element.index()]
}

/// Lucky and avoid sets for a favorable/unfavorable element split.
///
/// Every list keeps first-insertion order with duplicates removed, so callers
/// can take a prefix for display and get the same answer on every run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub lucky_colors: Vec<String>,
    pub lucky_directions: Vec<Direction>,
    pub lucky_numbers: Vec<u8>,
    pub beneficial_items: Vec<String>,
    pub avoid_colors: Vec<String>,
    pub avoid_directions: Vec<Direction>,
    pub lifestyle_tips: Vec<String>,
}

impl RecommendationBundle {
    pub fn for_elements(favorable: &[Element], unfavorable: &[Element]) -> Self {
        let mut bundle = Self::default();

        for &element in favorable {
            let attrs = attributes(element);
            push_unique(&mut bundle.lucky_colors, attrs.colors.iter().map(|c| c.to_string()));
            push_unique(&mut bundle.lucky_directions, attrs.directions.iter().copied());
            push_unique(&mut bundle.lucky_numbers, attrs.numbers.iter().copied());
            push_unique(&mut bundle.beneficial_items, attrs.items.iter().map(|i| i.to_string()));
        }

        for &element in unfavorable {
            let attrs = attributes(element);
            push_unique(&mut bundle.avoid_colors, attrs.colors.iter().map(|c| c.to_string()));
            push_unique(&mut bundle.avoid_directions, attrs.directions.iter().copied());
        }

        bundle.lifestyle_tips = bundle.tips();
        bundle
    }

    fn tips(&self) -> Vec<String> {
        let directions: Vec<&str> = self.lucky_directions.iter().map(|d| d.hanzi()).collect();
        let numbers: Vec<String> = self.lucky_numbers.iter().map(|n| n.to_string()).collect();

        let mut tips = vec![
            format!("多接触{}的物品", self.lucky_colors.join("/")),
            format!("居住或工作场所朝向{}较为有利", directions.join("/")),
            format!("选择号码或楼层时优先考虑数字{}", numbers.join("、")),
        ];
        if !self.avoid_colors.is_empty() {
            tips.push(format!("避免过多使用{}的装饰", self.avoid_colors.join("/")));
        }
        tips
    }
}

fn push_unique<T: PartialEq>(target: &mut Vec<T>, items: impl IntoIterator<Item = T>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}
