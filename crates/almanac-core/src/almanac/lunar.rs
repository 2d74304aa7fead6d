//! Approximate lunar labels and solar terms.
//!
//! No leap-month detection and no solar-term astronomy: the lunar month is
//! taken to trail the civil month by one, the lunar day equals the civil day,
//! and solar terms fall on fixed civil dates. Every value here carries
//! `approximate: true` so nothing downstream mistakes it for a real
//! conversion.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::format_iso_date;

const LUNAR_MONTHS: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月", "腊月",
];

const LUNAR_DAYS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Term name with its fixed civil month and day.
const SOLAR_TERMS: [(&str, u32, u32); 24] = [
    ("立春", 2, 4),
    ("雨水", 2, 19),
    ("惊蛰", 3, 5),
    ("春分", 3, 20),
    ("清明", 4, 5),
    ("谷雨", 4, 20),
    ("立夏", 5, 5),
    ("小满", 5, 21),
    ("芒种", 6, 5),
    ("夏至", 6, 21),
    ("小暑", 7, 7),
    ("大暑", 7, 23),
    ("立秋", 8, 7),
    ("处暑", 8, 23),
    ("白露", 9, 7),
    ("秋分", 9, 23),
    ("寒露", 10, 8),
    ("霜降", 10, 23),
    ("立冬", 11, 7),
    ("小雪", 11, 22),
    ("大雪", 12, 7),
    ("冬至", 12, 22),
    ("小寒", 1, 5),
    ("大寒", 1, 20),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarLabel {
    pub month: String,
    pub day: String,
    pub description: String,
    pub approximate: bool,
}

pub fn approximate_lunar_label(date: NaiveDate) -> LunarLabel {
    let month_index = (date.month() as usize + 10) % 12;
    let day_index = (date.day() as usize - 1).min(29);
    let month = LUNAR_MONTHS[month_index];
    let day = LUNAR_DAYS[day_index];
    LunarLabel {
        month: month.to_string(),
        day: day.to_string(),
        description: format!("{month}{day}"),
        approximate: true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTermDate {
    pub name: String,
    pub date: String,
    pub approximate: bool,
}

/// The 24 terms of a civil year, in traditional order (立春 first).
pub fn solar_terms(year: i32) -> Vec<SolarTermDate> {
    SOLAR_TERMS
        .iter()
        .filter_map(|&(name, month, day)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| SolarTermDate {
                name: name.to_string(),
                date: format_iso_date(date),
                approximate: true,
            })
        })
        .collect()
}

/// The term that falls on `date`, if any.
pub fn solar_term_on(date: NaiveDate) -> Option<&'static str> {
    SOLAR_TERMS
        .iter()
        .find(|&&(_, month, day)| month == date.month() && day == date.day())
        .map(|&(name, _, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn lunar_month_trails_civil_month() {
        let label = approximate_lunar_label(date(2024, 3, 15));
        assert_eq!(label.month, "二月");
        assert_eq!(label.day, "十五");
        assert_eq!(label.description, "二月十五");
        assert!(label.approximate);

        assert_eq!(approximate_lunar_label(date(2024, 1, 1)).month, "腊月");
        assert_eq!(approximate_lunar_label(date(2024, 2, 1)).month, "正月");
    }

    #[test]
    fn lunar_day_caps_at_thirty() {
        assert_eq!(approximate_lunar_label(date(2024, 1, 31)).day, "三十");
    }

    #[test]
    fn solar_terms_cover_the_year() {
        let terms = solar_terms(2024);
        assert_eq!(terms.len(), 24);
        assert_eq!(terms[0].name, "立春");
        assert_eq!(terms[0].date, "2024-02-04");
        assert_eq!(terms[23].date, "2024-01-20");
    }

    #[test]
    fn solar_term_lookup_by_date() {
        assert_eq!(solar_term_on(date(2025, 6, 21)), Some("夏至"));
        assert_eq!(solar_term_on(date(2025, 6, 22)), None);
    }
}
