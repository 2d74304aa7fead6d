//! Auspicious-day search over an inclusive date range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::almanac::{AlmanacProvider, DailyAlmanac};
use crate::compass::Direction;
use crate::date::{format_iso_date, parse_iso_date};
use crate::error::{CoreError, Result};

/// Default cap on the number of days scanned by one query.
pub const DEFAULT_MAX_SPAN_DAYS: u32 = 366;

/// Default number of days returned.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Number of suitable activities quoted in a reason.
const REASON_ACTIVITIES: usize = 3;

/// What the caller wants to do on the chosen day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    #[default]
    General,
    Wedding,
    Moving,
    Business,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::General,
        ActivityType::Wedding,
        ActivityType::Moving,
        ActivityType::Business,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::General => "general",
            ActivityType::Wedding => "wedding",
            ActivityType::Moving => "moving",
            ActivityType::Business => "business",
        }
    }

    /// Activity terms that make a day qualify. Empty for `General`.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ActivityType::General => &[],
            ActivityType::Wedding => &["嫁娶", "会亲友", "祈福"],
            ActivityType::Moving => &["搬家", "入宅", "安床"],
            ActivityType::Business => &["开市", "开业", "纳财", "交易"],
        }
    }

    /// Whether a day's almanac qualifies for this activity.
    pub fn qualifies(self, almanac: &DailyAlmanac) -> bool {
        match self {
            ActivityType::General => almanac.is_generally_auspicious(),
            other => almanac.suitable.iter().any(|activity| {
                other
                    .keywords()
                    .iter()
                    .any(|keyword| activity.contains(keyword))
            }),
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted)
            .ok_or_else(|| {
                CoreError::invalid(
                    "activity",
                    format!("unknown activity type '{s}' (expected general, wedding, moving or business)"),
                )
            })
    }
}

/// A qualifying day in a range query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuspiciousDay {
    pub date: String,
    pub score: u8,
    /// `宜：` followed by up to three suitable activities.
    pub reason: String,
    pub wealth_direction: Direction,
}

impl AuspiciousDay {
    fn from_almanac(almanac: &DailyAlmanac) -> Self {
        let quoted: Vec<&str> = almanac
            .suitable
            .iter()
            .take(REASON_ACTIVITIES)
            .map(String::as_str)
            .collect();
        Self {
            date: almanac.date.clone(),
            score: almanac.score,
            reason: format!("宜：{}", quoted.join(", ")),
            wealth_direction: almanac.wealth_direction,
        }
    }
}

/// Scans a date range through an [`AlmanacProvider`].
#[derive(Debug, Clone)]
pub struct AuspiciousRangeFinder<P> {
    provider: P,
    max_span_days: u32,
    limit: usize,
}

impl<P: AlmanacProvider> AuspiciousRangeFinder<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            max_span_days: DEFAULT_MAX_SPAN_DAYS,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn with_max_span_days(mut self, days: u32) -> Self {
        self.max_span_days = days;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Qualifying days between `start` and `end` inclusive, best score first.
    ///
    /// Days with equal scores keep date order. At most `limit` days are
    /// returned.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for unparsable dates, `end < start`, or a span longer
    /// than the configured maximum. Provider errors are returned unchanged.
    pub fn find(&self, start: &str, end: &str, activity: ActivityType) -> Result<Vec<AuspiciousDay>> {
        let start_date = parse_iso_date("start", start)?;
        let end_date = parse_iso_date("end", end)?;

        if end_date < start_date {
            return Err(CoreError::invalid(
                "end",
                format!("end date {end_date} is before start date {start_date}"),
            ));
        }

        let span = (end_date - start_date).num_days() + 1;
        if span > i64::from(self.max_span_days) {
            tracing::warn!(span, max = self.max_span_days, "range query rejected");
            return Err(CoreError::invalid(
                "end",
                format!(
                    "range covers {span} days, more than the maximum of {}",
                    self.max_span_days
                ),
            ));
        }

        let mut days = Vec::new();
        for date in start_date.iter_days().take(span as usize) {
            let almanac = self.provider.daily(&format_iso_date(date), None)?;
            if activity.qualifies(&almanac) {
                days.push(AuspiciousDay::from_almanac(&almanac));
            }
        }

        // Stable: equal scores keep date order.
        days.sort_by(|a, b| b.score.cmp(&a.score));
        days.truncate(self.limit);

        tracing::debug!(
            provider = self.provider.name(),
            %activity,
            span,
            found = days.len(),
            "range search finished"
        );

        Ok(days)
    }
}
