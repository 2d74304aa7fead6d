//! Property tests for cycle, balance and almanac invariants.

use almanac_core::almanac::composite_score;
use almanac_core::balance::balance_score;
use almanac_core::sexagenary::CyclePosition;
use almanac_core::{
    ActivityType, AnchorStrategy, AuspiciousRangeFinder, BirthDate, BirthProfileCalculator,
    DailyAlmanacCalculator, ElementBalanceAnalyzer, ElementalTally,
};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 through 2099-12-31.
    (0i64..73_049).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn any_strategy() -> impl Strategy<Value = AnchorStrategy> {
    prop_oneof![Just(AnchorStrategy::Accurate), Just(AnchorStrategy::Approximate)]
}

proptest! {
    #[test]
    fn pillars_come_from_a_single_position(
        date in any_date(),
        hour in 0u32..24,
        strategy in any_strategy(),
    ) {
        use chrono::Datelike;
        let birth = BirthDate::new(date.year(), date.month(), date.day(), hour).unwrap();
        let pillars = BirthProfileCalculator::new(strategy).pillars(&birth).unwrap();
        for pair in pillars.pillars() {
            let p = pair.position().value();
            prop_assert_eq!(pair.stem().index(), usize::from(p % 10));
            prop_assert_eq!(pair.branch().index(), usize::from(p % 12));
            prop_assert_eq!(CyclePosition::from_stem_branch(pair.stem(), pair.branch()), Some(pair.position()));
        }
    }

    #[test]
    fn consecutive_days_advance_one_position(date in any_date()) {
        let calc = DailyAlmanacCalculator::default();
        let today = calc.compute_date(date, None).unwrap().day_pillar.position().value();
        let tomorrow = calc.compute_date(date + Duration::days(1), None).unwrap().day_pillar.position().value();
        prop_assert_eq!(tomorrow, (today + 1) % 60);
    }

    #[test]
    fn almanac_is_deterministic(date in any_date(), strategy in any_strategy()) {
        let first = DailyAlmanacCalculator::new(strategy).compute_date(date, None).unwrap();
        let second = DailyAlmanacCalculator::new(strategy).compute_date(date, None).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!((3..=6).contains(&first.suitable.len()));
        prop_assert!((2..=4).contains(&first.unsuitable.len()));
        prop_assert_eq!(first.hourly.len(), 12);
    }

    #[test]
    fn single_day_general_search_agrees_with_almanac(date in any_date()) {
        let calc = DailyAlmanacCalculator::default();
        let iso = date.format("%Y-%m-%d").to_string();
        let almanac = calc.compute(&iso, None).unwrap();
        let found = AuspiciousRangeFinder::new(calc).find(&iso, &iso, ActivityType::General).unwrap();
        prop_assert_eq!(found.len() == 1, almanac.suitable.len() > almanac.unsuitable.len());
    }

    #[test]
    fn balance_score_stays_in_bounds(counts in proptest::array::uniform5(0u32..50)) {
        prop_assume!(counts.iter().sum::<u32>() > 0);
        let analysis = ElementBalanceAnalyzer::new()
            .analyze(&ElementalTally::from_counts(counts))
            .unwrap();
        let score = analysis.profile.balance_score;
        prop_assert!((0.0..=100.0).contains(&score));
        let total: f64 = analysis.profile.strengths.iter().map(|s| s.percentage).sum();
        prop_assert!((total - 100.0).abs() < 0.5);
    }

    #[test]
    fn even_tallies_score_one_hundred(n in 1u32..100) {
        let analysis = ElementBalanceAnalyzer::new()
            .analyze(&ElementalTally::from_counts([n; 5]))
            .unwrap();
        prop_assert_eq!(analysis.profile.balance_score, 100.0);
        prop_assert!(analysis.profile.missing_elements.is_empty());
    }

    #[test]
    fn composite_score_never_needs_clamping_in_range(suitable in 3usize..=6, unsuitable in 2usize..=4) {
        let raw = suitable as i64 * 20 - unsuitable as i64 * 10;
        prop_assert!((0..=100).contains(&raw));
        prop_assert_eq!(i64::from(composite_score(suitable, unsuitable)), raw);
    }

    #[test]
    fn composite_score_clamps_at_extremes(suitable in 0usize..100, unsuitable in 0usize..100) {
        prop_assert!(composite_score(suitable, unsuitable) <= 100);
    }
}

#[test]
fn balance_score_of_ideal_split_is_one_hundred() {
    assert_eq!(balance_score([20.0; 5]), 100.0);
}
