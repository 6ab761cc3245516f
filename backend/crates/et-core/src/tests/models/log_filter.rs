use crate::LogFilter;

use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn test_default_filter_contains_everything_and_is_uncapped() {
    let filter = LogFilter::default();

    assert!(filter.contains(day(1)));
    assert_eq!(filter.sql_limit(), -1);
}

#[test]
fn test_bounds_are_inclusive() {
    let filter = LogFilter::new(Some(day(5)), Some(day(10)), None);

    assert!(!filter.contains(day(4)));
    assert!(filter.contains(day(5)));
    assert!(filter.contains(day(10)));
    assert!(!filter.contains(day(11)));
}

#[test]
fn test_single_bound_leaves_other_side_open() {
    let from_only = LogFilter::new(Some(day(5)), None, None);
    assert!(from_only.contains(day(31)));
    assert!(!from_only.contains(day(4)));

    let to_only = LogFilter::new(None, Some(day(5)), None);
    assert!(to_only.contains(day(1)));
    assert!(!to_only.contains(day(6)));
}

#[test]
fn test_non_positive_limit_means_uncapped() {
    assert_eq!(LogFilter::new(None, None, Some(0)).limit, None);
    assert_eq!(LogFilter::new(None, None, Some(-3)).limit, None);
    assert_eq!(LogFilter::new(None, None, Some(2)).sql_limit(), 2);
}

#[test]
fn test_huge_limit_saturates() {
    let filter = LogFilter::new(None, None, Some(i64::MAX));
    assert_eq!(filter.limit, Some(u32::MAX));
}
