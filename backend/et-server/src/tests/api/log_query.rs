use crate::{ApiError, LogQuery};

use chrono::NaiveDate;
use googletest::prelude::*;

fn query(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> LogQuery {
    LogQuery {
        from: from.map(String::from),
        to: to.map(String::from),
        limit: limit.map(String::from),
    }
}

#[test]
fn test_empty_query_is_unbounded() {
    let filter = LogQuery::default().into_filter().unwrap();

    assert_that!(filter.from, none());
    assert_that!(filter.to, none());
    assert_that!(filter.limit, none());
}

#[test]
fn test_bounds_and_limit_are_parsed() {
    let filter = query(Some("2024-01-01"), Some("2024-01-31"), Some("2"))
        .into_filter()
        .unwrap();

    assert_that!(filter.from, some(eq(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())));
    assert_that!(filter.to, some(eq(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())));
    assert_that!(filter.limit, some(eq(2)));
}

#[test]
fn test_empty_values_are_treated_as_absent() {
    let filter = query(Some(""), Some(" "), Some("")).into_filter().unwrap();

    assert_that!(filter.from, none());
    assert_that!(filter.to, none());
    assert_that!(filter.limit, none());
}

#[test]
fn test_zero_negative_and_garbage_limits_mean_no_cap() {
    for raw in ["0", "-3", "abc"] {
        let filter = query(None, None, Some(raw)).into_filter().unwrap();
        assert!(filter.limit.is_none(), "limit {raw:?} should not cap");
    }
}

#[test]
fn test_invalid_from_reports_from_message() {
    let error = query(Some("not-a-date"), None, None).into_filter().unwrap_err();

    assert!(matches!(error, ApiError::Validation { .. }));
    assert_eq!(error.message(), "Invalid from date format");
}

#[test]
fn test_invalid_to_reports_to_message() {
    let error = query(Some("2024-01-01"), Some("31/01/2024"), None)
        .into_filter()
        .unwrap_err();

    assert_eq!(error.message(), "Invalid to date format");
}
