use chrono::NaiveDate;

/// Date range and cap applied to a user's exercise log.
///
/// Both bounds are inclusive calendar days. A missing, zero or negative
/// limit means the log is not capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl LogFilter {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>, limit: Option<i64>) -> Self {
        Self {
            from,
            to,
            limit: limit
                .filter(|l| *l > 0)
                .map(|l| u32::try_from(l).unwrap_or(u32::MAX)),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// The cap as an SQLite `LIMIT` value, where -1 means unlimited.
    pub fn sql_limit(&self) -> i64 {
        self.limit.map_or(-1, i64::from)
    }
}
