use chrono::{Datelike, NaiveDate};

use crate::api::MonthSelector;
use crate::{ClientError, ClientResult};

/// Accepts `current`, `YYYY-MM` or `YYYY-MM-DD`; a full date selects the
/// month it falls in.
pub fn parse_month(value: &str) -> ClientResult<MonthSelector> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("current") {
        return Ok(MonthSelector::Current);
    }

    let parsed = if trimmed.len() == 7 {
        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
    } else {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
    };

    parsed
        .ok()
        .and_then(|date| date.with_day(1))
        .map(MonthSelector::Month)
        .ok_or_else(|| {
            ClientError::validation(&format!(
                "invalid month `{trimmed}`: use current, YYYY-MM or YYYY-MM-DD"
            ))
        })
}

/// Strict `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(value: &str) -> ClientResult<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0usize, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|index| bytes[*index].is_ascii_digit());
    if !shaped {
        return Err(ClientError::validation("date must use YYYY-MM-DD format"));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ClientError::validation("date must use valid calendar values"))
}

pub(crate) fn resolve_limit(requested: Option<usize>, default_limit: usize) -> usize {
    requested.unwrap_or(default_limit)
}
