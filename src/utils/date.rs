use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("invalid date '{s}' (expected YYYY-MM-DD)")))
}

/// Inclusive range from optional bounds. Missing bounds are open-ended.
pub fn resolve_range(from: Option<&str>, to: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    if from.is_none() && to.is_none() {
        return Ok(None);
    }

    let start = from.map(parse_date).transpose()?.unwrap_or(NaiveDate::MIN);
    let end = to.map(parse_date).transpose()?.unwrap_or(NaiveDate::MAX);
    Ok(Some((start, end)))
}
