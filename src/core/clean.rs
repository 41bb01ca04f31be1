//! Cleaner: column naming, date parsing, duplicate meal entries.

use crate::core::columns::{DATE, EATING_DEDUP_KEY};
use crate::errors::{AppError, AppResult};
use crate::table::{Mask, Table, Value};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use tracing::debug;

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// "Meal Id" → "meal_id"
pub fn normalize_column_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Parse a date cell. Accepts dates, `YYYY-MM-DD` text and timestamps
/// (the time part is dropped).
pub fn parse_date_value(value: &Value) -> AppResult<NaiveDate> {
    match value {
        Value::Date(d) => Ok(*d),
        Value::Text(s) => parse_date_text(s)
            .ok_or_else(|| AppError::MalformedData(format!("unparseable date: '{s}'"))),
        other => Err(AppError::MalformedData(format!(
            "unparseable date: {other:?}"
        ))),
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

fn clean_common(mut table: Table) -> AppResult<Table> {
    table.rename_columns(normalize_column_name);
    table.map_column(DATE, |v| parse_date_value(v).map(Value::Date))?;
    Ok(table)
}

/// Clean the eating table and collapse duplicate meal entries, keeping the
/// first occurrence. Surviving rows keep their original order.
pub fn clean_eating(table: Table) -> AppResult<Table> {
    let table = clean_common(table)?;

    let key_idx = EATING_DEDUP_KEY
        .iter()
        .map(|c| table.require_column(c))
        .collect::<AppResult<Vec<_>>>()?;

    let mut seen: HashSet<Vec<&Value>> = HashSet::with_capacity(table.len());
    let keep = Mask::from(
        table
            .rows()
            .iter()
            .map(|row| seen.insert(key_idx.iter().map(|&i| &row[i]).collect()))
            .collect::<Vec<_>>(),
    );

    let dropped = table.len() - keep.selected();
    if dropped > 0 {
        debug!(dropped, "removed duplicate eating rows");
    }

    let selected = table.select(&keep)?;
    Ok(selected)
}

pub fn clean_symptoms(table: Table) -> AppResult<Table> {
    clean_common(table)
}
