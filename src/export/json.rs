use crate::errors::{AppError, AppResult};
use crate::table::{Table, Value};
use serde_json::Map;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Array of objects keyed by column name, pretty-printed.
pub(crate) fn write_json(table: &Table, path: &Path) -> AppResult<()> {
    let records = table_to_records(table)?;
    let json_data = serde_json::to_string_pretty(&records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

fn table_to_records(table: &Table) -> AppResult<Vec<Map<String, serde_json::Value>>> {
    table
        .rows()
        .iter()
        .map(|row| {
            table
                .columns()
                .iter()
                .zip(row)
                .map(|(col, v)| to_json(v).map(|j| (col.clone(), j)))
                .collect::<AppResult<Map<_, _>>>()
        })
        .collect()
}

fn to_json(v: &Value) -> AppResult<serde_json::Value> {
    serde_json::to_value(v).map_err(|e| AppError::Export(format!("JSON value error: {e}")))
}
