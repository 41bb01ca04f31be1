// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;

use crate::errors::AppResult;
use crate::table::Table;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `table` to `path`. An existing file is only replaced with `force`.
pub fn export_table(table: &Table, format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(table, path)?,
        ExportFormat::Json => json::write_json(table, path)?,
    }

    success(format!(
        "{} export completed: {} ({} rows)",
        format.as_str().to_uppercase(),
        path.display(),
        table.len()
    ));
    Ok(())
}
