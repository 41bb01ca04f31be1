use crate::errors::{AppError, AppResult};
use crate::table::Table;
use std::path::Path;

/// Header = column names; nulls become empty cells.
pub(crate) fn write_csv(table: &Table, path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(table.columns())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in table.rows() {
        wtr.write_record(row.iter().map(|v| v.to_string()))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
