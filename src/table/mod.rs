//! In-memory tabular results.
//!
//! A [`Table`] is an ordered list of named columns plus row-major cells. Row
//! order is significant everywhere: it is the database's return order, and
//! every derived table keeps it.

mod mask;
mod value;

pub use mask::Mask;
pub use value::Value;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from columns and rows, checking every row's width.
    pub fn from_rows<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: Vec<Vec<Value>>,
    ) -> AppResult<Self> {
        let mut table = Table::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> AppResult<()> {
        if row.len() != self.columns.len() {
            return Err(AppError::MalformedData(format!(
                "row has {} cells but table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Like [`column_index`](Self::column_index) but a missing column is a
    /// `SchemaMismatch`.
    pub fn require_column(&self, name: &str) -> AppResult<usize> {
        self.column_index(name).ok_or_else(|| {
            AppError::SchemaMismatch(format!(
                "column '{}' not found (available: {})",
                name,
                self.columns.join(", ")
            ))
        })
    }

    /// Iterate the cells of one column in row order.
    pub fn column(&self, name: &str) -> AppResult<impl Iterator<Item = &Value> + '_> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(move |r| &r[idx]))
    }

    pub fn cell(&self, row: usize, name: &str) -> AppResult<&Value> {
        let idx = self.require_column(name)?;
        self.rows.get(row).map(|r| &r[idx]).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "row {} out of range ({} rows)",
                row,
                self.rows.len()
            ))
        })
    }

    /// Append a column. `values` must have one entry per row.
    pub fn add_column(&mut self, name: &str, values: Vec<Value>) -> AppResult<()> {
        if values.len() != self.rows.len() {
            return Err(AppError::IndexMismatch {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        if self.column_index(name).is_some() {
            return Err(AppError::SchemaMismatch(format!(
                "column '{name}' already exists"
            )));
        }
        self.columns.push(name.to_string());
        for (row, v) in self.rows.iter_mut().zip(values) {
            row.push(v);
        }
        Ok(())
    }

    /// Rewrite one column in place, keeping its position.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> AppResult<()>
    where
        F: FnMut(&Value) -> AppResult<Value>,
    {
        let idx = self.require_column(name)?;
        for row in &mut self.rows {
            row[idx] = f(&row[idx])?;
        }
        Ok(())
    }

    pub fn rename_columns<F>(&mut self, f: F)
    where
        F: Fn(&str) -> String,
    {
        for c in &mut self.columns {
            *c = f(c);
        }
    }

    /// Keep the rows where `mask` is true, in their original order.
    pub fn select(&self, mask: &Mask) -> AppResult<Table> {
        mask.ensure_len(self.rows.len())?;
        Ok(Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .zip(mask.as_slice())
                .filter(|(_, keep)| **keep)
                .map(|(r, _)| r.clone())
                .collect(),
        })
    }
}
