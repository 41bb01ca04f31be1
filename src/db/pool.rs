//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One `DbPool` is opened per pipeline invocation and dropped when it goes
//! out of scope, which closes the connection on every exit path.

use crate::db::source::DataSource;
use crate::errors::AppResult;
use crate::table::{Table, Value};
use rusqlite::{Connection, OpenFlags, params_from_iter};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) a database file for read/write use (`init`).
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open an existing database read-only; the pipeline never writes.
    pub fn open_read_only(path: &str) -> AppResult<Self> {
        let conn = Connection::open_with_flags(
            Path::new(path),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }
}

impl DataSource for DbPool {
    fn query(&self, sql: &str, params: &[Value]) -> AppResult<Table> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let width = columns.len();

        let mut table = Table::new(columns);
        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(width);
            for i in 0..width {
                cells.push(Value::from_sql_ref(row.get_ref(i)?));
            }
            table.push_row(cells)?;
        }

        Ok(table)
    }
}
