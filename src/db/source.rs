//! The data-source capability consumed by the pipeline.

use crate::errors::AppResult;
use crate::table::{Table, Value};

/// Anything that can run a parameterized read query and hand back a table.
///
/// Implementations must bind `params` positionally (`?1`, `?2`, …) and must
/// return rows in the order the database produced them. Caller-controlled
/// values never reach the query text.
pub trait DataSource {
    fn query(&self, sql: &str, params: &[Value]) -> AppResult<Table>;
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn query(&self, sql: &str, params: &[Value]) -> AppResult<Table> {
        (**self).query(sql, params)
    }
}
