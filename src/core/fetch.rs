//! Fetcher: the two per-account read queries.

use crate::config::PipelineConfig;
use crate::db::DataSource;
use crate::db::queries::{eating_query, symptoms_query};
use crate::errors::AppResult;
use crate::models::account::AccountId;
use crate::table::{Table, Value};
use tracing::debug;

/// Meals joined with their ingredients, ordered by date and meal slot.
/// An account without meals yields an empty table, not an error.
pub fn fetch_eating(
    account: AccountId,
    source: &dyn DataSource,
    cfg: &PipelineConfig,
) -> AppResult<Table> {
    let sql = eating_query(cfg);
    debug!(%account, query = %sql, "fetching eating data");

    let table = source.query(&sql, &[Value::Int(account.get())])?;
    debug!(%account, rows = table.len(), "eating data fetched");
    Ok(table)
}

/// Symptom reports, ordered by date, time slot and entry order.
pub fn fetch_symptoms(
    account: AccountId,
    source: &dyn DataSource,
    cfg: &PipelineConfig,
) -> AppResult<Table> {
    let sql = symptoms_query(cfg);
    debug!(%account, query = %sql, "fetching symptom data");

    let params = [
        Value::Int(account.get()),
        Value::Text(cfg.symptom_placeholder.clone()),
    ];
    let table = source.query(&sql, &params)?;
    debug!(%account, rows = table.len(), "symptom data fetched");
    Ok(table)
}
