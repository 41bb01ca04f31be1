use crate::config::PipelineConfig;
use crate::db::DataSource;
use crate::db::queries::{account_exists_query, account_has_data_query};
use crate::errors::{AppError, AppResult};
use crate::models::account::{AccountId, AccountStatus};
use crate::table::{Table, Value};

/// Classify an account as missing, empty, or holding data.
pub fn check_account(
    account: AccountId,
    source: &dyn DataSource,
    cfg: &PipelineConfig,
) -> AppResult<AccountStatus> {
    let id = [Value::Int(account.get())];

    let exists = source.query(&account_exists_query(cfg), &id)?;
    if scalar_count(&exists)? == 0 {
        return Ok(AccountStatus::NotFound);
    }

    let data = source.query(&account_has_data_query(cfg), &id)?;
    if scalar_count(&data)? == 0 {
        return Ok(AccountStatus::NoData);
    }

    Ok(AccountStatus::HasData)
}

/// First cell of a one-row count query.
fn scalar_count(table: &Table) -> AppResult<i64> {
    let cell = table
        .rows()
        .first()
        .and_then(|r| r.first())
        .ok_or_else(|| AppError::MalformedData("count query returned no rows".to_string()))?;

    match cell {
        Value::Null => Ok(0),
        other => other.as_i64().ok_or_else(|| {
            AppError::MalformedData(format!("count query returned a non-integer: {other:?}"))
        }),
    }
}
