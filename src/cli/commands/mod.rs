pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod view;

use crate::cli::parser::FilterArgs;
use crate::config::{Config, PipelineConfig};
use crate::core::filter::{filter_by_date_range, filter_by_selectors, parse_selectors};
use crate::core::{AccountViews, load_account_views};
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::models::account::AccountId;
use crate::table::Table;
use crate::utils::date::resolve_range;

/// Run the pipeline for one account against the configured database.
/// The connection is closed before this returns, on success or error.
pub(crate) fn load_views(account: &str, cfg: &Config) -> AppResult<(AccountViews, PipelineConfig)> {
    let pipeline = cfg.pipeline()?;
    let account = AccountId::parse(account)?;

    let pool = DbPool::open_read_only(&cfg.database)?;
    let views = load_account_views(account, &pool, &pipeline)?;
    Ok((views, pipeline))
}

/// Date range first, then the selectors, as the dashboard applies them.
pub(crate) fn apply_filters(
    view: &Table,
    filters: &FilterArgs,
    cfg: &PipelineConfig,
) -> AppResult<Table> {
    let (meal, symptom, severity) = parse_selectors(
        filters.meal.as_deref(),
        filters.symptom.as_deref(),
        filters.severity,
        cfg,
    )?;

    let ranged = match resolve_range(filters.from.as_deref(), filters.to.as_deref())? {
        Some((start, end)) => filter_by_date_range(view, start, end, cfg)?,
        None => view.clone(),
    };

    filter_by_selectors(&ranged, meal, symptom, severity)
}
