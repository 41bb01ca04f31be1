use crate::config::PipelineConfig;
use crate::core::clean::{clean_eating, clean_symptoms};
use crate::core::enrich::enrich;
use crate::core::fetch::{fetch_eating, fetch_symptoms};
use crate::db::DataSource;
use crate::errors::AppResult;
use crate::models::account::AccountId;
use crate::table::Table;
use tracing::info_span;

/// The two enriched tables of one account.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountViews {
    pub eating: Table,
    pub symptoms: Table,
}

/// Fetch, clean and enrich both tables of one account.
///
/// Both tables are long (one row per ingredient line / per report); any
/// aggregation beyond the symptom join is left to the presentation layer.
pub fn load_account_views(
    account: AccountId,
    source: &dyn DataSource,
    cfg: &PipelineConfig,
) -> AppResult<AccountViews> {
    let _span = info_span!("load_account_views", %account).entered();

    let eating = fetch_eating(account, source, cfg)?;
    let symptoms = fetch_symptoms(account, source, cfg)?;

    let eating = clean_eating(eating)?;
    let symptoms = clean_symptoms(symptoms)?;

    let (eating, symptoms) = enrich(eating, symptoms)?;
    Ok(AccountViews { eating, symptoms })
}
