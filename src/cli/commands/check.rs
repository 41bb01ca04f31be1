use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::account::check_account;
use crate::db::DbPool;
use crate::errors::AppResult;
use crate::models::account::{AccountId, AccountStatus};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { account } = cmd {
        let pipeline = cfg.pipeline()?;
        let account = AccountId::parse(account)?;

        let pool = DbPool::open_read_only(&cfg.database)?;
        let status = check_account(account, &pool, &pipeline)?;

        let msg = format!("Account {}: {}", account, status.describe());
        match status {
            AccountStatus::HasData => success(msg),
            AccountStatus::NoData | AccountStatus::NotFound => warning(msg),
        }
    }
    Ok(())
}
