use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Validated account id: always a positive integer, always bound as a
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccountId(i64);

impl AccountId {
    /// Coerce user input (e.g. a CLI argument) into an account id.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let id = digits
            .parse::<i64>()
            .map_err(|_| AppError::InvalidInput(format!("account id must be an integer: '{raw}'")))?;
        Self::try_from(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = AppError;

    fn try_from(id: i64) -> AppResult<Self> {
        if id <= 0 {
            return Err(AppError::InvalidInput(format!(
                "account id must be positive: {id}"
            )));
        }
        Ok(AccountId(id))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of the account existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountStatus {
    /// No such row in `account`.
    NotFound,
    /// The account exists but has neither meals nor symptom reports.
    NoData,
    HasData,
}

impl AccountStatus {
    pub fn describe(&self) -> &'static str {
        match self {
            AccountStatus::NotFound => "account not found",
            AccountStatus::NoData => "account has no meal or symptom data",
            AccountStatus::HasData => "account has data",
        }
    }
}
