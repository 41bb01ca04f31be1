//! Immutable settings handed explicitly to every pipeline stage.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Schema (SQLite: attached database name) qualifying every table.
    pub schema: String,
    /// Bound into the symptom query as the per-report label.
    pub symptom_placeholder: String,
    /// Tokens for ALL, OPTION_1, OPTION_2, OPTION_3 in that order.
    pub selector_tokens: [String; 4],
    /// Column names accepted as the date column by the date-range filter.
    pub date_column_aliases: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            schema: "main".to_string(),
            symptom_placeholder: "-".to_string(),
            selector_tokens: [
                "ALL".to_string(),
                "OPTION_1".to_string(),
                "OPTION_2".to_string(),
                "OPTION_3".to_string(),
            ],
            date_column_aliases: vec!["date".to_string(), "datum".to_string()],
        }
    }
}

impl PipelineConfig {
    /// Validate values that end up in query text or in selector parsing.
    pub fn validate(self) -> AppResult<Self> {
        if !IDENTIFIER.is_match(&self.schema) {
            return Err(AppError::Config(format!(
                "schema must be a plain identifier: '{}'",
                self.schema
            )));
        }

        for (i, tok) in self.selector_tokens.iter().enumerate() {
            if tok.trim().is_empty() || tok.eq_ignore_ascii_case("none") {
                return Err(AppError::Config(format!(
                    "selector token #{} must be a non-empty word other than 'none'",
                    i + 1
                )));
            }
            if self.selector_tokens[..i]
                .iter()
                .any(|prev| prev.eq_ignore_ascii_case(tok))
            {
                return Err(AppError::Config(format!("duplicate selector token '{tok}'")));
            }
        }

        if self.date_column_aliases.is_empty() {
            return Err(AppError::Config(
                "at least one date column alias is required".to_string(),
            ));
        }

        Ok(self)
    }

    /// Schema-qualified table name.
    pub fn table(&self, name: &str) -> String {
        format!("{}.{}", self.schema, name)
    }
}
