//! Filter choices supplied by the presentation layer.

use crate::config::PipelineConfig;
use crate::errors::{AppError, AppResult};

/// Four-way dropdown option. "No filter" is expressed as `Option::None` at
/// the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    All,
    Option1,
    Option2,
    Option3,
}

impl Selector {
    pub const ALL: [Selector; 4] = [
        Selector::All,
        Selector::Option1,
        Selector::Option2,
        Selector::Option3,
    ];

    pub fn position(&self) -> usize {
        match self {
            Selector::All => 0,
            Selector::Option1 => 1,
            Selector::Option2 => 2,
            Selector::Option3 => 3,
        }
    }

    /// Parse a selector token using the configured vocabulary
    /// (case-insensitive). `none` or an empty token means "no filter".
    pub fn parse(token: &str, cfg: &PipelineConfig) -> AppResult<Option<Self>> {
        let t = token.trim();
        if t.is_empty() || t.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        cfg.selector_tokens
            .iter()
            .position(|known| known.eq_ignore_ascii_case(t))
            .map(|pos| Some(Self::ALL[pos]))
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "bad selector '{}', expected one of: none, {}",
                    token,
                    cfg.selector_tokens.join(", ")
                ))
            })
    }
}

/// Severity slider value, 0..=10. Zero means "no restriction".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Severity(u8);

impl Severity {
    pub const MAX: i64 = 10;

    pub fn new(value: i64) -> AppResult<Self> {
        if !(0..=Self::MAX).contains(&value) {
            return Err(AppError::InvalidInput(format!(
                "bad severity selector: {value} (expected 0..=10)"
            )));
        }
        Ok(Severity(value as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Threshold to apply, or `None` when the slider is at zero.
    pub fn threshold(&self) -> Option<f64> {
        (self.0 >= 1).then_some(f64::from(self.0))
    }
}
