//! Positional boolean masks.
//!
//! A mask carries no index of its own: position `i` always refers to row `i`
//! of the table it was built from. Combining two masks of different length is
//! therefore an error, never a silent realignment.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask(Vec<bool>);

impl Mask {
    /// Mask selecting every row (the default for an inactive selector).
    pub fn all(len: usize) -> Self {
        Mask(vec![true; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.0.iter().filter(|b| **b).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn ensure_len(&self, expected: usize) -> AppResult<()> {
        if self.0.len() != expected {
            return Err(AppError::IndexMismatch {
                expected,
                actual: self.0.len(),
            });
        }
        Ok(())
    }

    /// Element-wise AND.
    pub fn and(&self, other: &Mask) -> AppResult<Mask> {
        other.ensure_len(self.len())?;
        Ok(Mask(
            self.0.iter().zip(&other.0).map(|(a, b)| *a && *b).collect(),
        ))
    }

    /// AND-reduce `masks` over a table of `len` rows.
    /// Every mask must have exactly `len` entries.
    pub fn conjunction(len: usize, masks: &[Mask]) -> AppResult<Mask> {
        masks
            .iter()
            .try_fold(Mask::all(len), |acc, m| acc.and(m))
    }
}

impl From<Vec<bool>> for Mask {
    fn from(v: Vec<bool>) -> Self {
        Mask(v)
    }
}
