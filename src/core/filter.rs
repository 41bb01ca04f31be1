//! Selector filter: date range and dropdown/slider subsetting of the
//! enriched eating view.
//!
//! Every predicate is a [`Mask`] with exactly one entry per view row. Masks
//! are combined positionally, so a row can never be matched against another
//! row's flags.

use crate::config::PipelineConfig;
use crate::core::clean::parse_date_value;
use crate::core::columns::{AVG_SEVERITY, DAYTIME, SYMPTOM_NEXT_DAY, SYMPTOM_SAME_DAY};
use crate::errors::AppResult;
use crate::models::daytime::Daytime;
use crate::models::selector::{Selector, Severity};
use crate::table::{Mask, Table, Value};
use chrono::NaiveDate;
use tracing::debug;

/// Name of the date column: the first column matching one of the aliases
/// case-insensitively, else the first alias.
pub fn date_column(view: &Table, cfg: &PipelineConfig) -> String {
    view.columns()
        .iter()
        .find(|c| {
            cfg.date_column_aliases
                .iter()
                .any(|a| a.eq_ignore_ascii_case(c))
        })
        .cloned()
        .unwrap_or_else(|| cfg.date_column_aliases[0].clone())
}

/// Rows whose date lies in `start..=end`. Rows with a null date are dropped.
/// A view without any date column is a `SchemaMismatch`.
pub fn filter_by_date_range(
    view: &Table,
    start: NaiveDate,
    end: NaiveDate,
    cfg: &PipelineConfig,
) -> AppResult<Table> {
    let col = date_column(view, cfg);
    let mut keep = Vec::with_capacity(view.len());
    for v in view.column(&col)? {
        keep.push(match v {
            Value::Null => false,
            v => {
                let d = parse_date_value(v)?;
                start <= d && d <= end
            }
        });
    }

    let subset = view.select(&Mask::from(keep))?;
    debug!(%start, %end, kept = subset.len(), of = view.len(), "date range applied");
    Ok(subset)
}

/// Meal-slot predicate. `All` (like `None`) restricts nothing; the options
/// pick one meal from [`Daytime::ALL`] by position.
pub fn meal_mask(view: &Table, selector: Option<Selector>) -> AppResult<Mask> {
    let allowed = match selector {
        None | Some(Selector::All) => return Ok(Mask::all(view.len())),
        Some(s) => Daytime::ALL[s.position() - 1].to_db_str(),
    };

    let values = view.column(DAYTIME)?;
    Ok(Mask::from(
        values
            .map(|v| v.as_str() == Some(allowed))
            .collect::<Vec<_>>(),
    ))
}

/// Symptom predicate. `Option3` means "symptom on the following day";
/// otherwise the same-day flag is matched against [false, true] sliced by
/// position (All: both, Option1: without, Option2: with).
pub fn symptom_mask(view: &Table, selector: Option<Selector>) -> AppResult<Mask> {
    let Some(selector) = selector else {
        return Ok(Mask::all(view.len()));
    };

    let (column, allowed): (&str, &[bool]) = match selector {
        Selector::Option3 => (SYMPTOM_NEXT_DAY, &[true]),
        Selector::All => (SYMPTOM_SAME_DAY, &[false, true]),
        Selector::Option1 => (SYMPTOM_SAME_DAY, &[false]),
        Selector::Option2 => (SYMPTOM_SAME_DAY, &[true]),
    };

    let values = view.column(column)?;
    Ok(Mask::from(
        values
            .map(|v| v.as_bool().is_some_and(|b| allowed.contains(&b)))
            .collect::<Vec<_>>(),
    ))
}

/// Severity predicate: `avg_severity >= threshold` for thresholds 1..=10.
/// Rows without an average never pass an active threshold.
pub fn severity_mask(view: &Table, severity: Option<Severity>) -> AppResult<Mask> {
    let Some(threshold) = severity.and_then(|s| s.threshold()) else {
        return Ok(Mask::all(view.len()));
    };

    let values = view.column(AVG_SEVERITY)?;
    Ok(Mask::from(
        values
            .map(|v| v.as_f64().is_some_and(|avg| avg >= threshold))
            .collect::<Vec<_>>(),
    ))
}

/// The three selector masks, each checked against the view's row count.
pub fn selector_masks(
    view: &Table,
    meal: Option<Selector>,
    symptom: Option<Selector>,
    severity: Option<Severity>,
) -> AppResult<Vec<Mask>> {
    let masks = vec![
        meal_mask(view, meal)?,
        symptom_mask(view, symptom)?,
        severity_mask(view, severity)?,
    ];
    for m in &masks {
        m.ensure_len(view.len())?;
    }
    Ok(masks)
}

/// Subset the view by the conjunction of all active selectors. With every
/// selector inactive the result equals the input, row for row.
pub fn filter_by_selectors(
    view: &Table,
    meal: Option<Selector>,
    symptom: Option<Selector>,
    severity: Option<Severity>,
) -> AppResult<Table> {
    let masks = selector_masks(view, meal, symptom, severity)?;
    let mask = Mask::conjunction(view.len(), &masks)?;

    let subset = view.select(&mask)?;
    debug!(
        ?meal,
        ?symptom,
        severity = ?severity.map(|s| s.get()),
        kept = subset.len(),
        of = view.len(),
        "selectors applied"
    );
    Ok(subset)
}

/// Parse raw selector input from the presentation layer.
pub fn parse_selectors(
    meal: Option<&str>,
    symptom: Option<&str>,
    severity: Option<i64>,
    cfg: &PipelineConfig,
) -> AppResult<(Option<Selector>, Option<Selector>, Option<Severity>)> {
    let meal = meal.map(|t| Selector::parse(t, cfg)).transpose()?.flatten();
    let symptom = symptom.map(|t| Selector::parse(t, cfg)).transpose()?.flatten();
    let severity = severity.map(Severity::new).transpose()?;
    Ok((meal, symptom, severity))
}
