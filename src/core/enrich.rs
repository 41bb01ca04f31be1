//! Feature enricher: derived columns on the eating table plus the symptom
//! aggregate joined on (date, meal slot).

use crate::core::clean::parse_date_value;
use crate::core::columns::{
    AVG_SEVERITY, DATE, DAYTIME, DISPLAYNAME, DISPLAYNAME_NORMALIZED, SEVERITY, SYMPTOM,
    SYMPTOM_NEXT_DAY, SYMPTOM_SAME_DAY, SYMPTOMS, TIME, WEEKDAY,
};
use crate::core::mapping::DaytimeMapping;
use crate::core::normalize::normalize;
use crate::errors::{AppError, AppResult};
use crate::models::daytime::Daytime;
use crate::table::{Table, Value};
use chrono::{Datelike, NaiveDate};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Per (date, meal slot) summary of symptom reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymptomAggregate {
    labels: Vec<String>,
    severity_sum: f64,
    severity_count: usize,
}

impl SymptomAggregate {
    /// All labels of the group, in report order, joined with ", ".
    pub fn symptoms(&self) -> String {
        self.labels.join(", ")
    }

    /// Unrounded mean severity; `None` if no report carried a severity.
    pub fn avg_severity(&self) -> Option<f64> {
        (self.severity_count > 0).then(|| self.severity_sum / self.severity_count as f64)
    }
}

pub type AggregateMap = HashMap<(NaiveDate, Daytime), SymptomAggregate>;

/// Enrich the eating table from the symptom table. Both inputs are consumed;
/// the symptom table comes back unchanged.
pub fn enrich(eating: Table, symptoms: Table) -> AppResult<(Table, Table)> {
    let eating = add_columns_to_eating(eating, &symptoms)?;
    let symptoms = add_columns_to_symptoms(symptoms);
    Ok((eating, symptoms))
}

/// Same-day/next-day lookup set: every date with at least one report.
pub fn symptom_dates(symptoms: &Table) -> AppResult<HashSet<NaiveDate>> {
    symptoms.column(DATE)?.map(parse_date_value).collect()
}

/// Time-slot labels in order of first appearance.
pub fn observed_time_slots(symptoms: &Table) -> AppResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in symptoms.column(TIME)? {
        if let Some(s) = v.as_str()
            && seen.insert(s)
        {
            out.push(s.to_string());
        }
    }
    Ok(out)
}

/// Mapping for this symptom table, falling back to the static table when
/// the observed labels do not cover every meal.
pub fn daytime_mapping(symptoms: &Table) -> AppResult<DaytimeMapping> {
    let observed = observed_time_slots(symptoms)?;
    Ok(
        DaytimeMapping::infer(observed.iter().map(String::as_str)).unwrap_or_else(|| {
            if !observed.is_empty() {
                warn!(?observed, "time slots do not cover every meal, using fixed mapping");
            }
            DaytimeMapping::fallback()
        }),
    )
}

/// Group reports by (date, mapped meal slot). Reports whose slot maps to no
/// meal are left out.
pub fn aggregate_symptoms(symptoms: &Table, mapping: &DaytimeMapping) -> AppResult<AggregateMap> {
    let date_idx = symptoms.require_column(DATE)?;
    let time_idx = symptoms.require_column(TIME)?;
    let symptom_idx = symptoms.require_column(SYMPTOM)?;
    let severity_idx = symptoms.require_column(SEVERITY)?;

    let mut groups = AggregateMap::new();
    for row in symptoms.rows() {
        let Some(daytime) = row[time_idx].as_str().and_then(|t| mapping.get(t)) else {
            continue;
        };
        let date = parse_date_value(&row[date_idx])?;

        let agg = groups.entry((date, daytime)).or_default();
        agg.labels.push(row[symptom_idx].to_string());

        match &row[severity_idx] {
            Value::Null => {}
            v => {
                let sev = v.as_f64().ok_or_else(|| {
                    AppError::MalformedData(format!("severity is not numeric: {v:?}"))
                })?;
                agg.severity_sum += sev;
                agg.severity_count += 1;
            }
        }
    }

    Ok(groups)
}

fn add_columns_to_eating(mut eating: Table, symptoms: &Table) -> AppResult<Table> {
    let dates = eating
        .column(DATE)?
        .map(parse_date_value)
        .collect::<AppResult<Vec<_>>>()?;

    // Weekday (Monday=0, Sunday=6)
    let weekday = dates
        .iter()
        .map(|d| Value::Int(i64::from(d.weekday().num_days_from_monday())))
        .collect();
    eating.add_column(WEEKDAY, weekday)?;

    let normalized = eating
        .column(DISPLAYNAME)?
        .map(|v| match v {
            Value::Text(s) => Value::Text(normalize(s)),
            _ => Value::Null,
        })
        .collect();
    eating.add_column(DISPLAYNAME_NORMALIZED, normalized)?;

    let reported = symptom_dates(symptoms)?;
    let same_day = dates.iter().map(|d| Value::Bool(reported.contains(d))).collect();
    let next_day = dates
        .iter()
        .map(|d| Value::Bool(d.succ_opt().is_some_and(|n| reported.contains(&n))))
        .collect();
    eating.add_column(SYMPTOM_SAME_DAY, same_day)?;
    eating.add_column(SYMPTOM_NEXT_DAY, next_day)?;

    let mapping = daytime_mapping(symptoms)?;
    let groups = aggregate_symptoms(symptoms, &mapping)?;
    debug!(groups = groups.len(), mapped_slots = mapping.len(), "symptoms aggregated");

    // Left join on (date, daytime): unmatched rows get nulls.
    let matches: Vec<Option<&SymptomAggregate>> = eating
        .column(DAYTIME)?
        .zip(&dates)
        .map(|(daytime, date)| {
            daytime
                .as_str()
                .and_then(Daytime::from_db_str)
                .and_then(|dt| groups.get(&(*date, dt)))
        })
        .collect();

    let labels = matches
        .iter()
        .map(|m| m.map_or(Value::Null, |a| Value::Text(a.symptoms())))
        .collect();
    let avg = matches
        .iter()
        .map(|m| m.and_then(SymptomAggregate::avg_severity).into())
        .collect();
    eating.add_column(SYMPTOMS, labels)?;
    eating.add_column(AVG_SEVERITY, avg)?;

    Ok(eating)
}

/// No columns are added; kept so both tables go through the same stage.
fn add_columns_to_symptoms(symptoms: Table) -> Table {
    symptoms
}
