//! Column names shared by the pipeline stages.

pub const ACCOUNT_ID: &str = "account_id";
pub const DATE: &str = "date";
pub const MEAL_ID: &str = "meal_id";
pub const DAYTIME: &str = "daytime";
pub const DISPLAYNAME: &str = "displayname";
pub const INGREDIENT_ID: &str = "ingredient_id";

pub const TIME: &str = "time";
pub const SYMPTOM: &str = "symptom";
pub const SEVERITY: &str = "severity";

// Derived by enrichment.
pub const WEEKDAY: &str = "weekday";
pub const DISPLAYNAME_NORMALIZED: &str = "displayname_normalized";
pub const SYMPTOM_SAME_DAY: &str = "symptom_same_day";
pub const SYMPTOM_NEXT_DAY: &str = "symptom_next_day";
pub const SYMPTOMS: &str = "symptoms";
pub const AVG_SEVERITY: &str = "avg_severity";

/// Composite key of a logged meal entry. `ingredient_id` is deliberately not
/// part of it.
pub const EATING_DEDUP_KEY: [&str; 5] = [ACCOUNT_ID, DATE, MEAL_ID, DAYTIME, DISPLAYNAME];
