//! SQL text for the read queries.
//!
//! Only the (validated) schema name and fixed vocabulary are spliced into the
//! text; the account id and any label always travel as bound parameters.

use crate::config::PipelineConfig;
use crate::models::daytime::Daytime;
use crate::models::time_slot::TimeSlot;

/// `CASE` expression ranking `column` by a fixed vocabulary.
fn rank_case<'a>(
    column: &str,
    ranks: impl IntoIterator<Item = (&'a str, u8)>,
    other: u8,
) -> String {
    let mut out = String::from("CASE");
    for (name, rank) in ranks {
        out.push_str(&format!("\n            WHEN {column} = '{name}' THEN {rank}"));
    }
    out.push_str(&format!("\n            ELSE {other}\n        END"));
    out
}

/// One row per ingredient line of every meal of the account (`?1`).
/// Meals without ingredients survive the left joins with null ingredient
/// columns; `meal_id` is taken from `meal` so it is never null.
pub fn eating_query(cfg: &PipelineConfig) -> String {
    let daytime_rank = rank_case(
        "m.daytime",
        Daytime::ALL.iter().map(|d| (d.to_db_str(), d.rank())),
        4,
    );

    format!(
        "SELECT m.account_id, m.date, m.id AS meal_id, m.daytime, i.displayname, mi.ingredient_id
    FROM {meal} m
        LEFT JOIN {meal_ingredient} mi ON m.id = mi.meal_id
        LEFT JOIN {ingredient} i ON mi.ingredient_id = i.id
    WHERE m.account_id = ?1
    ORDER BY m.date,
        {daytime_rank},
        m.id",
        meal = cfg.table("meal"),
        meal_ingredient = cfg.table("meal_ingredient"),
        ingredient = cfg.table("ingredient"),
    )
}

/// Symptom reports of the account (`?1`), labelled with `?2`.
/// Ties within a date and slot keep the user's entry order (`id`).
pub fn symptoms_query(cfg: &PipelineConfig) -> String {
    let time_rank = rank_case(
        "time",
        TimeSlot::ALL.iter().map(|t| (t.to_db_str(), t.rank())),
        TimeSlot::OTHER_RANK,
    );

    format!(
        "SELECT account_id, date, time, ?2 AS symptom, impairment AS severity
    FROM {symptomreport}
    WHERE account_id = ?1
    ORDER BY date,
        {time_rank},
        id",
        symptomreport = cfg.table("symptomreport"),
    )
}

/// Number of `account` rows with id `?1`.
pub fn account_exists_query(cfg: &PipelineConfig) -> String {
    format!(
        "SELECT COUNT(id) AS n FROM {account} WHERE id = ?1",
        account = cfg.table("account")
    )
}

/// Larger of the meal and symptom-report counts for account `?1`.
pub fn account_has_data_query(cfg: &PipelineConfig) -> String {
    format!(
        "SELECT MAX(n) AS n FROM (
        SELECT COUNT(account_id) AS n FROM {meal} WHERE account_id = ?1
        UNION ALL
        SELECT COUNT(account_id) AS n FROM {symptomreport} WHERE account_id = ?1
    )",
        meal = cfg.table("meal"),
        symptomreport = cfg.table("symptomreport"),
    )
}
