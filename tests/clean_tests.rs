mod common;

use besseresser::core::clean::{clean_eating, clean_symptoms, normalize_column_name};
use besseresser::errors::AppError;
use besseresser::table::{Table, Value};
use common::{col, date, text};

fn eating_row(meal_id: i64, daytime: &str, name: &str, ingredient_id: i64) -> Vec<Value> {
    vec![
        Value::Int(1),
        text("2024-01-01"),
        Value::Int(meal_id),
        text(daytime),
        text(name),
        Value::Int(ingredient_id),
    ]
}

fn eating_table(rows: Vec<Vec<Value>>) -> Table {
    Table::from_rows(
        ["Account ID", "Date", "Meal ID", "Daytime", "Displayname", "Ingredient ID"],
        rows,
    )
    .expect("table")
}

#[test]
fn test_column_names_are_normalized() {
    assert_eq!(normalize_column_name("Meal ID"), "meal_id");
    assert_eq!(normalize_column_name("date"), "date");

    let cleaned = clean_eating(eating_table(vec![])).expect("clean");
    assert_eq!(
        cleaned.columns(),
        ["account_id", "date", "meal_id", "daytime", "displayname", "ingredient_id"]
    );
}

#[test]
fn test_dates_are_parsed() {
    let cleaned = clean_eating(eating_table(vec![eating_row(1, "LUNCH", "Reis", 1)])).unwrap();
    assert_eq!(col(&cleaned, "date"), vec![date("2024-01-01")]);

    let symptoms = Table::from_rows(
        ["date", "time"],
        vec![
            vec![text("2024-01-02 08:30:00"), text("AFTER_BREAKFAST")],
            vec![text("2024-01-03T19:00:00"), text("AFTER_DINNER")],
        ],
    )
    .unwrap();
    let cleaned = clean_symptoms(symptoms).unwrap();
    assert_eq!(
        col(&cleaned, "date"),
        vec![date("2024-01-02"), date("2024-01-03")]
    );
}

#[test]
fn test_unparseable_date_is_malformed_data() {
    let mut row = eating_row(1, "LUNCH", "Reis", 1);
    row[1] = text("01/02/2024");
    let err = clean_eating(eating_table(vec![row])).unwrap_err();
    assert!(matches!(err, AppError::MalformedData(_)), "got {err:?}");

    let symptoms = Table::from_rows(["date"], vec![vec![Value::Null]]).unwrap();
    let err = clean_symptoms(symptoms).unwrap_err();
    assert!(matches!(err, AppError::MalformedData(_)), "got {err:?}");
}

#[test]
fn test_duplicate_meal_entries_are_collapsed() {
    let table = eating_table(vec![
        eating_row(7, "BREAKFAST", "Kaffee", 10),
        eating_row(7, "BREAKFAST", "Kaffee", 10),
        eating_row(7, "BREAKFAST", "Croissant", 11),
    ]);

    let cleaned = clean_eating(table).unwrap();
    assert_eq!(cleaned.len(), 2);
    assert_eq!(col(&cleaned, "displayname"), vec![text("Kaffee"), text("Croissant")]);
    assert_eq!(col(&cleaned, "ingredient_id"), vec![Value::Int(10), Value::Int(11)]);
}

#[test]
fn test_dedup_key_ignores_ingredient_id() {
    // Known quirk: same name, different ingredient → treated as duplicate.
    let table = eating_table(vec![
        eating_row(7, "LUNCH", "Salat", 20),
        eating_row(7, "LUNCH", "Salat", 21),
    ]);

    let cleaned = clean_eating(table).unwrap();
    assert_eq!(col(&cleaned, "ingredient_id"), vec![Value::Int(20)]);
}

#[test]
fn test_dedup_keeps_first_and_preserves_order() {
    let table = eating_table(vec![
        eating_row(1, "BREAKFAST", "Brot", 1),
        eating_row(2, "LUNCH", "Reis", 2),
        eating_row(1, "BREAKFAST", "Brot", 3),
        eating_row(3, "DINNER", "Suppe", 4),
        eating_row(2, "LUNCH", "Reis", 5),
    ]);

    let cleaned = clean_eating(table).unwrap();
    assert_eq!(
        col(&cleaned, "ingredient_id"),
        vec![Value::Int(1), Value::Int(2), Value::Int(4)]
    );
}

#[test]
fn test_same_name_in_different_meals_is_kept() {
    let table = eating_table(vec![
        eating_row(1, "BREAKFAST", "Kaffee", 1),
        eating_row(2, "LUNCH", "Kaffee", 1),
    ]);
    assert_eq!(clean_eating(table).unwrap().len(), 2);
}

#[test]
fn test_missing_key_column_is_schema_mismatch() {
    let table = Table::from_rows(["date"], vec![vec![text("2024-01-01")]]).unwrap();
    let err = clean_eating(table).unwrap_err();
    assert!(matches!(err, AppError::SchemaMismatch(_)), "got {err:?}");
}
