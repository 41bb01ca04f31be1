mod common;

use besseresser::config::PipelineConfig;
use besseresser::core::enrich::enrich;
use besseresser::core::filter::{
    filter_by_date_range, filter_by_selectors, parse_selectors, selector_masks,
};
use besseresser::errors::AppError;
use besseresser::models::selector::{Selector, Severity};
use besseresser::table::{Mask, Table, Value};
use chrono::NaiveDate;
use common::{col, date, text};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Enriched view over three days:
/// - 01-01 BREAKFAST (sev 6), LUNCH, DINNER (sev 5.9 via 5.8/6.0)
/// - 01-02 BREAKFAST (sev 7)
/// - 01-04 LUNCH (no symptoms at all that day)
fn view() -> Table {
    let eating = Table::from_rows(
        ["account_id", "date", "meal_id", "daytime", "displayname", "ingredient_id"],
        vec![
            vec![Value::Int(1), date("2024-01-01"), Value::Int(1), text("BREAKFAST"), text("Brot"), Value::Int(1)],
            vec![Value::Int(1), date("2024-01-01"), Value::Int(2), text("LUNCH"), text("Reis"), Value::Int(2)],
            vec![Value::Int(1), date("2024-01-01"), Value::Int(3), text("DINNER"), text("Suppe"), Value::Int(3)],
            vec![Value::Int(1), date("2024-01-02"), Value::Int(4), text("BREAKFAST"), text("Ei"), Value::Int(4)],
            vec![Value::Int(1), date("2024-01-04"), Value::Int(5), text("LUNCH"), text("Salat"), Value::Int(5)],
        ],
    )
    .unwrap();

    let symptoms = Table::from_rows(
        ["account_id", "date", "time", "symptom", "severity"],
        vec![
            vec![Value::Int(1), date("2024-01-01"), text("AFTER_BREAKFAST"), text("-"), Value::Int(6)],
            vec![Value::Int(1), date("2024-01-01"), text("AFTER_DINNER"), text("-"), Value::Real(5.8)],
            vec![Value::Int(1), date("2024-01-01"), text("AFTER_DINNER"), text("-"), Value::Real(6.0)],
            vec![Value::Int(1), date("2024-01-02"), text("AFTER_BREAKFAST"), text("-"), Value::Int(7)],
        ],
    )
    .unwrap();

    enrich(eating, symptoms).unwrap().0
}

#[test]
fn test_inactive_selectors_return_identical_view() {
    let v = view();
    assert_eq!(filter_by_selectors(&v, None, None, None).unwrap(), v);
    assert_eq!(
        filter_by_selectors(&v, Some(Selector::All), None, None).unwrap(),
        v
    );
    assert_eq!(
        filter_by_selectors(&v, Some(Selector::All), None, Some(Severity::new(0).unwrap())).unwrap(),
        v
    );
}

#[test]
fn test_every_mask_matches_row_count() {
    let v = view();
    let meals = [None, Some(Selector::All), Some(Selector::Option1), Some(Selector::Option2), Some(Selector::Option3)];
    let severities = [None, Some(0), Some(1), Some(6), Some(10)];

    for meal in meals {
        for symptom in meals {
            for sev in severities {
                let sev = sev.map(|s| Severity::new(s).unwrap());
                let masks = selector_masks(&v, meal, symptom, sev).unwrap();
                assert_eq!(masks.len(), 3);
                assert!(masks.iter().all(|m| m.len() == v.len()));

                // every surviving row is one of the original rows, in order
                let out = filter_by_selectors(&v, meal, symptom, sev).unwrap();
                let ids = col(&out, "meal_id");
                let all_ids = col(&v, "meal_id");
                let mut cursor = all_ids.iter();
                for id in &ids {
                    assert!(cursor.any(|x| x == id), "row order changed: {ids:?}");
                }
            }
        }
    }
}

#[test]
fn test_meal_selector_picks_one_meal_by_position() {
    let v = view();
    let pick = |s| col(&filter_by_selectors(&v, Some(s), None, None).unwrap(), "meal_id");

    assert_eq!(pick(Selector::Option1), vec![Value::Int(1), Value::Int(4)]);
    assert_eq!(pick(Selector::Option2), vec![Value::Int(2), Value::Int(5)]);
    assert_eq!(pick(Selector::Option3), vec![Value::Int(3)]);
}

#[test]
fn test_symptom_selector_semantics() {
    let v = view();
    let pick = |s| col(&filter_by_selectors(&v, None, Some(s), None).unwrap(), "meal_id");

    // both same-day values
    assert_eq!(pick(Selector::All).len(), 5);
    // days without a report
    assert_eq!(pick(Selector::Option1), vec![Value::Int(5)]);
    // days with a report
    assert_eq!(
        pick(Selector::Option2),
        vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
    );
    // report on the following day: only 01-01 → 01-02
    assert_eq!(
        pick(Selector::Option3),
        vec![Value::Int(1), Value::Int(2), Value::Int(3)]
    );
}

#[test]
fn test_severity_threshold_boundary() {
    let v = view();
    let sev = |n| {
        col(
            &filter_by_selectors(&v, None, None, Some(Severity::new(n).unwrap())).unwrap(),
            "meal_id",
        )
    };

    // 6.0 and 7.0 pass; 5.9 and rows without symptoms do not
    assert_eq!(sev(6), vec![Value::Int(1), Value::Int(4)]);
    assert_eq!(sev(5), vec![Value::Int(1), Value::Int(3), Value::Int(4)]);
    assert_eq!(sev(7), vec![Value::Int(4)]);
    assert!(sev(8).is_empty());
}

#[test]
fn test_selectors_combine_with_and() {
    let v = view();
    let out = filter_by_selectors(
        &v,
        Some(Selector::Option1),
        Some(Selector::Option3),
        Some(Severity::new(6).unwrap()),
    )
    .unwrap();
    assert_eq!(col(&out, "meal_id"), vec![Value::Int(1)]);
}

#[test]
fn test_mask_length_mismatch_is_an_error() {
    let err = Mask::conjunction(3, &[Mask::all(3), Mask::all(2)]).unwrap_err();
    assert!(matches!(err, AppError::IndexMismatch { expected: 3, actual: 2 }), "got {err:?}");

    let v = view();
    let err = v.select(&Mask::all(v.len() + 1)).unwrap_err();
    assert!(matches!(err, AppError::IndexMismatch { .. }), "got {err:?}");
}

#[test]
fn test_date_range_is_inclusive() {
    let v = view();
    let cfg = PipelineConfig::default();

    let out = filter_by_date_range(&v, d("2024-01-01"), d("2024-01-02"), &cfg).unwrap();
    assert_eq!(out.len(), 4);

    let out = filter_by_date_range(&v, d("2024-01-02"), d("2024-01-04"), &cfg).unwrap();
    assert_eq!(col(&out, "meal_id"), vec![Value::Int(4), Value::Int(5)]);

    let out = filter_by_date_range(&v, d("2024-01-04"), d("2024-01-01"), &cfg).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_date_range_finds_datum_column() {
    let cfg = PipelineConfig::default();
    let t = Table::from_rows(
        ["Datum", "wert"],
        vec![
            vec![text("2024-05-01"), Value::Int(1)],
            vec![text("2024-05-03"), Value::Int(2)],
        ],
    )
    .unwrap();

    let out = filter_by_date_range(&t, d("2024-05-02"), d("2024-05-31"), &cfg).unwrap();
    assert_eq!(col(&out, "wert"), vec![Value::Int(2)]);
}

#[test]
fn test_date_range_without_date_column_is_schema_mismatch() {
    let cfg = PipelineConfig::default();
    let t = Table::from_rows(["day"], vec![vec![text("2024-05-01")]]).unwrap();
    let err = filter_by_date_range(&t, d("2024-05-01"), d("2024-05-01"), &cfg).unwrap_err();
    assert!(matches!(err, AppError::SchemaMismatch(_)), "got {err:?}");
}

#[test]
fn test_selector_parsing() {
    let cfg = PipelineConfig::default();

    let (meal, symptom, sev) = parse_selectors(Some("option_2"), Some("none"), Some(6), &cfg).unwrap();
    assert_eq!(meal, Some(Selector::Option2));
    assert_eq!(symptom, None);
    assert_eq!(sev.map(|s| s.get()), Some(6));

    let (meal, symptom, sev) = parse_selectors(None, Some("ALL"), None, &cfg).unwrap();
    assert_eq!((meal, symptom, sev), (None, Some(Selector::All), None));
}

#[test]
fn test_bad_selectors_are_invalid_input() {
    let cfg = PipelineConfig::default();

    for (meal, symptom, sev) in [
        (Some("OPTION_4"), None, None),
        (None, Some("breakfast"), None),
        (None, None, Some(11)),
        (None, None, Some(-1)),
    ] {
        let err = parse_selectors(meal, symptom, sev, &cfg).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)), "got {err:?}");
    }
}
