#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use besseresser::config::PipelineConfig;
use besseresser::db::DbPool;
use besseresser::db::schema::create_schema;
use besseresser::table::{Table, Value};
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bes() -> Command {
    cargo_bin_cmd!("besseresser")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_besseresser.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// In-memory database with the fixed schema already created.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    create_schema(&pool.conn, &PipelineConfig::default()).expect("create schema");
    pool
}

pub fn add_account(conn: &Connection, id: i64) {
    conn.execute("INSERT INTO account (id) VALUES (?1)", [id])
        .expect("insert account");
}

/// Insert a meal with one ingredient line per display name. Returns the meal id.
pub fn add_meal(conn: &Connection, account: i64, date: &str, daytime: &str, items: &[&str]) -> i64 {
    conn.execute(
        "INSERT INTO meal (account_id, date, daytime) VALUES (?1, ?2, ?3)",
        params![account, date, daytime],
    )
    .expect("insert meal");
    let meal_id = conn.last_insert_rowid();

    for name in items {
        conn.execute("INSERT INTO ingredient (displayname) VALUES (?1)", [name])
            .expect("insert ingredient");
        let ingredient_id = conn.last_insert_rowid();
        conn.execute(
            "INSERT INTO meal_ingredient (meal_id, ingredient_id) VALUES (?1, ?2)",
            [meal_id, ingredient_id],
        )
        .expect("insert meal_ingredient");
    }

    meal_id
}

pub fn add_symptom(conn: &Connection, account: i64, date: &str, time: &str, impairment: i64) {
    conn.execute(
        "INSERT INTO symptomreport (account_id, date, time, impairment) VALUES (?1, ?2, ?3, ?4)",
        params![account, date, time, impairment],
    )
    .expect("insert symptomreport");
}

/// Two meals on 2024-01-01 and one report after breakfast (severity 6).
pub fn seed_basic(conn: &Connection) {
    add_account(conn, 1);
    add_meal(conn, 1, "2024-01-01", "DINNER", &["1 Scheibe Brot"]);
    add_meal(conn, 1, "2024-01-01", "BREAKFAST", &["200 g Haferflocken"]);
    add_symptom(conn, 1, "2024-01-01", "AFTER_BREAKFAST", 6);
}

/// Create a database file with schema and the basic data set.
pub fn init_db_with_data(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    create_schema(&conn, &PipelineConfig::default()).expect("create schema");
    seed_basic(&conn);
}

/// All cells of one column, cloned.
pub fn col(table: &Table, name: &str) -> Vec<Value> {
    table.column(name).expect("column").cloned().collect()
}

pub fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

pub fn date(s: &str) -> Value {
    Value::Date(chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date"))
}
