//! Schema bootstrap for a local SQLite store.
//!
//! Only `init` and test fixtures call this; the pipeline itself is read-only.

use crate::config::PipelineConfig;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the five fixed tables (and their lookup indexes) if missing.
pub fn create_schema(conn: &Connection, cfg: &PipelineConfig) -> AppResult<()> {
    let s = &cfg.schema;
    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {s}.account (
            id          INTEGER PRIMARY KEY
        );

        CREATE TABLE IF NOT EXISTS {s}.meal (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            account_id  INTEGER NOT NULL REFERENCES account(id),
            date        TEXT NOT NULL,
            daytime     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS {s}.ingredient (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            displayname TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS {s}.meal_ingredient (
            meal_id       INTEGER NOT NULL REFERENCES meal(id),
            ingredient_id INTEGER NOT NULL REFERENCES ingredient(id)
        );

        CREATE TABLE IF NOT EXISTS {s}.symptomreport (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            account_id  INTEGER NOT NULL REFERENCES account(id),
            date        TEXT NOT NULL,
            time        TEXT NOT NULL,
            impairment  INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS {s}.idx_meal_account_date ON meal(account_id, date);
        CREATE INDEX IF NOT EXISTS {s}.idx_symptomreport_account_date ON symptomreport(account_id, date);
        "#
    ))?;
    Ok(())
}
