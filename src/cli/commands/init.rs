use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::DbPool;
use crate::db::schema::create_schema;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database file
///  - the five tables the pipeline reads from
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info(format!("Initializing database: {db_path}"));

    let pool = DbPool::new(&db_path)?;
    create_schema(&pool.conn, &cfg.pipeline()?)?;

    success(format!("Database initialized at {db_path}"));
    Ok(())
}
