use crate::cli::commands::{apply_filters, load_views};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        account,
        filters,
        format,
        file,
        force,
    } = cmd
    {
        let (views, pipeline) = load_views(account, cfg)?;
        let table = apply_filters(&views.eating, filters, &pipeline)?;
        export_table(&table, *format, Path::new(file), *force)?;
    }
    Ok(())
}
