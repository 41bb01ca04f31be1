use crate::cli::commands::{apply_filters, load_views};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::filter_by_date_range;
use crate::errors::AppResult;
use crate::utils::date::resolve_range;
use crate::utils::table::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        account,
        filters,
        symptoms,
    } = cmd
    {
        let (views, pipeline) = load_views(account, cfg)?;

        let table = if *symptoms {
            match resolve_range(filters.from.as_deref(), filters.to.as_deref())? {
                Some((start, end)) => filter_by_date_range(&views.symptoms, start, end, &pipeline)?,
                None => views.symptoms,
            }
        } else {
            apply_filters(&views.eating, filters, &pipeline)?
        };

        if table.is_empty() {
            println!("No rows for account {}.", account.trim());
            return Ok(());
        }

        print!("{}", render(&table));
        println!("{} row(s)", table.len());
    }
    Ok(())
}
