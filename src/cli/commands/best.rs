use crate::cli::commands::report::parse_group;
use crate::cli::commands::{open_store, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::compare::compare_buckets;
use crate::core::calculator::grouping::group_stats;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{field, info};
use crate::utils::formatting::{format_currency, format_improvement};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Best { by, filter } = cmd {
        let group = parse_group(by)?;
        let (_, snapshot) = open_store(cfg)?;
        let (selector, session_filter) = resolve_filter(filter, &snapshot)?;
        let sessions = Core::select(&snapshot, selector, &session_filter);

        match compare_buckets(&group_stats(&sessions, group)) {
            None => info(format!(
                "Not enough data to pick a best {}.",
                group.label().to_lowercase()
            )),
            Some(c) => {
                field(
                    format!("Best {}", group.label().to_lowercase()),
                    &c.key,
                );
                field("Hourly", format!("{}/hr", format_currency(c.rate, cfg.currency)));
                match c.improvement {
                    Some(pct) => field("Versus the rest", format_improvement(pct)),
                    None => field("Versus the rest", "no comparison available"),
                }
            }
        }
    }
    Ok(())
}
