use crate::cli::commands::{open_store, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::staking::staking_summary;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_profit;
use crate::utils::formatting::{format_currency, format_signed_currency};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Staking { filter } = cmd {
        let (_, snapshot) = open_store(cfg)?;
        let (selector, session_filter) = resolve_filter(filter, &snapshot)?;
        let sessions = Core::select(&snapshot, selector, &session_filter);

        let summary = staking_summary(&sessions);
        if summary.is_empty() {
            info("No staked sessions for the selected filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Staker"),
            Column::right("Sessions"),
            Column::right("Paid in"),
            Column::right("Owed"),
            Column::right("Net"),
        ])
        .with_separator(cfg.separator());

        for s in &summary {
            table.add_row(vec![
                s.name.clone(),
                s.sessions.to_string(),
                format_currency(s.buy_in_covered, cfg.currency),
                format_currency(s.amount_owed, cfg.currency),
                colorize_profit(s.net(), &format_signed_currency(s.net(), cfg.currency)),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
