use crate::cli::commands::add::short_id;
use crate::cli::commands::{open_store, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::series::chronological;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{colorize_optional, colorize_profit};
use crate::utils::formatting::{format_currency, format_hours};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let (_, snapshot) = open_store(cfg)?;
        let (selector, session_filter) = resolve_filter(filter, &snapshot)?;

        let sessions = chronological(&Core::select(&snapshot, selector, &session_filter));

        if sessions.is_empty() {
            info("No sessions for the selected filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("ID"),
            Column::left("Date"),
            Column::left("Type"),
            Column::left("Stakes"),
            Column::left("Location"),
            Column::right("Played"),
            Column::right("Buy-in"),
            Column::right("Cash-out"),
            Column::right("Profit"),
            Column::left("Tag"),
        ])
        .with_separator(cfg.separator());

        for s in &sessions {
            let id = s.id.to_string();
            let stakes = if s.is_tournament() { "-" } else { s.stakes.as_str() };
            table.add_row(vec![
                short_id(&id).to_string(),
                s.date.to_string(),
                if s.is_tournament() { "MTT" } else { "Cash" }.to_string(),
                colorize_optional(if stakes.is_empty() { "-" } else { stakes }),
                s.location.name.clone(),
                format_hours(s.duration().total_minutes()),
                format_currency(s.total_buy_in(), cfg.currency),
                format_currency(s.cash_out, cfg.currency),
                colorize_profit(s.profit, &format_currency(s.profit, cfg.currency)),
                colorize_optional(s.first_tag().unwrap_or("-")),
            ]);
        }

        print!("{}", table.render());
        println!("{} session(s)", sessions.len());
    }
    Ok(())
}
