use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::aggregate::total_bankroll;
use crate::errors::AppResult;
use crate::models::BankrollSelector;
use crate::ui::messages::success;
use crate::utils::colors::colorize_profit;
use crate::utils::formatting::format_currency;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bankroll { add, list } = cmd {
        let (store, mut snapshot) = open_store(cfg)?;

        if let Some(name) = add {
            let b = AddLogic::add_bankroll(&store, &mut snapshot, name)?;
            success(format!("Bankroll '{}' available", b.name));
        }

        if *list || add.is_none() {
            let mut table = Table::new(vec![
                Column::left("Bankroll"),
                Column::right("Sessions"),
                Column::right("Total"),
            ])
            .with_separator(cfg.separator());

            let mut push = |name: &str, sessions: usize, sel: BankrollSelector| {
                let total = total_bankroll(&snapshot, sel);
                table.add_row(vec![
                    name.to_string(),
                    sessions.to_string(),
                    colorize_profit(total, &format_currency(total, cfg.currency)),
                ]);
            };

            push("default", snapshot.sessions.len(), BankrollSelector::Default);
            for b in &snapshot.bankrolls {
                push(&b.name, b.sessions.len(), BankrollSelector::Custom(b.id));
            }

            print!("{}", table.render());
        }
    }
    Ok(())
}
