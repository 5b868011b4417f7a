use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{Transaction, TransactionType};
use crate::ui::messages::success;
use crate::utils::date::parse_required_date;
use crate::utils::formatting::format_currency;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Txn {
        date,
        kind,
        amount,
        notes,
        tags,
        bankroll,
    } = cmd
    {
        let d = parse_required_date(date)?;
        let k = TransactionType::from_code(kind).ok_or_else(|| {
            AppError::Other(format!(
                "Unknown transaction type '{kind}'. Use one of: deposit, withdrawal, expense"
            ))
        })?;

        if *amount <= 0 {
            return Err(AppError::Other("Transaction amount must be positive".into()));
        }

        let mut txn = Transaction::new(d, k, *amount);
        txn.notes = notes.clone();
        txn.tags = tags.iter().map(|t| t.trim().to_string()).collect();

        let (store, mut snapshot) = open_store(cfg)?;
        AddLogic::add_transaction(&store, &mut snapshot, txn, bankroll.as_deref())?;

        success(format!(
            "{} of {} recorded for {}",
            k.as_str(),
            format_currency(*amount, cfg.currency),
            d
        ));
    }
    Ok(())
}
