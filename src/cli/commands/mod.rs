pub mod add;
pub mod bankroll;
pub mod best;
pub mod chart;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod location;
pub mod log;
pub mod report;
pub mod staking;
pub mod stats;
pub mod txn;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::calculator::filter::SessionFilter;
use crate::errors::{AppError, AppResult};
use crate::models::{BankrollSelector, SessionType, Snapshot};
use crate::store::RecordStore;
use crate::utils::date::parse_range;

/// Store of the configured data directory and its current contents.
pub(crate) fn open_store(cfg: &Config) -> AppResult<(RecordStore, Snapshot)> {
    let store = RecordStore::new(cfg.data_path());
    let snapshot = store.load()?;
    Ok((store, snapshot))
}

pub(crate) fn parse_session_type(s: &str) -> AppResult<SessionType> {
    SessionType::from_code(s).ok_or_else(|| {
        AppError::Other(format!(
            "Unknown session type '{s}'. Use one of: cash, tournament, all"
        ))
    })
}

pub(crate) fn resolve_selector(
    snapshot: &Snapshot,
    bankroll: Option<&str>,
) -> AppResult<BankrollSelector> {
    snapshot
        .selector_for(bankroll)
        .ok_or_else(|| AppError::UnknownBankroll(bankroll.unwrap_or_default().to_string()))
}

/// Turn the shared CLI filter flags into a bankroll selector and a filter.
pub(crate) fn resolve_filter(
    args: &FilterArgs,
    snapshot: &Snapshot,
) -> AppResult<(BankrollSelector, SessionFilter)> {
    let selector = resolve_selector(snapshot, args.bankroll.as_deref())?;

    let range = match &args.period {
        None => None,
        Some(p) if p.eq_ignore_ascii_case("all") => None,
        Some(p) => Some(parse_range(p)?),
    };

    let filter = SessionFilter {
        year: args.year,
        location: args.location.clone(),
        stakes: args.stakes.clone(),
        tag: args.tag.clone(),
        session_type: parse_session_type(&args.session_type)?,
        range,
    };

    Ok((selector, filter))
}
