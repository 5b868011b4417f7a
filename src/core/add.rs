use crate::errors::{AppError, AppResult};
use crate::models::{Bankroll, Location, Session, Snapshot, Transaction};
use crate::store::RecordStore;
use crate::store::log::ttlog;
use crate::ui::messages::warning;

/// High-level business logic for recording new entries.
pub struct AddLogic;

fn bankroll_mut<'a>(snapshot: &'a mut Snapshot, name: &str) -> AppResult<&'a mut Bankroll> {
    snapshot
        .bankrolls
        .iter_mut()
        .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| AppError::UnknownBankroll(name.to_string()))
}

pub(crate) fn log_quietly(store: &RecordStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&store.dir, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}

impl AddLogic {
    /// Validate and store a session in the default ledger or a named bankroll.
    pub fn add_session(
        store: &RecordStore,
        snapshot: &mut Snapshot,
        session: Session,
        bankroll: Option<&str>,
    ) -> AppResult<()> {
        let problems = session.validate();
        if !problems.is_empty() {
            return Err(AppError::InvalidSession(problems.join("; ")));
        }

        let target = session.id.to_string();
        let summary = format!("{} profit {}", session.date, session.profit);

        if !session.location.id.is_nil()
            && snapshot.location_by_name(&session.location.name).is_none()
        {
            snapshot.locations.push(session.location.clone());
        }

        match bankroll {
            Some(name) if !name.eq_ignore_ascii_case("default") => {
                bankroll_mut(snapshot, name)?.sessions.push(session)
            }
            _ => snapshot.sessions.push(session),
        }

        store.save(snapshot)?;
        log_quietly(store, "add", &target, &summary);
        Ok(())
    }

    pub fn add_transaction(
        store: &RecordStore,
        snapshot: &mut Snapshot,
        mut txn: Transaction,
        bankroll: Option<&str>,
    ) -> AppResult<()> {
        let target = txn.id.to_string();
        let summary = format!("{} {} {}", txn.date, txn.kind.as_str(), txn.amount);

        match bankroll {
            Some(name) if !name.eq_ignore_ascii_case("default") => {
                let b = bankroll_mut(snapshot, name)?;
                txn.bankroll = Some(b.id);
                b.transactions.push(txn);
            }
            _ => snapshot.transactions.push(txn),
        }

        store.save(snapshot)?;
        log_quietly(store, "txn", &target, &summary);
        Ok(())
    }

    /// Catalogue entry for `name`, or a new unsaved one. `add_session`
    /// stores new entries once the session is accepted.
    pub fn resolve_location(snapshot: &Snapshot, name: &str) -> AppResult<Location> {
        if name.trim().is_empty() {
            return Err(AppError::UnknownLocation("empty name".into()));
        }

        Ok(snapshot
            .location_by_name(name)
            .cloned()
            .unwrap_or_else(|| Location::new(name)))
    }

    /// Add a location, or return the existing one with the same name.
    pub fn add_location(
        store: &RecordStore,
        snapshot: &mut Snapshot,
        name: &str,
    ) -> AppResult<Location> {
        if name.trim().is_empty() {
            return Err(AppError::UnknownLocation("empty name".into()));
        }

        if let Some(existing) = snapshot.location_by_name(name) {
            return Ok(existing.clone());
        }

        let loc = Location::new(name);
        snapshot.locations.push(loc.clone());
        store.save(snapshot)?;
        log_quietly(store, "location", &loc.name, "Location added");
        Ok(loc)
    }

    pub fn add_bankroll(
        store: &RecordStore,
        snapshot: &mut Snapshot,
        name: &str,
    ) -> AppResult<Bankroll> {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("default") || name.eq_ignore_ascii_case("all")
        {
            return Err(AppError::UnknownBankroll(format!(
                "'{name}' is reserved or empty"
            )));
        }

        if let Some(existing) = snapshot.bankroll_by_name(name) {
            return Ok(existing.clone());
        }

        let b = Bankroll::new(name);
        snapshot.bankrolls.push(b.clone());
        store.save(snapshot)?;
        log_quietly(store, "bankroll", &b.name, "Bankroll added");
        Ok(b)
    }
}
