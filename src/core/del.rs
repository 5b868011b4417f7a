use crate::core::add::log_quietly;
use crate::errors::{AppError, AppResult};
use crate::models::{Session, Snapshot};
use crate::store::RecordStore;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Ids starting with `prefix`, searched in every ledger.
    pub fn matching_ids(snapshot: &Snapshot, prefix: &str) -> Vec<String> {
        let prefix = prefix.trim().to_lowercase();
        snapshot
            .sessions
            .iter()
            .chain(snapshot.bankrolls.iter().flat_map(|b| b.sessions.iter()))
            .map(|s| s.id.to_string())
            .filter(|id| id.starts_with(&prefix))
            .collect()
    }

    /// Remove the single session whose id starts with `prefix`.
    pub fn apply(store: &RecordStore, snapshot: &mut Snapshot, prefix: &str) -> AppResult<Session> {
        let ids = Self::matching_ids(snapshot, prefix);
        let id = match ids.as_slice() {
            [one] => one.clone(),
            [] => return Err(AppError::SessionNotFound(prefix.to_string())),
            _ => {
                return Err(AppError::SessionNotFound(format!(
                    "{prefix} is ambiguous ({} sessions match)",
                    ids.len()
                )));
            }
        };

        let removed = take_session(&mut snapshot.sessions, &id).or_else(|| {
            snapshot
                .bankrolls
                .iter_mut()
                .find_map(|b| take_session(&mut b.sessions, &id))
        });

        let removed = removed.ok_or_else(|| AppError::SessionNotFound(id.clone()))?;

        store.save(snapshot)?;
        log_quietly(
            store,
            "del",
            &id,
            &format!("Session of {} deleted", removed.date),
        );

        Ok(removed)
    }
}

fn take_session(sessions: &mut Vec<Session>, id: &str) -> Option<Session> {
    let pos = sessions.iter().position(|s| s.id.to_string() == id)?;
    Some(sessions.remove(pos))
}
