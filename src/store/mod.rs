//! JSON record store: one file per collection inside the data directory.
//! Loads a complete `Snapshot` before any analytics run.

pub mod log;

use crate::errors::{AppError, AppResult};
use crate::models::{Bankroll, Location, Session, Snapshot, Transaction};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSIONS_FILE: &str = "sessions_v2.json";
pub const LOCATIONS_FILE: &str = "locations_v2.json";
pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const BANKROLLS_FILE: &str = "bankrolls.json";

pub struct RecordStore {
    pub dir: PathBuf,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Create the data directory and any missing collection file.
    pub fn init(&self) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        for file in [SESSIONS_FILE, LOCATIONS_FILE, TRANSACTIONS_FILE, BANKROLLS_FILE] {
            let p = self.path(file);
            if !p.exists() {
                fs::write(&p, "[]")?;
            }
        }
        Ok(())
    }

    pub fn load(&self) -> AppResult<Snapshot> {
        Ok(Snapshot {
            sessions: read_collection::<Session>(&self.path(SESSIONS_FILE))?,
            transactions: read_collection::<Transaction>(&self.path(TRANSACTIONS_FILE))?,
            locations: read_collection::<Location>(&self.path(LOCATIONS_FILE))?,
            bankrolls: read_collection::<Bankroll>(&self.path(BANKROLLS_FILE))?,
        })
    }

    pub fn save(&self, snapshot: &Snapshot) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        write_collection(&self.path(SESSIONS_FILE), &snapshot.sessions)?;
        write_collection(&self.path(TRANSACTIONS_FILE), &snapshot.transactions)?;
        write_collection(&self.path(LOCATIONS_FILE), &snapshot.locations)?;
        write_collection(&self.path(BANKROLLS_FILE), &snapshot.bankrolls)?;
        Ok(())
    }
}

/// Missing or empty file → empty collection.
fn read_collection<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|e| {
        AppError::Other(format!("Failed to parse {}: {e}", path.display()))
    })
}

/// Written to a sibling `.tmp` file, then renamed over the target.
fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(items)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
