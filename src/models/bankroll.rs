use super::session::Session;
use super::transaction::Transaction;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named ledger. Records at the snapshot root form the implicit default one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bankroll {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Bankroll {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            sessions: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

/// Which ledger(s) a query reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BankrollSelector {
    #[default]
    All,
    Default,
    Custom(Uuid),
}
