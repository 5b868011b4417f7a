use super::bankroll::{Bankroll, BankrollSelector};
use super::location::Location;
use super::session::Session;
use super::transaction::Transaction;

/// Fully materialised view of the record store handed to the analytics.
/// The engine only ever borrows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub sessions: Vec<Session>,
    pub transactions: Vec<Transaction>,
    pub locations: Vec<Location>,
    pub bankrolls: Vec<Bankroll>,
}

impl Snapshot {
    pub fn sessions_for(&self, selector: BankrollSelector) -> Vec<&Session> {
        match selector {
            BankrollSelector::All => self
                .sessions
                .iter()
                .chain(self.bankrolls.iter().flat_map(|b| b.sessions.iter()))
                .collect(),
            BankrollSelector::Default => self.sessions.iter().collect(),
            BankrollSelector::Custom(id) => self
                .bankrolls
                .iter()
                .filter(|b| b.id == id)
                .flat_map(|b| b.sessions.iter())
                .collect(),
        }
    }

    pub fn transactions_for(&self, selector: BankrollSelector) -> Vec<&Transaction> {
        match selector {
            BankrollSelector::All => self
                .transactions
                .iter()
                .chain(self.bankrolls.iter().flat_map(|b| b.transactions.iter()))
                .collect(),
            BankrollSelector::Default => self.transactions.iter().collect(),
            BankrollSelector::Custom(id) => self
                .bankrolls
                .iter()
                .filter(|b| b.id == id)
                .flat_map(|b| b.transactions.iter())
                .collect(),
        }
    }

    pub fn bankroll_by_name(&self, name: &str) -> Option<&Bankroll> {
        self.bankrolls
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.matches_name(name))
    }

    /// Resolve a CLI `--bankroll` value ("all", "default" or a bankroll name).
    pub fn selector_for(&self, name: Option<&str>) -> Option<BankrollSelector> {
        match name.map(|n| n.trim().to_lowercase()) {
            None => Some(BankrollSelector::All),
            Some(n) if n == "all" => Some(BankrollSelector::All),
            Some(n) if n == "default" => Some(BankrollSelector::Default),
            Some(n) => self
                .bankroll_by_name(&n)
                .map(|b| BankrollSelector::Custom(b.id)),
        }
    }
}
