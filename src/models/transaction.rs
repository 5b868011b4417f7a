use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Expense,
}

impl TransactionType {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "deposit" | "d" => Some(Self::Deposit),
            "withdrawal" | "withdraw" | "w" => Some(Self::Withdrawal),
            "expense" | "e" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Expense => "expense",
        }
    }
}

/// Money moved in or out of a bankroll outside of play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Always non-negative; the sign comes from `kind`.
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bankroll: Option<Uuid>,
}

impl Transaction {
    pub fn new(date: NaiveDate, kind: TransactionType, amount: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            amount: amount.abs(),
            notes: None,
            tags: Vec::new(),
            bankroll: None,
        }
    }

    /// Deposits add to the bankroll, withdrawals and expenses subtract.
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            TransactionType::Deposit => self.amount,
            TransactionType::Withdrawal | TransactionType::Expense => -self.amount,
        }
    }
}
