// src/export/model.rs

use crate::models::Session;
use serde::Serialize;

/// Flat row for session export (one line per session in CSV).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SessionExport {
    pub id: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub minutes: i64,
    pub kind: String,
    pub game: String,
    pub stakes: String,
    pub location: String,
    pub buy_in: i64,
    pub cash_out: i64,
    pub expenses: i64,
    pub profit: i64,
    pub high_hand_bonus: i64,
    pub bounties: i64,
    pub rebuys: u32,
    pub entrants: Option<u32>,
    pub finish: Option<u32>,
    pub tags: String,
    pub bankroll: String,
}

impl SessionExport {
    pub fn from_session(s: &Session, bankroll: &str) -> Self {
        let details = s.tournament.as_ref();
        Self {
            id: s.id.to_string(),
            date: s.date.format("%Y-%m-%d").to_string(),
            start: s.start_time.format("%Y-%m-%d %H:%M").to_string(),
            end: s.effective_end().format("%Y-%m-%d %H:%M").to_string(),
            minutes: s.duration().total_minutes(),
            kind: if s.is_tournament() { "tournament" } else { "cash" }.to_string(),
            game: s.game.clone(),
            stakes: s.stakes.clone(),
            location: s.location.name.clone(),
            buy_in: s.buy_in,
            cash_out: s.cash_out,
            expenses: s.expenses,
            profit: s.profit,
            high_hand_bonus: s.high_hand_bonus,
            bounties: s.bounties(),
            rebuys: s.rebuy_count(),
            entrants: details.and_then(|t| t.entrants),
            finish: details.and_then(|t| t.finish),
            tags: s.tags.join("|"),
            bankroll: bankroll.to_string(),
        }
    }
}
