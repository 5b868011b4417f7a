//! Settlement of staked tournament entries.
//!
//! A staker buying `percentage` of the action pays that share of the
//! buy-ins, multiplied by the markup, and is owed the same share of the
//! cash-out.

use crate::models::{Session, Staker};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StakerSummary {
    pub name: String,
    pub sessions: usize,
    /// Paid by the staker up front
    pub buy_in_covered: i64,
    /// Owed to the staker from cash-outs
    pub amount_owed: i64,
}

impl StakerSummary {
    /// What the staker made or lost on the deal.
    pub fn net(&self) -> i64 {
        self.amount_owed - self.buy_in_covered
    }
}

pub fn buy_in_covered(session: &Session, staker: &Staker) -> i64 {
    let markup = staker.markup.unwrap_or(1.0);
    (session.total_buy_in() as f64 * staker.percentage * markup).round() as i64
}

pub fn amount_owed(session: &Session, staker: &Staker) -> i64 {
    (session.cash_out as f64 * staker.percentage).round() as i64
}

fn stakers(session: &Session) -> &[Staker] {
    session
        .tournament
        .as_ref()
        .map(|t| t.stakers.as_slice())
        .unwrap_or(&[])
}

/// Profit the player keeps once stakers are paid.
pub fn player_profit(session: &Session) -> i64 {
    stakers(session).iter().fold(session.profit, |p, st| {
        p - amount_owed(session, st) + buy_in_covered(session, st)
    })
}

/// Totals per staker name, alphabetical.
pub fn staking_summary(sessions: &[&Session]) -> Vec<StakerSummary> {
    let mut map: BTreeMap<String, StakerSummary> = BTreeMap::new();

    for s in sessions {
        for st in stakers(s) {
            let entry = map
                .entry(st.name.trim().to_string())
                .or_insert_with(|| StakerSummary {
                    name: st.name.trim().to_string(),
                    ..Default::default()
                });
            entry.sessions += 1;
            entry.buy_in_covered += buy_in_covered(s, st);
            entry.amount_owed += amount_owed(s, st);
        }
    }

    map.into_values().collect()
}
