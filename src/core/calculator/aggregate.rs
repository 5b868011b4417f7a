//! Aggregation primitives over a list of sessions.
//!
//! Every function here is pure and total: empty input or a zero divisor
//! yields 0 instead of an error.

use crate::models::{BankrollSelector, Session, Snapshot, Stakes, Transaction, TransactionType};

pub fn total_profit(sessions: &[&Session]) -> i64 {
    sessions.iter().map(|s| s.profit).sum()
}

/// Sum of the hour and minute components of every session, kept apart
/// because the hourly-rate divisor treats them differently.
pub fn played_components(sessions: &[&Session]) -> (i64, i64) {
    sessions.iter().fold((0, 0), |(h, m), s| {
        let d = s.duration();
        (h + d.hours, m + d.minutes)
    })
}

pub fn minutes_played(sessions: &[&Session]) -> i64 {
    let (h, m) = played_components(sessions);
    h * 60 + m
}

pub fn hours_played(sessions: &[&Session]) -> f64 {
    let (h, m) = played_components(sessions);
    h as f64 + m as f64 / 60.0
}

/// Shared divisor rule for every hourly figure.
///
/// Below one summed hour the divisor is `minutes / 60`, otherwise
/// `hours + minutes / 60`. Result is truncated toward zero.
pub fn rate_per_hour(amount: i64, total_hours: i64, total_minutes: i64) -> i64 {
    let total_time = total_hours as f64 + total_minutes as f64 / 60.0;
    if total_time == 0.0 {
        return 0;
    }

    if total_hours < 1 {
        (amount as f64 / (total_minutes as f64 / 60.0)) as i64
    } else {
        (amount as f64 / total_time) as i64
    }
}

pub fn hourly_rate(sessions: &[&Session]) -> i64 {
    let (h, m) = played_components(sessions);
    rate_per_hour(total_profit(sessions), h, m)
}

/// Share of sessions with a positive profit, in `0.0..=1.0`.
pub fn win_ratio(sessions: &[&Session]) -> f64 {
    if sessions.is_empty() {
        return 0.0;
    }
    let winners = sessions.iter().filter(|s| s.profit > 0).count();
    winners as f64 / sessions.len() as f64
}

pub fn average_buy_in(sessions: &[&Session]) -> i64 {
    if sessions.is_empty() {
        return 0;
    }
    sessions.iter().map(|s| s.buy_in).sum::<i64>() / sessions.len() as i64
}

pub fn average_profit(sessions: &[&Session]) -> i64 {
    if sessions.is_empty() {
        return 0;
    }
    total_profit(sessions) / sessions.len() as i64
}

pub fn average_session_minutes(sessions: &[&Session]) -> i64 {
    if sessions.is_empty() {
        return 0;
    }
    minutes_played(sessions) / sessions.len() as i64
}

/// Big blinds won at the given stakes; 0 when the stakes do not parse.
pub fn big_blinds_won(sessions: &[&Session], stakes: &str) -> f64 {
    match Stakes::big_blind_of(stakes) {
        Some(bb) => total_profit(sessions) as f64 / bb,
        None => 0.0,
    }
}

/// Big blinds per hour for a stakes bucket.
pub fn bb_per_hour(sessions: &[&Session], stakes: &str) -> f64 {
    let hours = hours_played(sessions);
    if hours == 0.0 {
        return 0.0;
    }
    big_blinds_won(sessions, stakes) / hours
}

pub fn biggest_win(sessions: &[&Session]) -> Option<i64> {
    sessions.iter().map(|s| s.profit).filter(|p| *p > 0).max()
}

pub fn biggest_loss(sessions: &[&Session]) -> Option<i64> {
    sessions.iter().map(|s| s.profit).filter(|p| *p < 0).min()
}

pub fn total_high_hands(sessions: &[&Session]) -> i64 {
    sessions.iter().map(|s| s.high_hand_bonus).sum()
}

/// Session expenses plus expense-type transactions.
pub fn total_expenses(sessions: &[&Session], transactions: &[&Transaction]) -> i64 {
    let in_play: i64 = sessions.iter().map(|s| s.expenses).sum();
    let outside: i64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Expense)
        .map(|t| t.amount)
        .sum();
    in_play + outside
}

pub fn transaction_total(transactions: &[&Transaction]) -> i64 {
    transactions.iter().map(|t| t.signed_amount()).sum()
}

/// Session profit plus every deposit, minus withdrawals and expenses.
pub fn total_bankroll(snapshot: &Snapshot, selector: BankrollSelector) -> i64 {
    let sessions = snapshot.sessions_for(selector);
    let transactions = snapshot.transactions_for(selector);
    total_profit(&sessions) + transaction_total(&transactions)
}
