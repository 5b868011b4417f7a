use crate::core::calculator::tournament::TournamentStats;

/// Headline numbers for the `stats` command.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dashboard {
    pub sessions: usize,
    pub bankroll_total: i64,
    pub profit: i64,
    pub hourly_rate: i64,
    pub win_ratio: f64,
    pub average_buy_in: i64,
    pub average_profit: i64,
    pub minutes_played: i64,
    pub average_session_minutes: i64,
    pub biggest_win: Option<i64>,
    pub biggest_loss: Option<i64>,
    pub expenses: i64,
    pub high_hands: i64,
    pub transactions_total: i64,
    pub tournament: TournamentStats,
}
