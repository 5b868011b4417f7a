use crate::core::calculator::filter::SessionFilter;
use crate::core::calculator::{aggregate, tournament};
use crate::models::{BankrollSelector, Dashboard, Session, Snapshot};

pub struct Core;

impl Core {
    /// Selected bankroll's sessions with the filter applied.
    pub fn select<'a>(
        snapshot: &'a Snapshot,
        selector: BankrollSelector,
        filter: &SessionFilter,
    ) -> Vec<&'a Session> {
        filter.apply(&snapshot.sessions_for(selector))
    }

    pub fn build_dashboard(
        snapshot: &Snapshot,
        selector: BankrollSelector,
        filter: &SessionFilter,
    ) -> Dashboard {
        let sessions = Self::select(snapshot, selector, filter);
        let transactions: Vec<_> = snapshot
            .transactions_for(selector)
            .into_iter()
            .filter(|t| filter.accepts_date(t.date))
            .collect();

        Dashboard {
            sessions: sessions.len(),
            bankroll_total: aggregate::total_bankroll(snapshot, selector),
            profit: aggregate::total_profit(&sessions),
            hourly_rate: aggregate::hourly_rate(&sessions),
            win_ratio: aggregate::win_ratio(&sessions),
            average_buy_in: aggregate::average_buy_in(&sessions),
            average_profit: aggregate::average_profit(&sessions),
            minutes_played: aggregate::minutes_played(&sessions),
            average_session_minutes: aggregate::average_session_minutes(&sessions),
            biggest_win: aggregate::biggest_win(&sessions),
            biggest_loss: aggregate::biggest_loss(&sessions),
            expenses: aggregate::total_expenses(&sessions, &transactions),
            high_hands: aggregate::total_high_hands(&sessions),
            transactions_total: aggregate::transaction_total(&transactions),
            tournament: tournament::tournament_stats(&sessions),
        }
    }
}
