use crate::core::calculator::aggregate;
use crate::models::Session;

/// Tournament-only figures. Cash sessions in the input are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentStats {
    pub count: usize,
    pub profit: i64,
    /// Entries that cashed, over all entries.
    pub itm_ratio: f64,
    /// Profit over every buy-in and rebuy paid.
    pub roi: f64,
    pub average_finish: Option<f64>,
    pub total_buy_ins: i64,
    pub total_rebuys: u32,
    pub total_bounties: i64,
}

pub fn tournament_stats(sessions: &[&Session]) -> TournamentStats {
    let tournaments: Vec<&Session> = sessions
        .iter()
        .copied()
        .filter(|s| s.is_tournament())
        .collect();

    if tournaments.is_empty() {
        return TournamentStats::default();
    }

    let count = tournaments.len();
    let profit = aggregate::total_profit(&tournaments);
    let total_buy_ins: i64 = tournaments.iter().map(|s| s.total_buy_in()).sum();
    let cashed = tournaments.iter().filter(|s| s.cash_out > 0).count();

    let finishes: Vec<u32> = tournaments
        .iter()
        .filter_map(|s| s.tournament.as_ref().and_then(|t| t.finish))
        .collect();

    let average_finish = if finishes.is_empty() {
        None
    } else {
        Some(finishes.iter().map(|f| *f as f64).sum::<f64>() / finishes.len() as f64)
    };

    TournamentStats {
        count,
        profit,
        itm_ratio: cashed as f64 / count as f64,
        roi: if total_buy_ins == 0 {
            0.0
        } else {
            profit as f64 / total_buy_ins as f64
        },
        average_finish,
        total_buy_ins,
        total_rebuys: tournaments.iter().map(|s| s.rebuy_count()).sum(),
        total_bounties: tournaments.iter().map(|s| s.bounties()).sum(),
    }
}
