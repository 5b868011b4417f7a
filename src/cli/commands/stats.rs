use crate::cli::commands::{open_store, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{field, header, info};
use crate::utils::colors::colorize_profit;
use crate::utils::formatting::{
    NO_DATA, format_currency, format_hours, format_percent, format_signed_currency, short_hand,
};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { filter } = cmd {
        let (_, snapshot) = open_store(cfg)?;
        let (selector, session_filter) = resolve_filter(filter, &snapshot)?;
        let d = Core::build_dashboard(&snapshot, selector, &session_filter);
        let cur = cfg.currency;

        header("Bankroll");
        field(
            "Bankroll",
            colorize_profit(d.bankroll_total, &format_currency(d.bankroll_total, cur)),
        );
        field(
            "Transactions",
            format_signed_currency(d.transactions_total, cur),
        );

        if d.sessions == 0 {
            info("No sessions for the selected filters.");
            return Ok(());
        }

        header("Sessions");
        field("Sessions", d.sessions);
        field(
            "Profit",
            colorize_profit(d.profit, &format_signed_currency(d.profit, cur)),
        );
        field("Hourly", format!("{}/hr", format_currency(d.hourly_rate, cur)));
        field("Win ratio", format_percent(d.win_ratio));
        field("Avg buy-in", format_currency(d.average_buy_in, cur));
        field("Avg profit", format_signed_currency(d.average_profit, cur));
        field("Hours played", format_hours(d.minutes_played));
        field("Avg session", format_hours(d.average_session_minutes));
        field(
            "Biggest win",
            d.biggest_win.map(|v| short_hand(v, cur)).unwrap_or_else(|| NO_DATA.to_string()),
        );
        field(
            "Biggest loss",
            d.biggest_loss.map(|v| short_hand(v, cur)).unwrap_or_else(|| NO_DATA.to_string()),
        );
        field("Expenses", format_currency(d.expenses, cur));
        field("High hands", format_currency(d.high_hands, cur));

        let t = &d.tournament;
        if t.count > 0 {
            header("Tournaments");
            field("Entries", t.count);
            field("Profit", format_signed_currency(t.profit, cur));
            field("ITM", format_percent(t.itm_ratio));
            field("ROI", format_percent(t.roi));
            field(
                "Avg finish",
                t.average_finish
                    .map(|f| format!("{:.1}", f))
                    .unwrap_or_else(|| NO_DATA.to_string()),
            );
            field("Buy-ins", format_currency(t.total_buy_ins, cur));
            field("Rebuys", t.total_rebuys);
            field("Bounties", format_currency(t.total_bounties, cur));
        }
    }
    Ok(())
}
