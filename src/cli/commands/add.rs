use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Location, Session, Staker, Stakes, TournamentDetails, TournamentSize, TournamentSpeed,
};
use crate::ui::messages::success;
use crate::utils::date::parse_required_date;
use crate::utils::formatting::format_signed_currency;
use crate::utils::time::{parse_required_time, session_bounds};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        end_date,
        buy_in,
        cash_out,
        expenses,
        location,
        stakes,
        game,
        tags,
        break_minutes,
        high_hand,
        bounties,
        notes,
        tournament,
        rebuys,
        entrants,
        finish,
        size,
        speed,
        stakers,
        bankroll,
    } = cmd
    {
        let (store, mut snapshot) = open_store(cfg)?;

        let d = parse_required_date(date)?;
        let start_t = parse_required_time(start)?;
        let end_t = parse_required_time(end)?;
        let end_d = end_date.as_deref().map(parse_required_date).transpose()?;
        let (start_dt, end_dt) = session_bounds(d, start_t, end_t, end_d);

        let loc = match location {
            Some(name) => AddLogic::resolve_location(&snapshot, name)?,
            None => Location::unknown(),
        };

        let mut session = if *tournament {
            let details = TournamentDetails {
                rebuy_count: *rebuys,
                entrants: *entrants,
                finish: *finish,
                size: match size {
                    Some(s) => TournamentSize::from_code(s)
                        .ok_or_else(|| AppError::InvalidSession(format!("unknown size '{s}'")))?,
                    None => TournamentSize::default(),
                },
                speed: match speed {
                    Some(s) => TournamentSpeed::from_code(s)
                        .ok_or_else(|| AppError::InvalidSession(format!("unknown speed '{s}'")))?,
                    None => TournamentSpeed::default(),
                },
                stakers: stakers
                    .iter()
                    .map(|s| Staker::parse(s).ok_or_else(|| AppError::InvalidStaker(s.clone())))
                    .collect::<AppResult<Vec<_>>>()?,
            };
            Session::tournament(d, start_dt, end_dt, *buy_in, *cash_out, details, loc)
        } else {
            let st = stakes.clone().unwrap_or_default();
            if !st.trim().is_empty() && Stakes::parse(&st).is_none() {
                return Err(AppError::InvalidStakes(st));
            }
            Session::cash(d, start_dt, end_dt, *buy_in, *cash_out, 0, st.trim(), loc)
        };

        if end_d.is_some_and(|e| e > d) {
            session.multi_day_end = Some(end_dt);
        }

        session.expenses = *expenses;
        session.high_hand_bonus = *high_hand;
        session.bounties = *bounties;
        session.break_minutes = *break_minutes;
        session.game = game.clone().unwrap_or_else(|| cfg.default_game.clone());
        session.tags = tags.iter().map(|t| t.trim().to_string()).collect();
        session.notes = notes.clone();
        session.profit = session.computed_profit();

        let id = session.id;
        let profit = session.profit;
        AddLogic::add_session(&store, &mut snapshot, session, bankroll.as_deref())?;

        success(format!(
            "Session {} recorded for {} ({})",
            short_id(&id.to_string()),
            d,
            format_signed_currency(profit, cfg.currency)
        ));
    }

    Ok(())
}

/// First block of a uuid, enough for `del` to find it.
pub(crate) fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
