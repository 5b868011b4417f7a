//! Cumulative profit series for line charts.
//!
//! The series is rebuilt from scratch for every combination of range,
//! bankroll and session type; nothing is cached between calls.

use crate::models::{BankrollSelector, Session, SessionType, Snapshot};
use chrono::{Datelike, Days, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartRange {
    #[default]
    All,
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    YearToDate,
    Custom(NaiveDate, NaiveDate),
}

impl ChartRange {
    /// Short codes used by the CLI (`1w`, `1m`, `3m`, `6m`, `1y`, `ytd`, `all`).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "1w" => Some(Self::OneWeek),
            "1m" => Some(Self::OneMonth),
            "3m" => Some(Self::ThreeMonths),
            "6m" => Some(Self::SixMonths),
            "1y" => Some(Self::OneYear),
            "ytd" => Some(Self::YearToDate),
            _ => None,
        }
    }

    /// First day included, relative to `today`. `None` means unbounded.
    pub fn start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            ChartRange::All => None,
            ChartRange::OneWeek => today.checked_sub_days(Days::new(7)),
            ChartRange::OneMonth => today.checked_sub_months(Months::new(1)),
            ChartRange::ThreeMonths => today.checked_sub_months(Months::new(3)),
            ChartRange::SixMonths => today.checked_sub_months(Months::new(6)),
            ChartRange::OneYear => today.checked_sub_months(Months::new(12)),
            ChartRange::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            ChartRange::Custom(start, _) => Some(*start),
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        if let ChartRange::Custom(start, end) = self {
            return *start <= date && date <= *end;
        }
        self.start(today).is_none_or(|start| date >= start)
    }
}

/// Sessions ordered by date, ties broken by start time.
pub fn chronological<'a>(sessions: &[&'a Session]) -> Vec<&'a Session> {
    let mut sorted = sessions.to_vec();
    sorted.sort_by_key(|s| (s.date, s.start_time));
    sorted
}

/// `(date, running total)` for each session, oldest first.
pub fn cumulative_points(sessions: &[&Session]) -> Vec<(NaiveDate, i64)> {
    let mut running = 0;
    chronological(sessions)
        .into_iter()
        .map(|s| {
            running += s.profit;
            (s.date, running)
        })
        .collect()
}

/// Running sum of profit, optionally led by a `0` baseline.
pub fn cumulative(sessions: &[&Session], seed_baseline: bool) -> Vec<i64> {
    let mut out = Vec::with_capacity(sessions.len() + 1);
    if seed_baseline {
        out.push(0);
    }
    out.extend(cumulative_points(sessions).into_iter().map(|(_, v)| v));
    out
}

/// Series restricted to a range, a bankroll and a session type.
pub fn cumulative_series(
    snapshot: &Snapshot,
    range: ChartRange,
    selector: BankrollSelector,
    session_type: SessionType,
    seed_baseline: bool,
    today: NaiveDate,
) -> Vec<i64> {
    let selected: Vec<&Session> = snapshot
        .sessions_for(selector)
        .into_iter()
        .filter(|s| session_type.accepts(s) && range.contains(s.date, today))
        .collect();

    cumulative(&selected, seed_baseline)
}
