//! Partition sessions into buckets (weekday, month, year, stakes, location,
//! tag) and run the aggregation primitives on each bucket independently.

use crate::core::calculator::aggregate;
use crate::models::{Location, Session, Stakes};
use chrono::{Datelike, Month, Weekday};
use std::cmp::Ordering;
use std::collections::BTreeMap;

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn month_names() -> impl Iterator<Item = &'static str> {
    (1u8..=12).filter_map(|m| Month::try_from(m).ok().map(|m| m.name()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Weekday,
    Month,
    Year,
    Stakes,
    Location,
    Tag,
}

impl GroupBy {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekday" | "day" | "dow" => Some(Self::Weekday),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            "stakes" => Some(Self::Stakes),
            "location" | "loc" => Some(Self::Location),
            "tag" | "tags" => Some(Self::Tag),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Weekday => "Weekday",
            GroupBy::Month => "Month",
            GroupBy::Year => "Year",
            GroupBy::Stakes => "Stakes",
            GroupBy::Location => "Location",
            GroupBy::Tag => "Tag",
        }
    }

    /// Bucket key of a session, `None` when it does not belong to any
    /// bucket (tournaments have no stakes, untagged sessions have no tag).
    pub fn key_of(&self, s: &Session) -> Option<String> {
        match self {
            GroupBy::Weekday => Some(weekday_name(s.date.weekday()).to_string()),
            GroupBy::Month => Month::try_from(s.date.month() as u8)
                .ok()
                .map(|m| m.name().to_string()),
            GroupBy::Year => Some(s.date.year().to_string()),
            GroupBy::Stakes => {
                let st = s.stakes.trim();
                if s.is_tournament() || st.is_empty() {
                    None
                } else {
                    Some(st.to_string())
                }
            }
            GroupBy::Location => {
                let name = s.location.name.trim();
                if name.is_empty() {
                    Some(Location::unknown().name)
                } else {
                    Some(name.to_string())
                }
            }
            GroupBy::Tag => s.first_tag().map(str::to_string),
        }
    }

    /// Keys that are always present, even without sessions.
    fn fixed_keys(&self) -> Vec<String> {
        match self {
            GroupBy::Weekday => WEEKDAYS
                .iter()
                .map(|w| weekday_name(*w).to_string())
                .collect(),
            GroupBy::Month => month_names().map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }

    fn order(&self, a: &str, b: &str) -> Ordering {
        match self {
            GroupBy::Year => match (a.parse::<i32>(), b.parse::<i32>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => a.cmp(b),
            },
            GroupBy::Stakes => {
                let ka = Stakes::big_blind_of(a);
                let kb = Stakes::big_blind_of(b);
                match (ka, kb) {
                    (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => a.cmp(b),
                }
            }
            _ => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
        }
    }
}

/// Sessions sharing one key.
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    pub key: String,
    pub sessions: Vec<&'a Session>,
}

/// Numbers shown for one bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketStats {
    pub key: String,
    pub sessions: usize,
    pub profit: i64,
    pub hourly_rate: i64,
    pub minutes_played: i64,
    pub win_ratio: f64,
    /// Only computed when grouping by stakes.
    pub bb_per_hour: Option<f64>,
}

impl BucketStats {
    pub fn is_empty(&self) -> bool {
        self.sessions == 0
    }
}

/// Partition in canonical bucket order.
pub fn partition<'a>(sessions: &[&'a Session], by: GroupBy) -> Vec<Bucket<'a>> {
    let mut map: BTreeMap<String, Vec<&'a Session>> = BTreeMap::new();

    for key in by.fixed_keys() {
        map.entry(key).or_default();
    }

    for s in sessions {
        if let Some(key) = by.key_of(s) {
            map.entry(key).or_default().push(*s);
        }
    }

    let mut buckets: Vec<Bucket<'a>> = map
        .into_iter()
        .map(|(key, sessions)| Bucket { key, sessions })
        .collect();

    match by {
        GroupBy::Weekday | GroupBy::Month => {
            let fixed = by.fixed_keys();
            buckets.sort_by_key(|b| fixed.iter().position(|k| *k == b.key));
        }
        _ => buckets.sort_by(|a, b| by.order(&a.key, &b.key)),
    }

    buckets
}

pub fn bucket_stats(bucket: &Bucket<'_>, by: GroupBy) -> BucketStats {
    let sessions = &bucket.sessions;
    BucketStats {
        key: bucket.key.clone(),
        sessions: sessions.len(),
        profit: aggregate::total_profit(sessions),
        hourly_rate: aggregate::hourly_rate(sessions),
        minutes_played: aggregate::minutes_played(sessions),
        win_ratio: aggregate::win_ratio(sessions),
        bb_per_hour: (by == GroupBy::Stakes).then(|| aggregate::bb_per_hour(sessions, &bucket.key)),
    }
}

pub fn group_stats(sessions: &[&Session], by: GroupBy) -> Vec<BucketStats> {
    partition(sessions, by)
        .iter()
        .map(|b| bucket_stats(b, by))
        .collect()
}

/// `(key, hourly rate)` pairs feeding the comparison queries.
pub fn hourly_by(sessions: &[&Session], by: GroupBy) -> Vec<(String, i64)> {
    group_stats(sessions, by)
        .into_iter()
        .map(|b| (b.key, b.hourly_rate))
        .collect()
}
