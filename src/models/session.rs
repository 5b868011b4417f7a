use super::location::Location;
use super::stakes::Stakes;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cash game or tournament, used by filters and the CLI `--type` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    All,
    Cash,
    Tournament,
}

impl SessionType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "cash" | "c" => Some(Self::Cash),
            "tournament" | "tourney" | "mtt" | "t" => Some(Self::Tournament),
            _ => None,
        }
    }

    pub fn accepts(&self, session: &Session) -> bool {
        match self {
            SessionType::All => true,
            SessionType::Cash => !session.is_tournament(),
            SessionType::Tournament => session.is_tournament(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl TournamentSize {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" => Some(Self::Small),
            "medium" | "m" => Some(Self::Medium),
            "large" | "l" => Some(Self::Large),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TournamentSpeed {
    #[default]
    Standard,
    Turbo,
    HyperTurbo,
}

impl TournamentSpeed {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "turbo" => Some(Self::Turbo),
            "hyper-turbo" | "hyper" | "hyperturbo" => Some(Self::HyperTurbo),
            _ => None,
        }
    }
}

/// A backer owning part of a tournament entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staker {
    pub name: String,
    /// Share of the action, 0.0 ..= 1.0
    pub percentage: f64,
    /// Markup multiplier (1.2 = 20% markup)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<f64>,
}

impl Staker {
    /// `NAME:PERCENT[:MARKUP]`, percent in 0..=100 (`"Alex:25:1.2"`).
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split(':').map(str::trim);
        let name = parts.next().filter(|n| !n.is_empty())?;
        let pct: f64 = parts.next()?.trim_end_matches('%').parse().ok()?;
        let markup = match parts.next() {
            Some(m) => Some(m.parse::<f64>().ok().filter(|m| *m > 0.0)?),
            None => None,
        };

        if parts.next().is_some() || !(0.0..=100.0).contains(&pct) {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            percentage: pct / 100.0,
            markup,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TournamentDetails {
    #[serde(default)]
    pub rebuy_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<u32>,
    #[serde(default)]
    pub size: TournamentSize,
    #[serde(default)]
    pub speed: TournamentSpeed,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stakers: Vec<Staker>,
}

/// Hours and minutes played, the shape every hourly computation sums over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl SessionDuration {
    pub fn from_minutes(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}

/// A single recorded poker session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_day_end: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_minutes: Option<i64>,

    pub buy_in: i64,
    pub cash_out: i64,
    pub profit: i64,
    #[serde(default)]
    pub expenses: i64,
    #[serde(default)]
    pub high_hand_bonus: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounties: Option<i64>,

    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub game: String,
    #[serde(default)]
    pub stakes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<TournamentDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Session {
    /// Cash session with profit derived from the financial fields.
    #[allow(clippy::too_many_arguments)]
    pub fn cash(
        date: NaiveDate,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        buy_in: i64,
        cash_out: i64,
        expenses: i64,
        stakes: &str,
        location: Location,
    ) -> Self {
        let mut s = Self {
            id: Uuid::new_v4(),
            date,
            start_time,
            end_time,
            multi_day_end: None,
            break_minutes: None,
            buy_in,
            cash_out,
            profit: 0,
            expenses,
            high_hand_bonus: 0,
            bounties: None,
            location,
            game: String::new(),
            stakes: stakes.to_string(),
            tags: Vec::new(),
            tournament: None,
            notes: None,
        };
        s.profit = s.computed_profit();
        s
    }

    /// Tournament entry; profit accounts for rebuys.
    pub fn tournament(
        date: NaiveDate,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        buy_in: i64,
        cash_out: i64,
        details: TournamentDetails,
        location: Location,
    ) -> Self {
        let mut s = Self::cash(date, start_time, end_time, buy_in, cash_out, 0, "", location);
        s.tournament = Some(details);
        s.profit = s.computed_profit();
        s
    }

    pub fn is_tournament(&self) -> bool {
        self.tournament.is_some()
    }

    pub fn rebuy_count(&self) -> u32 {
        self.tournament.as_ref().map(|t| t.rebuy_count).unwrap_or(0)
    }

    /// Buy-in including every rebuy.
    pub fn total_buy_in(&self) -> i64 {
        self.buy_in * (1 + self.rebuy_count() as i64)
    }

    /// `cash_out − buy_in × (1 + rebuys) − expenses`
    pub fn computed_profit(&self) -> i64 {
        self.cash_out - self.total_buy_in() - self.expenses
    }

    pub fn break_minutes(&self) -> i64 {
        self.break_minutes.unwrap_or(0).max(0)
    }

    pub fn bounties(&self) -> i64 {
        self.bounties.unwrap_or(0)
    }

    /// Multi-day sessions end on `multi_day_end`.
    pub fn effective_end(&self) -> NaiveDateTime {
        self.multi_day_end.unwrap_or(self.end_time)
    }

    /// Time played minus breaks; zero when the end precedes the start.
    pub fn duration(&self) -> SessionDuration {
        let played = (self.effective_end() - self.start_time).num_minutes();
        SessionDuration::from_minutes(played - self.break_minutes())
    }

    pub fn parsed_stakes(&self) -> Option<Stakes> {
        Stakes::parse(&self.stakes)
    }

    pub fn first_tag(&self) -> Option<&str> {
        self.tags
            .iter()
            .map(|t| t.trim())
            .find(|t| !t.is_empty())
    }

    /// Reports every broken record invariant. The analytics never call this;
    /// the CLI does before saving.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.effective_end() < self.start_time {
            problems.push("end time is before start time".to_string());
        }

        if self.buy_in < 0 || self.cash_out < 0 || self.expenses < 0 {
            problems.push("amounts must not be negative".to_string());
        }

        if self.profit != self.computed_profit() {
            problems.push(format!(
                "profit {} does not match cash-out minus buy-ins and expenses ({})",
                self.profit,
                self.computed_profit()
            ));
        }

        if let Some(t) = &self.tournament {
            if let (Some(finish), Some(entrants)) = (t.finish, t.entrants)
                && finish > entrants
            {
                problems.push(format!("finish {finish} is beyond {entrants} entrants"));
            }

            let owned: f64 = t.stakers.iter().map(|s| s.percentage).sum();
            if t.stakers.iter().any(|s| s.percentage < 0.0) || owned > 1.0 {
                problems.push("staker percentages must be within 0..=100%".to_string());
            }
        }

        problems
    }
}
