use crate::models::{Session, SessionType};
use chrono::{Datelike, NaiveDate};

/// Pre-filter applied before any aggregation. Every `None` field lets all
/// sessions through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionFilter {
    pub year: Option<i32>,
    pub location: Option<String>,
    pub stakes: Option<String>,
    pub tag: Option<String>,
    pub session_type: SessionType,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl SessionFilter {
    /// Year and range checks only (transactions).
    pub fn accepts_date(&self, date: NaiveDate) -> bool {
        if let Some(y) = self.year
            && date.year() != y
        {
            return false;
        }

        self.range
            .is_none_or(|(start, end)| start <= date && date <= end)
    }

    pub fn accepts(&self, s: &Session) -> bool {
        if !self.accepts_date(s.date) {
            return false;
        }

        if let Some(loc) = &self.location
            && !s.location.matches_name(loc)
        {
            return false;
        }

        if let Some(st) = &self.stakes
            && s.stakes.trim() != st.trim()
        {
            return false;
        }

        if let Some(tag) = &self.tag
            && !s.tags.iter().any(|t| t.trim().eq_ignore_ascii_case(tag.trim()))
        {
            return false;
        }

        self.session_type.accepts(s)
    }

    pub fn apply<'a>(&self, sessions: &[&'a Session]) -> Vec<&'a Session> {
        sessions.iter().copied().filter(|s| self.accepts(s)).collect()
    }
}
