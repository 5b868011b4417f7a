use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Venue where a session was played. Sessions embed a copy; the
/// `locations_v2.json` list is the catalogue the CLI resolves names against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    /// Bundled image asset name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// File name of an image imported by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported_image: Option<String>,
}

impl Location {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            image: None,
            imported_image: None,
        }
    }

    /// Placeholder used when a session is recorded without a venue.
    pub fn unknown() -> Self {
        Self {
            id: Uuid::nil(),
            name: "Unknown".to_string(),
            image: None,
            imported_image: None,
        }
    }

    /// Case-insensitive name match (CLI input).
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unknown()
    }
}
