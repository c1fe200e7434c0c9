use serde::{Deserialize, Serialize};

/// A public athlete profile record as served by the athlete listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: String,
    pub name: String,
    pub sport: String,
    pub gender: String,
    pub location: String,
    /// Short initials shown in the avatar placeholder (no photo hosting).
    pub initials: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub stats: AthleteStats,
}

/// Headline numbers shown on profile cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthleteStats {
    #[serde(default)]
    pub events: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub communities: u32,
}

/// Optional server-side filter for the athlete listing.
///
/// Serialized to a query string with `serde_qs`; `None` fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthleteFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl AthleteFilter {
    pub fn featured() -> Self {
        Self {
            featured: Some(true),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_none() && self.sport.is_none() && self.gender.is_none()
    }
}
