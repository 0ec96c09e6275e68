use serde::{Deserialize, Serialize};

/// Origin channel of a brand mention. `All` disables source filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    All,
    Reddit,
    Gdelt,
    Twitter,
    Youtube,
}

impl DataSource {
    pub const ALLOWED: &'static [&'static str] = &["all", "reddit", "gdelt", "twitter", "youtube"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DataSource::All => "all",
            DataSource::Reddit => "reddit",
            DataSource::Gdelt => "gdelt",
            DataSource::Twitter => "twitter",
            DataSource::Youtube => "youtube",
        }
    }

    /// Parses a client-supplied source value. Matching is case-insensitive;
    /// anything outside the fixed enumeration is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "all" => Some(DataSource::All),
            "reddit" => Some(DataSource::Reddit),
            "gdelt" => Some(DataSource::Gdelt),
            "twitter" => Some(DataSource::Twitter),
            "youtube" => Some(DataSource::Youtube),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded brand mention sampled from the warehouse.
///
/// Consumed and discarded within one request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionRow {
    pub source: String,
    pub full_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementStrategy {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintResponse {
    pub complaint: String,
    pub suggested_response: String,
}

/// The analysis output contract. Every field is mandatory on a successful
/// response regardless of which generator produced it; the UI renders this
/// without defensive validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationReport {
    /// 0 worst, 100 best.
    pub reputation_score: u8,
    pub score_rationale: String,
    pub key_insights: Vec<String>,
    pub improvement_strategies: Vec<ImprovementStrategy>,
    pub what_users_love: Vec<String>,
    pub what_users_hate: Vec<String>,
    pub complaint_responses: Vec<ComplaintResponse>,
}
