use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Fixed recommendations for this level.
    #[must_use]
    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => &[
                "Escalate to senior investigator immediately",
                "Collect full post history before account is deleted",
            ],
            RiskLevel::Medium => &[
                "Monitor account for further activity",
                "Cross-reference with known misinformation campaigns",
            ],
            RiskLevel::Low => &["Continue monitoring, low immediate threat"],
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// A conflict keyword found in a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    /// Leading slice of the post in its original casing.
    pub context: String,
    pub platform: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPresence {
    pub found_on: Vec<String>,
    pub count: usize,
    pub platforms_checked: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub username: String,
    pub analyzed_at: DateTime<Utc>,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    /// Informational cross-references; never scored.
    pub findings: Vec<String>,
    pub platform_presence: PlatformPresence,
    /// One entry per scored signal.
    pub behavior_flags: Vec<String>,
    pub keyword_hits: Vec<KeywordHit>,
    pub recommendations: Vec<String>,
}
