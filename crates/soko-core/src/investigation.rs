use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform marker of the synthetic finding that carries the risk report.
pub const ANALYSIS_PLATFORM: &str = "ANALYSIS";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestigationStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

impl std::fmt::Display for InvestigationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvestigationStatus::Pending => write!(f, "pending"),
            InvestigationStatus::Running => write!(f, "running"),
            InvestigationStatus::Completed => write!(f, "completed"),
            InvestigationStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One username under inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investigation {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub status: InvestigationStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// One persisted probe or detail result for an investigation.
///
/// `data` is an opaque serialized blob; consumers must tolerate it being
/// malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub id: i64,
    pub investigation_id: i64,
    pub platform: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile_url: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub found: bool,
    #[serde(default = "Utc::now")]
    pub scraped_at: DateTime<Utc>,
}

impl Finding {
    #[must_use]
    pub fn is_analysis(&self) -> bool {
        self.platform == ANALYSIS_PLATFORM
    }
}

/// A finding before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFinding {
    pub investigation_id: i64,
    pub platform: String,
    pub username: String,
    pub profile_url: String,
    pub data: String,
    pub found: bool,
}
