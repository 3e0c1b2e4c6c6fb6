//! Platform-specific attribute extraction from a finding's raw payload.

use serde_json::{Map, Value};
use soko_core::Finding;
use thiserror::Error;

/// Subreddit nodes created per Reddit finding, at most.
pub const MAX_REDDIT_COMMUNITIES: usize = 5;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Platforms with extraction rules. Names match case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePlatform {
    GitHub,
    Reddit,
    Other,
}

impl SourcePlatform {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "github" => Self::GitHub,
            "reddit" => Self::Reddit,
            _ => Self::Other,
        }
    }
}

/// Entities pulled out of one finding's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformPayload {
    GitHub {
        location: Option<String>,
        company: Option<String>,
    },
    Reddit {
        /// Subreddit per post, in post order, capped at
        /// [`MAX_REDDIT_COMMUNITIES`]. Repeats are kept.
        subreddits: Vec<String>,
    },
    Nothing,
}

/// Parse `data` according to the rules for `platform`.
///
/// Platforms without rules short-circuit to [`PlatformPayload::Nothing`]
/// without looking at the payload.
///
/// # Errors
///
/// Returns [`PayloadError`] if a GitHub or Reddit payload is not a JSON object.
pub fn parse_payload(platform: SourcePlatform, data: &str) -> Result<PlatformPayload, PayloadError> {
    if platform == SourcePlatform::Other {
        return Ok(PlatformPayload::Nothing);
    }

    let value: Value = serde_json::from_str(data)?;
    let Value::Object(map) = value else {
        return Err(PayloadError::NotAnObject);
    };

    Ok(match platform {
        SourcePlatform::GitHub => PlatformPayload::GitHub {
            location: non_empty_str(&map, "location"),
            company: non_empty_str(&map, "company"),
        },
        SourcePlatform::Reddit => PlatformPayload::Reddit {
            subreddits: subreddits(&map),
        },
        SourcePlatform::Other => PlatformPayload::Nothing,
    })
}

/// Parse a finding's payload, logging and discarding any failure.
#[must_use]
pub fn try_parse_payload(finding: &Finding) -> Option<PlatformPayload> {
    let platform = SourcePlatform::from_name(&finding.platform);
    match parse_payload(platform, &finding.data) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::warn!(
                finding_id = finding.id,
                platform = %finding.platform,
                error = %e,
                "malformed finding payload, skipping extraction"
            );
            None
        }
    }
}

fn non_empty_str(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn subreddits(map: &Map<String, Value>) -> Vec<String> {
    let Some(posts) = map.get("recent_posts").and_then(Value::as_array) else {
        return Vec::new();
    };
    posts
        .iter()
        .take(MAX_REDDIT_COMMUNITIES)
        .map(|post| {
            post.get("subreddit")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or("unknown")
                .to_string()
        })
        .collect()
}
