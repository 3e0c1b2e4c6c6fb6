//! Presence data collaborators.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use soko_core::{DetailPlatform, PlatformDetail, PlatformPresenceSummary};

use crate::error::SourceError;

/// Where platform presence and detail records come from.
///
/// Detail lookups never fail outright: a failed lookup is a `found: false`
/// record whose `error` says why.
pub trait PresenceSource {
    /// Probe every supported platform for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the search cannot be run at all.
    fn search_username(&self, username: &str) -> Result<PlatformPresenceSummary, SourceError>;

    fn reddit_detail(&self, username: &str) -> PlatformDetail;

    fn github_detail(&self, username: &str) -> PlatformDetail;
}

/// Replays previously fetched scraper output.
///
/// The capture has the same shape as the analysis finding's payload:
/// `{platform_results, reddit, github}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptureSource {
    #[serde(default)]
    platform_results: PlatformPresenceSummary,
    #[serde(default)]
    reddit: Option<Value>,
    #[serde(default)]
    github: Option<Value>,
}

impl CaptureSource {
    /// Parse a capture from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::CaptureParse`] if the text is not a valid capture.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a capture file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|e| SourceError::CaptureIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    fn detail(platform: DetailPlatform, raw: Option<&Value>) -> PlatformDetail {
        let Some(raw) = raw.filter(|v| !v.is_null()) else {
            return PlatformDetail::not_found(platform, "no capture for platform");
        };
        PlatformDetail::decode(platform, raw.clone()).unwrap_or_else(|e| {
            tracing::warn!(%platform, error = %e, "undecodable captured detail");
            PlatformDetail::not_found(platform, format!("undecodable capture: {e}"))
        })
    }
}

impl PresenceSource for CaptureSource {
    fn search_username(&self, username: &str) -> Result<PlatformPresenceSummary, SourceError> {
        if let Some(captured) = self.platform_results.username.as_deref() {
            if captured != username {
                tracing::warn!(captured, requested = username, "capture was taken for a different username");
            }
        }
        Ok(self.platform_results.clone())
    }

    fn reddit_detail(&self, _username: &str) -> PlatformDetail {
        Self::detail(DetailPlatform::Reddit, self.reddit.as_ref())
    }

    fn github_detail(&self, _username: &str) -> PlatformDetail {
        Self::detail(DetailPlatform::Github, self.github.as_ref())
    }
}
