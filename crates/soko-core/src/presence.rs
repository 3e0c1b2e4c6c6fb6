use serde::{Deserialize, Serialize};

/// Outcome of probing one platform for a username.
///
/// A probe carries either an HTTP `status_code` or an `error` describing why
/// the request never produced one (timeout, connection failure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCheckResult {
    pub platform: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_at: Option<String>,
}

impl PlatformCheckResult {
    /// A bare probe result with only the required fields set.
    #[must_use]
    pub fn new(platform: impl Into<String>, url: impl Into<String>, found: bool) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
            found,
            username: None,
            status_code: None,
            error: None,
            page_title: None,
            profile_picture: None,
            checked_at: None,
        }
    }
}

/// All platform probes for one username search, in probe order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformPresenceSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searched_at: Option<String>,
    #[serde(default)]
    pub total_checked: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_count: Option<usize>,
    #[serde(default)]
    pub platforms: Vec<PlatformCheckResult>,
}

impl PlatformPresenceSummary {
    /// Names of the platforms where the username was found, in probe order.
    #[must_use]
    pub fn found_on(&self) -> Vec<&str> {
        self.platforms
            .iter()
            .filter(|p| p.found)
            .map(|p| p.platform.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_on_preserves_probe_order() {
        let summary = PlatformPresenceSummary {
            total_checked: 3,
            platforms: vec![
                PlatformCheckResult::new("Twitter/X", "https://twitter.com/a", true),
                PlatformCheckResult::new("GitHub", "https://github.com/a", false),
                PlatformCheckResult::new("Facebook", "https://www.facebook.com/a", true),
            ],
            ..PlatformPresenceSummary::default()
        };
        assert_eq!(summary.found_on(), vec!["Twitter/X", "Facebook"]);
    }

    #[test]
    fn deserializes_scraper_shape() {
        let summary: PlatformPresenceSummary = serde_json::from_value(serde_json::json!({
            "username": "alice",
            "total_checked": 2,
            "found_count": 1,
            "platforms": [
                {"platform": "GitHub", "url": "https://github.com/alice", "found": true,
                 "status_code": 200, "page_title": "alice (Alice)", "profile_picture": null},
                {"platform": "Telegram", "url": "https://t.me/alice", "found": false,
                 "error": "timeout"}
            ]
        }))
        .unwrap();
        assert_eq!(summary.total_checked, 2);
        assert_eq!(summary.platforms[0].status_code, Some(200));
        assert_eq!(summary.platforms[1].error.as_deref(), Some("timeout"));
    }

    #[test]
    fn missing_fields_default() {
        let summary: PlatformPresenceSummary =
            serde_json::from_value(serde_json::json!({"platforms": [{"platform": "Facebook"}]}))
                .unwrap();
        assert_eq!(summary.total_checked, 0);
        assert!(!summary.platforms[0].found);
        assert!(summary.found_on().is_empty());
    }
}
