//! Per-platform detail records gathered from platform JSON APIs.
//!
//! Each supported platform has its own optional-field record; a
//! [`DetailBundle`] holds at most one record per platform. Decoding is
//! lenient: a record that fails to decode is dropped and treated as "no
//! signal" rather than failing the whole bundle, and a bad Reddit post is
//! skipped without dropping the rest of its record.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailPlatform {
    Reddit,
    Github,
}

impl DetailPlatform {
    /// Map a bundle key to a platform. Keys are matched case-insensitively.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "reddit" => Some(Self::Reddit),
            "github" => Some(Self::Github),
            _ => None,
        }
    }
}

impl fmt::Display for DetailPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailPlatform::Reddit => write!(f, "reddit"),
            DetailPlatform::Github => write!(f, "github"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedditPost {
    /// `null` decodes as empty content.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub created: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedditDetail {
    #[serde(default)]
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// ISO date the account was created, e.g. `2021-03-14`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub karma: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Posts that fail to decode are skipped individually.
    #[serde(default, deserialize_with = "lenient_posts")]
    pub recent_posts: Vec<RedditPost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_posts<'de, D>(deserializer: D) -> Result<Vec<RedditPost>, D::Error>
where
    D: Deserializer<'de>,
{
    let posts = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!(value = %other, "recent_posts is not a list; ignoring posts");
            return Ok(Vec::new());
        }
    };

    Ok(posts
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match serde_json::from_value(raw) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping undecodable reddit post");
                None
            }
        })
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GithubDetail {
    #[serde(default)]
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_linked: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// A detail record tagged by the platform it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlatformDetail {
    Reddit(RedditDetail),
    Github(GithubDetail),
}

impl PlatformDetail {
    #[must_use]
    pub fn platform(&self) -> DetailPlatform {
        match self {
            PlatformDetail::Reddit(_) => DetailPlatform::Reddit,
            PlatformDetail::Github(_) => DetailPlatform::Github,
        }
    }

    #[must_use]
    pub fn found(&self) -> bool {
        match self {
            PlatformDetail::Reddit(r) => r.found,
            PlatformDetail::Github(g) => g.found,
        }
    }

    /// A `found: false` record carrying the reason the lookup failed.
    #[must_use]
    pub fn not_found(platform: DetailPlatform, error: impl Into<String>) -> Self {
        let error = Some(error.into());
        match platform {
            DetailPlatform::Reddit => PlatformDetail::Reddit(RedditDetail {
                error,
                ..RedditDetail::default()
            }),
            DetailPlatform::Github => PlatformDetail::Github(GithubDetail {
                error,
                ..GithubDetail::default()
            }),
        }
    }

    /// Decode a raw JSON record as the given platform's detail shape.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the record does not match the shape.
    pub fn decode(platform: DetailPlatform, raw: Value) -> Result<Self, serde_json::Error> {
        Ok(match platform {
            DetailPlatform::Reddit => PlatformDetail::Reddit(serde_json::from_value(raw)?),
            DetailPlatform::Github => PlatformDetail::Github(serde_json::from_value(raw)?),
        })
    }
}

/// Detail records keyed by platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DetailBundle(BTreeMap<DetailPlatform, PlatformDetail>);

impl DetailBundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous record for the same platform.
    pub fn insert(&mut self, detail: PlatformDetail) {
        self.0.insert(detail.platform(), detail);
    }

    #[must_use]
    pub fn with(mut self, detail: PlatformDetail) -> Self {
        self.insert(detail);
        self
    }

    #[must_use]
    pub fn get(&self, platform: DetailPlatform) -> Option<&PlatformDetail> {
        self.0.get(&platform)
    }

    /// The Reddit record, only if present and marked `found`.
    #[must_use]
    pub fn reddit(&self) -> Option<&RedditDetail> {
        match self.get(DetailPlatform::Reddit) {
            Some(PlatformDetail::Reddit(r)) if r.found => Some(r),
            _ => None,
        }
    }

    /// The GitHub record, only if present and marked `found`.
    #[must_use]
    pub fn github(&self) -> Option<&GithubDetail> {
        match self.get(DetailPlatform::Github) {
            Some(PlatformDetail::Github(g)) if g.found => Some(g),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a bundle from a JSON object keyed by platform name.
    ///
    /// Unknown keys are ignored; records that fail to decode are dropped with
    /// a warning. A non-object value yields an empty bundle.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut bundle = Self::default();
        let Some(map) = value.as_object() else {
            if !value.is_null() {
                tracing::warn!("detail payload is not a JSON object; ignoring it");
            }
            return bundle;
        };

        for (key, raw) in map {
            let Some(platform) = DetailPlatform::from_key(key) else {
                tracing::debug!(platform = %key, "no detail handler for platform, skipping");
                continue;
            };
            match PlatformDetail::decode(platform, raw.clone()) {
                Ok(detail) => bundle.insert(detail),
                Err(e) => {
                    tracing::warn!(%platform, error = %e, "undecodable detail record, treating as no signal");
                }
            }
        }

        bundle
    }
}

impl<'de> Deserialize<'de> for DetailBundle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
