//! Tunable thresholds and weights for the risk heuristic.
//!
//! [`ScoringRules::default`] carries the stock values. A YAML file can
//! override any subset of them; omitted sections keep their defaults.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Conflict and misinformation terms scanned for in post content.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "attack", "kill", "war", "bomb", "destroy", "fight", "hate", "enemy", "threat", "danger",
    "fake", "lie", "protest", "riot", "coup", "overthrow", "uprising", "crisis", "emergency",
    "urgent", "breaking", "exposed",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreadthRules {
    /// Found-on count at which presence is flagged as simultaneous.
    pub wide_threshold: usize,
    pub wide_score: u32,
    /// Found-on count at which presence is flagged as active.
    pub active_threshold: usize,
    pub active_score: u32,
}

impl Default for BreadthRules {
    fn default() -> Self {
        Self {
            wide_threshold: 7,
            wide_score: 20,
            active_threshold: 4,
            active_score: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountAgeRules {
    /// Accounts younger than this many calendar years are "very new".
    pub very_new_years: i32,
    pub very_new_score: u32,
    /// Accounts younger than this many calendar years are "relatively new".
    pub new_years: i32,
    pub new_score: u32,
}

impl Default for AccountAgeRules {
    fn default() -> Self {
        Self {
            very_new_years: 1,
            very_new_score: 25,
            new_years: 2,
            new_score: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordRules {
    /// Lowercase terms, matched as substrings of lowercased post content.
    pub terms: Vec<String>,
    pub hit_score: u32,
    /// Characters of original post content kept as hit context.
    pub context_chars: usize,
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self {
            terms: DEFAULT_KEYWORDS.iter().map(|t| (*t).to_string()).collect(),
            hit_score: 5,
            context_chars: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelRules {
    /// Minimum score for `HIGH`.
    pub high: u32,
    /// Minimum score for `MEDIUM`.
    pub medium: u32,
}

impl Default for LevelRules {
    fn default() -> Self {
        Self {
            high: 50,
            medium: 25,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringRules {
    pub breadth: BreadthRules,
    pub account_age: AccountAgeRules,
    pub keywords: KeywordRules,
    pub levels: LevelRules,
}

/// Load and validate scoring rules from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_rules(path: &Path) -> Result<ScoringRules, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RulesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_rules(&content)
}

/// Parse and validate scoring rules from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text is not valid rules YAML or fails validation.
pub fn parse_rules(yaml: &str) -> Result<ScoringRules, ConfigError> {
    let rules: ScoringRules = serde_yaml::from_str(yaml).map_err(ConfigError::RulesFileParse)?;
    validate_rules(&rules)?;
    Ok(rules)
}

fn validate_rules(rules: &ScoringRules) -> Result<(), ConfigError> {
    let breadth = &rules.breadth;
    if breadth.wide_threshold <= breadth.active_threshold {
        return Err(ConfigError::Validation(format!(
            "breadth.wide_threshold ({}) must be greater than breadth.active_threshold ({})",
            breadth.wide_threshold, breadth.active_threshold
        )));
    }

    let age = &rules.account_age;
    if age.very_new_years >= age.new_years {
        return Err(ConfigError::Validation(format!(
            "account_age.very_new_years ({}) must be less than account_age.new_years ({})",
            age.very_new_years, age.new_years
        )));
    }

    let levels = &rules.levels;
    if levels.high <= levels.medium {
        return Err(ConfigError::Validation(format!(
            "levels.high ({}) must be greater than levels.medium ({})",
            levels.high, levels.medium
        )));
    }

    let keywords = &rules.keywords;
    if keywords.terms.is_empty() {
        return Err(ConfigError::Validation(
            "keywords.terms must not be empty".to_string(),
        ));
    }
    if keywords.context_chars == 0 {
        return Err(ConfigError::Validation(
            "keywords.context_chars must be at least 1".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for term in &keywords.terms {
        if term.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keyword terms must be non-empty".to_string(),
            ));
        }
        if *term != term.to_lowercase() {
            return Err(ConfigError::Validation(format!(
                "keyword '{term}' must be lowercase"
            )));
        }
        if !seen.insert(term.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate keyword: '{term}'"
            )));
        }
    }

    Ok(())
}
