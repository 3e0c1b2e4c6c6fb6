//! Shared domain records and configuration for the soko OSINT pipeline.

pub mod app_config;
pub mod config;
pub mod detail;
pub mod error;
pub mod investigation;
pub mod presence;
pub mod rules;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use detail::{DetailBundle, DetailPlatform, GithubDetail, PlatformDetail, RedditDetail, RedditPost};
pub use error::ConfigError;
pub use investigation::{Finding, Investigation, InvestigationStatus, NewFinding, ANALYSIS_PLATFORM};
pub use presence::{PlatformCheckResult, PlatformPresenceSummary};
pub use rules::{
    load_rules, parse_rules, AccountAgeRules, BreadthRules, KeywordRules, LevelRules,
    ScoringRules,
};
