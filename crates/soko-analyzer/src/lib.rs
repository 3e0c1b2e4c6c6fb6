//! Rule-based risk heuristic over collected platform presence.
//!
//! Scores a username from platform breadth, Reddit account age, conflict
//! keywords in recent Reddit posts, and surfaces GitHub cross-references.
//! The score is explainable, not statistical: every point comes with a flag.

pub mod analyzer;
pub mod keywords;
pub mod report;

pub use analyzer::RiskAnalyzer;
pub use keywords::scan_post;
pub use report::{KeywordHit, PlatformPresence, RiskLevel, RiskReport};
