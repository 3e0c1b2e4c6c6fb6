//! Risk scoring over platform presence and per-platform detail.

use chrono::{DateTime, Datelike, Utc};
use soko_core::{
    DetailBundle, GithubDetail, PlatformPresenceSummary, RedditDetail, ScoringRules,
};

use crate::keywords::scan_post;
use crate::report::{PlatformPresence, RiskLevel, RiskReport};

const REDDIT: &str = "reddit";

/// Scores a username against a fixed set of [`ScoringRules`].
///
/// Analysis never fails. Missing or undecodable inputs contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer {
    rules: ScoringRules,
}

impl RiskAnalyzer {
    #[must_use]
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// Analyze collected data, stamping the report with the current time.
    #[must_use]
    pub fn analyze(
        &self,
        username: &str,
        presence: Option<&PlatformPresenceSummary>,
        detail: Option<&DetailBundle>,
    ) -> RiskReport {
        self.analyze_at(username, presence, detail, Utc::now())
    }

    /// Analyze collected data as of `now`.
    ///
    /// Signals are applied in a fixed order: platform breadth, Reddit account
    /// age, Reddit keyword hits, GitHub cross-references. The level and
    /// recommendations are derived once from the final score.
    #[must_use]
    pub fn analyze_at(
        &self,
        username: &str,
        presence: Option<&PlatformPresenceSummary>,
        detail: Option<&DetailBundle>,
        now: DateTime<Utc>,
    ) -> RiskReport {
        tracing::info!(username, "analyzing collected data");

        let mut report = RiskReport {
            username: username.to_string(),
            analyzed_at: now,
            risk_score: 0,
            risk_level: RiskLevel::Low,
            findings: Vec::new(),
            platform_presence: PlatformPresence::default(),
            behavior_flags: Vec::new(),
            keyword_hits: Vec::new(),
            recommendations: Vec::new(),
        };

        if let Some(presence) = presence {
            self.score_breadth(presence, &mut report);
        }

        if let Some(reddit) = detail.and_then(DetailBundle::reddit) {
            self.score_account_age(reddit, now.year(), &mut report);
            self.score_keywords(reddit, &mut report);
        }

        if let Some(github) = detail.and_then(DetailBundle::github) {
            cross_reference_github(github, &mut report);
        }

        report.risk_level = self.level_for(report.risk_score);
        report.recommendations = report
            .risk_level
            .recommendations()
            .iter()
            .map(|r| (*r).to_string())
            .collect();

        tracing::info!(
            username,
            score = report.risk_score,
            level = %report.risk_level,
            "analysis complete"
        );
        report
    }

    /// Map a total score onto a level.
    #[must_use]
    pub fn level_for(&self, score: u32) -> RiskLevel {
        let levels = &self.rules.levels;
        if score >= levels.high {
            RiskLevel::High
        } else if score >= levels.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    fn score_breadth(&self, presence: &PlatformPresenceSummary, report: &mut RiskReport) {
        let found_on: Vec<String> = presence
            .found_on()
            .into_iter()
            .map(str::to_string)
            .collect();
        let count = found_on.len();
        report.platform_presence = PlatformPresence {
            found_on,
            count,
            platforms_checked: presence.total_checked,
        };

        let rules = &self.rules.breadth;
        if count >= rules.wide_threshold {
            add_signal(
                report,
                rules.wide_score,
                format!("Present on {count} platforms simultaneously"),
            );
        } else if count >= rules.active_threshold {
            add_signal(report, rules.active_score, format!("Active on {count} platforms"));
        }
    }

    fn score_account_age(&self, reddit: &RedditDetail, current_year: i32, report: &mut RiskReport) {
        let Some(raw) = reddit.account_age.as_deref().filter(|s| !s.is_empty()) else {
            return;
        };
        let Some(account_year) = account_year(raw) else {
            tracing::warn!(account_age = raw, "unparsable reddit account age, skipping signal");
            return;
        };

        let age_years = current_year - account_year;
        tracing::debug!(account_year, age_years, "reddit account age");

        let rules = &self.rules.account_age;
        if age_years < rules.very_new_years {
            add_signal(
                report,
                rules.very_new_score,
                format!(
                    "Very new account (less than {} old) - possible fake",
                    years(rules.very_new_years)
                ),
            );
        } else if age_years < rules.new_years {
            add_signal(
                report,
                rules.new_score,
                format!(
                    "Relatively new account (less than {} old)",
                    years(rules.new_years)
                ),
            );
        }
    }

    fn score_keywords(&self, reddit: &RedditDetail, report: &mut RiskReport) {
        let rules = &self.rules.keywords;
        let hits: Vec<_> = reddit
            .recent_posts
            .iter()
            .flat_map(|post| scan_post(&post.content, REDDIT, rules))
            .collect();

        if hits.is_empty() {
            return;
        }

        let hit_count = hits.len();
        let delta = u32::try_from(hit_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(rules.hit_score);
        report.keyword_hits = hits;
        add_signal(
            report,
            delta,
            format!("{hit_count} conflict-related keywords found in posts"),
        );
    }
}

/// Informational GitHub links. These land in `findings` and are never scored.
fn cross_reference_github(github: &GithubDetail, report: &mut RiskReport) {
    if let Some(handle) = present(github.twitter_linked.as_deref()) {
        report
            .findings
            .push(format!("GitHub links to Twitter account: @{handle}"));
    }
    if let Some(location) = present(github.location.as_deref()) {
        report.findings.push(format!("Location on GitHub: {location}"));
    }
    if let Some(email) = present(github.email.as_deref()) {
        report.findings.push(format!("Public email found: {email}"));
    }
}

fn add_signal(report: &mut RiskReport, delta: u32, flag: String) {
    report.risk_score = report.risk_score.saturating_add(delta);
    report.behavior_flags.push(flag);
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Calendar year from the leading four digits of an ISO date.
fn account_year(raw: &str) -> Option<i32> {
    let year = raw.trim().get(..4)?;
    if !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

fn years(n: i32) -> String {
    if n == 1 {
        "1 year".to_string()
    } else {
        format!("{n} years")
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
