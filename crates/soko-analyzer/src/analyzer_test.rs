use chrono::TimeZone;
use serde_json::json;
use soko_core::{PlatformCheckResult, PlatformDetail, RedditPost};

use super::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
}

fn presence(found: usize, total: usize) -> PlatformPresenceSummary {
    let platforms = (0..total)
        .map(|i| {
            PlatformCheckResult::new(
                format!("Platform{i}"),
                format!("https://example.com/{i}"),
                i < found,
            )
        })
        .collect();
    PlatformPresenceSummary {
        total_checked: total,
        platforms,
        ..PlatformPresenceSummary::default()
    }
}

fn reddit(account_age: Option<&str>, posts: &[&str]) -> DetailBundle {
    DetailBundle::new().with(PlatformDetail::Reddit(RedditDetail {
        found: true,
        account_age: account_age.map(str::to_string),
        recent_posts: posts
            .iter()
            .map(|content| RedditPost {
                content: (*content).to_string(),
                subreddit: Some("news".to_string()),
                ..RedditPost::default()
            })
            .collect(),
        ..RedditDetail::default()
    }))
}

fn analyze(
    presence: Option<&PlatformPresenceSummary>,
    detail: Option<&DetailBundle>,
) -> RiskReport {
    RiskAnalyzer::default().analyze_at("testuser", presence, detail, now())
}

// -----------------------------------------------------------------------
// platform breadth
// -----------------------------------------------------------------------

#[test]
fn breadth_below_four_scores_nothing() {
    let report = analyze(Some(&presence(3, 10)), None);
    assert_eq!(report.risk_score, 0);
    assert!(report.behavior_flags.is_empty());
    assert_eq!(report.platform_presence.count, 3);
    assert_eq!(report.platform_presence.platforms_checked, 10);
}

#[test]
fn breadth_four_to_six_scores_ten() {
    for k in 4..7 {
        let report = analyze(Some(&presence(k, 10)), None);
        assert_eq!(report.risk_score, 10, "k={k}");
        assert_eq!(report.behavior_flags, vec![format!("Active on {k} platforms")]);
    }
}

#[test]
fn breadth_seven_or_more_scores_twenty() {
    for k in 7..=10 {
        let report = analyze(Some(&presence(k, 10)), None);
        assert_eq!(report.risk_score, 20, "k={k}");
        assert_eq!(
            report.behavior_flags,
            vec![format!("Present on {k} platforms simultaneously")]
        );
    }
}

#[test]
fn three_platform_example_is_low() {
    let summary: PlatformPresenceSummary = serde_json::from_value(json!({
        "platforms": [
            {"platform": "Facebook", "found": true},
            {"platform": "Twitter", "found": true},
            {"platform": "Instagram", "found": true}
        ],
        "total_checked": 10
    }))
    .unwrap();
    let report = analyze(Some(&summary), None);
    assert_eq!(report.risk_score, 0);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert_eq!(
        report.platform_presence.found_on,
        vec!["Facebook", "Twitter", "Instagram"]
    );
    assert_eq!(
        report.recommendations,
        vec!["Continue monitoring, low immediate threat"]
    );
}

// -----------------------------------------------------------------------
// account age
// -----------------------------------------------------------------------

#[test]
fn same_year_account_is_very_new() {
    let detail = reddit(Some("2026-01-01"), &[]);
    let report = analyze(None, Some(&detail));
    assert_eq!(report.risk_score, 25);
    assert_eq!(
        report.behavior_flags,
        vec!["Very new account (less than 1 year old) - possible fake"]
    );
}

#[test]
fn account_age_uses_calendar_years() {
    // Created Dec 31 of the previous year: one calendar year old.
    let detail = reddit(Some("2025-12-31"), &[]);
    let report = analyze(None, Some(&detail));
    assert_eq!(report.risk_score, 10);
    assert_eq!(
        report.behavior_flags,
        vec!["Relatively new account (less than 2 years old)"]
    );
}

#[test]
fn old_account_scores_nothing() {
    let detail = reddit(Some("2024-06-15"), &[]);
    let report = analyze(None, Some(&detail));
    assert_eq!(report.risk_score, 0);
    assert!(report.behavior_flags.is_empty());
}

#[test]
fn timestamp_account_age_is_accepted() {
    let detail = reddit(Some("2026-02-03T04:05:06Z"), &[]);
    let report = analyze(None, Some(&detail));
    assert_eq!(report.risk_score, 25);
}

#[test]
fn malformed_account_age_is_no_signal() {
    for raw in ["unknown", "20", "", "+202-01-01", "２０２６-01-01"] {
        let detail = reddit(Some(raw), &[]);
        let report = analyze(None, Some(&detail));
        assert_eq!(report.risk_score, 0, "raw={raw:?}");
        assert!(report.behavior_flags.is_empty(), "raw={raw:?}");
    }
}

#[test]
fn reddit_not_found_contributes_nothing() {
    let detail = DetailBundle::new().with(PlatformDetail::Reddit(RedditDetail {
        found: false,
        account_age: Some("2026-01-01".to_string()),
        recent_posts: vec![RedditPost {
            content: "riot".to_string(),
            ..RedditPost::default()
        }],
        ..RedditDetail::default()
    }));
    let report = analyze(None, Some(&detail));
    assert_eq!(report.risk_score, 0);
    assert!(report.keyword_hits.is_empty());
}

#[test]
fn malformed_post_keeps_other_reddit_signals() {
    let detail = DetailBundle::from_value(&json!({
        "reddit": {
            "found": true,
            "account_age": "2026-01-01",
            "recent_posts": [
                {"content": null, "subreddit": "news"},
                ["not", "a", "post"],
                {"content": "riot downtown", "subreddit": "kenya"}
            ]
        }
    }));
    let report = analyze(None, Some(&detail));
    assert_eq!(report.risk_score, 30);
    assert_eq!(report.risk_level, RiskLevel::Medium);
    assert_eq!(report.keyword_hits.len(), 1);
    assert_eq!(report.keyword_hits[0].keyword, "riot");
    assert_eq!(
        report.behavior_flags,
        vec![
            "Very new account (less than 1 year old) - possible fake",
            "1 conflict-related keywords found in posts",
        ]
    );
}

// -----------------------------------------------------------------------
// keywords
// -----------------------------------------------------------------------

#[test]
fn keyword_hits_score_five_each() {
    let detail = reddit(None, &["Protest downtown", "calm day", "riot and coup"]);
    let report = analyze(None, Some(&detail));
    assert_eq!(report.keyword_hits.len(), 3);
    assert_eq!(report.risk_score, 15);
    assert_eq!(
        report.behavior_flags,
        vec!["3 conflict-related keywords found in posts"]
    );
    assert_eq!(report.keyword_hits[0].context, "Protest downtown");
    assert!(report.keyword_hits.iter().all(|h| h.platform == "reddit"));
}

#[test]
fn no_keyword_hits_adds_no_flag() {
    let detail = reddit(None, &["calm day", "nice weather"]);
    let report = analyze(None, Some(&detail));
    assert_eq!(report.risk_score, 0);
    assert!(report.behavior_flags.is_empty());
    assert!(report.keyword_hits.is_empty());
}

#[test]
fn new_account_with_two_hits_is_medium() {
    let detail = reddit(Some("2026-01-01"), &["urgent update", "the crisis deepens"]);
    let report = analyze(None, Some(&detail));
    assert_eq!(report.risk_score, 35);
    assert_eq!(report.risk_level, RiskLevel::Medium);
    assert_eq!(report.behavior_flags.len(), 2);
    assert!(report.behavior_flags[0].starts_with("Very new account"));
    assert_eq!(
        report.recommendations,
        vec![
            "Monitor account for further activity",
            "Cross-reference with known misinformation campaigns"
        ]
    );
}

#[test]
fn combined_signals_reach_high() {
    let detail = reddit(Some("2026-03-01"), &["attack", "bomb", "war"]);
    let report = analyze(Some(&presence(8, 10)), Some(&detail));
    // 20 (breadth) + 25 (age) + 15 (keywords)
    assert_eq!(report.risk_score, 60);
    assert_eq!(report.risk_level, RiskLevel::High);
    assert_eq!(report.recommendations.len(), 2);
    assert!(report.recommendations[0].starts_with("Escalate"));
}

// -----------------------------------------------------------------------
// github
// -----------------------------------------------------------------------

#[test]
fn github_cross_references_are_findings_only() {
    let detail = DetailBundle::new().with(PlatformDetail::Github(GithubDetail {
        found: true,
        twitter_linked: Some("alice_tw".to_string()),
        location: Some("Nairobi".to_string()),
        email: Some("alice@example.com".to_string()),
        ..GithubDetail::default()
    }));
    let report = analyze(None, Some(&detail));
    assert_eq!(report.risk_score, 0);
    assert!(report.behavior_flags.is_empty());
    assert_eq!(
        report.findings,
        vec![
            "GitHub links to Twitter account: @alice_tw",
            "Location on GitHub: Nairobi",
            "Public email found: alice@example.com"
        ]
    );
}

#[test]
fn blank_github_fields_are_ignored() {
    let detail = DetailBundle::new().with(PlatformDetail::Github(GithubDetail {
        found: true,
        location: Some("   ".to_string()),
        ..GithubDetail::default()
    }));
    let report = analyze(None, Some(&detail));
    assert!(report.findings.is_empty());
}

// -----------------------------------------------------------------------
// levels and report shape
// -----------------------------------------------------------------------

#[test]
fn empty_input_still_populates_report() {
    let report = analyze(None, None);
    assert_eq!(report.username, "testuser");
    assert_eq!(report.analyzed_at, now());
    assert_eq!(report.risk_score, 0);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert_eq!(report.platform_presence, PlatformPresence::default());
    assert!(report.findings.is_empty());
    assert_eq!(report.recommendations.len(), 1);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["risk_level"], json!("LOW"));
    assert_eq!(value["platform_presence"]["found_on"], json!([]));
}

#[test]
fn levels_partition_the_score_range() {
    let analyzer = RiskAnalyzer::default();
    for score in 0..200 {
        let expected = if score >= 50 {
            RiskLevel::High
        } else if score >= 25 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
        assert_eq!(analyzer.level_for(score), expected, "score={score}");
    }
}

#[test]
fn score_never_decreases_as_signals_are_added() {
    let base = analyze(Some(&presence(4, 10)), None).risk_score;
    let with_age = analyze(Some(&presence(4, 10)), Some(&reddit(Some("2025-01-01"), &[]))).risk_score;
    let with_hits = analyze(
        Some(&presence(4, 10)),
        Some(&reddit(Some("2025-01-01"), &["riot"])),
    )
    .risk_score;
    assert!(base <= with_age && with_age <= with_hits);
}

#[test]
fn custom_rules_change_thresholds() {
    let mut rules = ScoringRules::default();
    rules.breadth.active_threshold = 2;
    rules.levels.medium = 10;
    let analyzer = RiskAnalyzer::new(rules);
    let report = analyzer.analyze_at("u", Some(&presence(2, 5)), None, now());
    assert_eq!(report.risk_score, 10);
    assert_eq!(report.risk_level, RiskLevel::Medium);
}
