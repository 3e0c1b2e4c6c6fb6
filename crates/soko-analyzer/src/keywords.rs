//! Conflict keyword scanning for post content.
//!
//! Matching is a case-insensitive substring test, so short terms also fire
//! inside longer words ("war" in "software", "lie" in "client"). Expect false
//! positives; each hit carries its context so a reviewer can discard them.

use soko_core::KeywordRules;

use crate::report::KeywordHit;

/// Scan one post for keyword terms.
///
/// Yields at most one hit per term, in term order, regardless of how many
/// times the term occurs in the post. Context is the first
/// `rules.context_chars` characters of the original-case content.
#[must_use]
pub fn scan_post(content: &str, platform: &str, rules: &KeywordRules) -> Vec<KeywordHit> {
    let lowered = content.to_lowercase();
    let mut hits = Vec::new();
    for term in &rules.terms {
        if lowered.contains(term.as_str()) {
            hits.push(KeywordHit {
                keyword: term.clone(),
                context: content.chars().take(rules.context_chars).collect(),
                platform: platform.to_string(),
            });
        }
    }
    hits
}
