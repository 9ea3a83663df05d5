//! PII detection engine
//!
//! Applies a compiled [`RuleSet`] to one extracted text blob and produces a
//! per-category set of unique matched strings. Every configured category is
//! present in the output, empty set included - callers rely on that.

use super::similarity::{normalize_token, similarity, tokenize};
use crate::domain::report::CategoryFindings;
use crate::domain::rules::RuleSet;
use std::collections::BTreeSet;

/// Detects PII in extracted text
pub struct PiiDetector {
    threshold: f64,
}

impl PiiDetector {
    /// Create a detector with the given fuzzy-match threshold (0-100)
    ///
    /// A token matches a keyword when its similarity score strictly exceeds
    /// the threshold. The value is corpus-dependent and comes from
    /// configuration.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Detect PII in `text` against every rule in `rules`
    pub fn detect(&self, text: &str, rules: &RuleSet) -> CategoryFindings {
        let mut findings = rules.empty_findings();

        // Tokenize once per text; reused across all keyword categories
        let tokens = tokenize(text);
        let normalized: Vec<String> = tokens.iter().map(|t| normalize_token(t)).collect();

        for rule in rules.iter() {
            let matches = findings.entry(rule.category.clone()).or_default();

            if let Some(regex) = &rule.regex {
                collect_regex_matches(regex, text, matches);
            }

            for (token, key) in tokens.iter().zip(normalized.iter()) {
                for keyword in &rule.keywords {
                    if similarity(key, keyword) > self.threshold {
                        // Record the original, un-normalized token
                        matches.insert((*token).to_string());
                        break;
                    }
                }
            }
        }

        findings
    }
}

/// Collect regex matches, flattening capture groups
///
/// A pattern without explicit groups contributes its whole match. A pattern
/// with groups (phone-number patterns typically separate country code, area
/// code and line) contributes every captured group instead, so partial
/// captures don't mask each other. Empty captures are dropped.
fn collect_regex_matches(regex: &regex::Regex, text: &str, matches: &mut BTreeSet<String>) {
    for captures in regex.captures_iter(text) {
        if captures.len() > 1 {
            for group in captures.iter().skip(1).flatten() {
                if !group.as_str().is_empty() {
                    matches.insert(group.as_str().to_string());
                }
            }
        } else if let Some(whole) = captures.get(0) {
            if !whole.as_str().is_empty() {
                matches.insert(whole.as_str().to_string());
            }
        }
    }
}
