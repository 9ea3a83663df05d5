//! Integration tests for the PII detection engine

use dragnet::core::detection::{similarity, PiiDetector};
use dragnet::domain::RuleSet;

const RULES_JSON: &str = r#"{
    "Email": { "regex": "[\\w.+-]+@[\\w-]+\\.[\\w.-]+" },
    "Phone Number": { "regex": "(\\d{3})[-.\\s](\\d{3})[-.\\s](\\d{4})" },
    "Credentials": { "keywords": ["password", "username"] },
    "Unusable": {}
}"#;

fn detector() -> PiiDetector {
    PiiDetector::new(80.0)
}

#[test]
fn test_every_category_appears_even_when_empty() {
    let rules = RuleSet::from_json(RULES_JSON).unwrap();
    let findings = detector().detect("completely innocuous text", &rules);

    assert_eq!(findings.len(), 4);
    for category in ["Email", "Phone Number", "Credentials", "Unusable"] {
        assert!(
            findings.contains_key(category),
            "missing category {category}"
        );
        assert!(findings[category].is_empty());
    }
}

#[test]
fn test_regex_detection_is_idempotent_and_order_independent() {
    let rules = RuleSet::from_json(RULES_JSON).unwrap();
    let text = "a@b.co c@d.co a@b.co and 555 123 4567";

    let first = detector().detect(text, &rules);
    let second = detector().detect(text, &rules);

    assert_eq!(first, second);
    assert_eq!(first["Email"].len(), 2);
}

#[test]
fn test_fuzzy_normalization_matches_punctuated_token() {
    let rules = RuleSet::from_json(RULES_JSON).unwrap();

    // "PASSWORD," normalizes to "password": similarity 100, well above 80
    assert_eq!(similarity("password", "password"), 100.0);

    let findings = detector().detect("enter your PASSWORD, here", &rules);
    assert!(findings["Credentials"].contains("PASSWORD,"));
}

#[test]
fn test_fuzzy_prefix_is_not_a_match() {
    let rules = RuleSet::from_json(RULES_JSON).unwrap();

    // "pass" scores well under 80 against "password"
    assert!(similarity("pass", "password") < 80.0);

    let findings = detector().detect("pass this along", &rules);
    assert!(findings["Credentials"].is_empty());
}

#[test]
fn test_short_tokens_are_excluded_from_keyword_matching() {
    let rules = RuleSet::from_json(r#"{ "K": { "keywords": ["pw"] } }"#).unwrap();

    // Single-character tokens never reach the matcher, even with a
    // permissive threshold
    let findings = PiiDetector::new(0.0).detect("p w p w", &rules);
    assert!(findings["K"].is_empty());
}

#[test]
fn test_phone_capture_groups_are_flattened() {
    let rules = RuleSet::from_json(RULES_JSON).unwrap();
    let findings = detector().detect("call 555-123-4567 today", &rules);

    // The pattern separates the number into groups; every group is collected
    let phone = &findings["Phone Number"];
    assert!(phone.contains("555"));
    assert!(phone.contains("123"));
    assert!(phone.contains("4567"));
}

#[test]
fn test_matched_values_keep_original_case() {
    let rules = RuleSet::from_json(RULES_JSON).unwrap();
    let findings = detector().detect("USERNAME: admin", &rules);

    assert!(findings["Credentials"].contains("USERNAME:"));
    assert!(!findings["Credentials"].contains("username:"));
}

#[test]
fn test_threshold_is_tunable() {
    let rules = RuleSet::from_json(r#"{ "K": { "keywords": ["password"] } }"#).unwrap();
    let text = "passwort";

    // Above 80 with the default threshold...
    let relaxed = PiiDetector::new(80.0).detect(text, &rules);
    assert!(!relaxed["K"].is_empty());

    // ...but a stricter configuration rejects it
    let strict = PiiDetector::new(95.0).detect(text, &rules);
    assert!(strict["K"].is_empty());
}
