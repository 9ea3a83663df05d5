//! PII rule model and loader
//!
//! Rules are loaded once per run from a JSON file, one entry per PII
//! category. Each entry may carry a `"regex"` pattern, a `"keywords"` list,
//! or both. The raw [`RuleSpec`] map is compiled into an immutable
//! [`RuleSet`] that the detector borrows for the whole scan; there is no
//! global rule state.

use crate::domain::errors::DragnetError;
use crate::domain::report::CategoryFindings;
use crate::domain::result::Result;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

/// Raw rule entry as it appears in the rules file
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
    /// Regex pattern for this category
    #[serde(default)]
    pub regex: Option<String>,
    /// Keyword list for fuzzy matching
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

/// Compiled rule for one PII category
#[derive(Debug)]
pub struct Rule {
    /// Category name as it appears in the rules file (e.g. "Email")
    pub category: String,
    /// Compiled regex pattern, if the rule has one
    pub regex: Option<Regex>,
    /// Lowercased keywords, if the rule has any
    pub keywords: Vec<String>,
}

/// Immutable set of compiled rules, loaded once per scan run
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Load and compile rules from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`DragnetError::Rules`] if the file is missing, is not valid
    /// JSON, or contains an invalid regex. All of these are fatal at startup:
    /// a scan cannot proceed without rules.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DragnetError::Rules(format!("Failed to read rules file {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Compile rules from JSON content
    pub fn from_json(content: &str) -> Result<Self> {
        let specs: BTreeMap<String, RuleSpec> = serde_json::from_str(content)
            .map_err(|e| DragnetError::Rules(format!("Failed to parse rules JSON: {e}")))?;

        let mut rules = Vec::with_capacity(specs.len());
        for (category, spec) in specs {
            let regex = match &spec.regex {
                Some(pattern) => Some(Regex::new(pattern).map_err(|e| {
                    DragnetError::Rules(format!(
                        "Invalid regex in category '{category}': {e}"
                    ))
                })?),
                None => None,
            };

            let keywords: Vec<String> = spec
                .keywords
                .unwrap_or_default()
                .iter()
                .map(|k| k.to_lowercase())
                .collect();

            if regex.is_none() && keywords.is_empty() {
                tracing::warn!(
                    category = %category,
                    "Rule has neither a regex nor keywords and will never match"
                );
            }

            rules.push(Rule {
                category,
                regex,
                keywords,
            });
        }

        Ok(Self { rules })
    }

    /// Iterate over the compiled rules
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of configured categories
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Category names in the rule set
    pub fn categories(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.category.as_str()).collect()
    }

    /// A findings map with every configured category mapped to an empty set
    ///
    /// Used both as the detector's starting point and as the recorded entry
    /// for files whose extraction failed; callers rely on every category
    /// being present.
    pub fn empty_findings(&self) -> CategoryFindings {
        self.rules
            .iter()
            .map(|r| (r.category.clone(), BTreeSet::new()))
            .collect()
    }
}
