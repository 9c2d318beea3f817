//! Issue types reported by a generation run.
//!
//! Issues are advisory: they never stop a run. Fatal problems (I/O,
//! configuration) are returned as errors instead.

use std::{cmp::Ordering, fmt};

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    /// The origin file has no default-language entries.
    MissingDefault,
    /// A language override defines a key the default language lacks.
    OrphanKey,
    /// The requested comment language has no entries.
    MissingCommentLanguage,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingDefault => write!(f, "missing-default"),
            Rule::OrphanKey => write!(f, "orphan-key"),
            Rule::MissingCommentLanguage => write!(f, "missing-comment-language"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub rule: Rule,
    pub severity: Severity,
    pub language: Option<String>,
    pub key: Option<String>,
}

impl Issue {
    pub fn missing_default() -> Self {
        Self {
            rule: Rule::MissingDefault,
            severity: Severity::Warning,
            language: None,
            key: None,
        }
    }

    pub fn orphan_key(language: &str, key: &str) -> Self {
        Self {
            rule: Rule::OrphanKey,
            severity: Severity::Warning,
            language: Some(language.to_string()),
            key: Some(key.to_string()),
        }
    }

    pub fn missing_comment_language(language: &str) -> Self {
        Self {
            rule: Rule::MissingCommentLanguage,
            severity: Severity::Error,
            language: Some(language.to_string()),
            key: None,
        }
    }

    /// Human readable description, without severity or rule name.
    pub fn message(&self) -> String {
        match self.rule {
            Rule::MissingDefault => "default resource not found".to_string(),
            Rule::OrphanKey => format!(
                "default resource not defined: lang={}, key={}",
                self.language.as_deref().unwrap_or_default(),
                self.key.as_deref().unwrap_or_default()
            ),
            Rule::MissingCommentLanguage => format!(
                "resource not found: lang={}",
                self.language.as_deref().unwrap_or_default()
            ),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.severity, self.message(), self.rule)
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rule
            .cmp(&other.rule)
            .then_with(|| self.language.cmp(&other.language))
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
