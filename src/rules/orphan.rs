//! Orphan key detection.
//!
//! Detects keys that a language override defines but the default
//! language does not.

use crate::{issues::Issue, store::LanguageMap};

/// Check every override against the default-language mapping.
///
/// `overrides` yields `(language, map)` pairs and must not contain the
/// default language itself.
pub fn check_orphan_keys<'a>(
    base: &LanguageMap,
    overrides: impl IntoIterator<Item = (&'a str, &'a LanguageMap)>,
) -> Vec<Issue> {
    let mut issues: Vec<Issue> = overrides
        .into_iter()
        .flat_map(|(language, map)| {
            map.keys()
                .filter(move |key| !base.contains_key(*key))
                .map(move |key| Issue::orphan_key(language, key))
        })
        .collect();

    issues.sort();
    issues
}
