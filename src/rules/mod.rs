//! Validation rules run over an [`EntryStore`] before anything is emitted.
//!
//! Every finding is advisory; generation always proceeds.
//!
//! - `orphan`: override keys that the default language does not define

pub mod orphan;

use crate::{issues::Issue, store::EntryStore};

/// Cross-check the store against its default-language mapping.
///
/// Without a default mapping there is nothing to check against, so a single
/// [`Issue::missing_default`] is returned instead of per-key findings.
pub fn validate(store: &EntryStore) -> Vec<Issue> {
    match store.base_map() {
        Some(base) => orphan::check_orphan_keys(base, store.overrides()),
        None => vec![Issue::missing_default()],
    }
}
