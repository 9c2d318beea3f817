//! Host application adapter.
//!
//! A host calls [`on_startup`] once when it boots and [`detect_changes`]
//! whenever it polls for source changes. Both regenerate from
//! [`HostSettings`] when the origin file is newer than the generated
//! messages file, and never fail: problems are logged and reported in the
//! returned outcome so host startup continues.

use std::{fs, path::Path, time::SystemTime};

use tracing::{error, info, warn};

use crate::{
    config::{HostSettings, load_settings},
    generator::{GenerationReport, run, should_regenerate},
    issues::Severity,
};

#[derive(Debug)]
pub enum HookOutcome {
    /// The origin or the messages file does not exist.
    Skipped,
    /// The messages file is newer than the origin.
    UpToDate,
    Regenerated(GenerationReport),
    /// Generation failed; the message describes why.
    Failed(String),
}

impl HookOutcome {
    pub fn is_regenerated(&self) -> bool {
        matches!(self, HookOutcome::Regenerated(_))
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Regenerate unless the messages file is strictly newer than the origin.
pub fn on_startup(root: &Path, settings: &HostSettings) -> HookOutcome {
    let (Some(output_modified), Some(origin_modified)) = (
        modified(&settings.messages_path(root)),
        modified(&settings.origin_path(root)),
    ) else {
        return HookOutcome::Skipped;
    };

    if !should_regenerate(origin_modified, output_modified) {
        return HookOutcome::UpToDate;
    }

    regenerate(root, settings)
}

/// [`on_startup`] with settings discovered from `start_dir`.
///
/// Settings come from the nearest settings file, or the defaults when there
/// is none. An unreadable settings file is reported like a failed run.
pub fn on_startup_in(start_dir: &Path) -> HookOutcome {
    match load_settings(start_dir) {
        Ok(loaded) => on_startup(&loaded.root, &loaded.settings),
        Err(err) => {
            warn!("failed to load settings: {:#}", err);
            HookOutcome::Failed(format!("{:#}", err))
        }
    }
}

/// Regenerate when the messages file is strictly older than the origin.
///
/// Returns `true` when a regeneration was attempted.
pub fn detect_changes(root: &Path, settings: &HostSettings) -> bool {
    let (Some(output_modified), Some(origin_modified)) = (
        modified(&settings.messages_path(root)),
        modified(&settings.origin_path(root)),
    ) else {
        return false;
    };

    if output_modified < origin_modified {
        on_startup(root, settings);
        return true;
    }
    false
}

fn regenerate(root: &Path, settings: &HostSettings) -> HookOutcome {
    let result = settings.generator_config(root).and_then(run);

    match result {
        Ok(report) => {
            for issue in &report.issues {
                match issue.severity {
                    Severity::Error => error!("{}", issue),
                    Severity::Warning => warn!("{}", issue),
                }
            }
            info!(
                files = report.resource_files.len(),
                source = report.source_file.is_some(),
                "regenerated messages"
            );
            HookOutcome::Regenerated(report)
        }
        Err(err) => {
            warn!("failed to regenerate messages: {:#}", err);
            HookOutcome::Failed(format!("{:#}", err))
        }
    }
}
