//! Generation driver: parse → validate → emit.
//!
//! One run reads the whole origin file, reports advisory issues, rewrites
//! every per-language resource and, when configured, the key-constant
//! source file. Outputs are always rewritten in full.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};

use anyhow::{Context, Result};

use crate::{
    config::GeneratorConfig,
    emit::{
        java::write_java,
        resource::{resource_file_name, write_resource},
    },
    issues::{Issue, Severity},
    rules::validate,
    store::EntryStore,
};

/// Outcome of a successful run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Advisory issues, sorted.
    pub issues: Vec<Issue>,
    /// Resource files written, in language order.
    pub resource_files: Vec<PathBuf>,
    /// Source file written, if any.
    pub source_file: Option<PathBuf>,
}

impl GenerationReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Whether outputs last modified at `output_modified` are stale relative to
/// an origin modified at `origin_modified`. Equal timestamps count as stale.
pub fn should_regenerate(origin_modified: SystemTime, output_modified: SystemTime) -> bool {
    output_modified <= origin_modified
}

/// Compare modification times on disk.
///
/// A missing output is always stale; a missing origin is an error.
pub fn is_stale(origin: &Path, output: &Path) -> Result<bool> {
    let origin_modified = modified(origin)?;
    match modified(output) {
        Ok(output_modified) => Ok(should_regenerate(origin_modified, output_modified)),
        Err(err)
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|err| err.kind() == io::ErrorKind::NotFound) =>
        {
            Ok(true)
        }
        Err(err) => Err(err),
    }
}

fn modified(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .with_context(|| format!("Failed to read modification time: {}", path.display()))
}

#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Validate `config` up front so a bad configuration never touches disk.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Read the configured origin file and generate every output.
    pub fn run(&self) -> Result<GenerationReport> {
        let store = EntryStore::read_from(&self.config.input_file)?;
        self.generate(&store)
    }

    /// Generate every output from an already populated store.
    pub fn generate(&self, store: &EntryStore) -> Result<GenerationReport> {
        let config = &self.config;
        let mut report = GenerationReport {
            issues: validate(store),
            ..Default::default()
        };

        for language in store.languages() {
            let Some(map) = store.map(language) else {
                continue;
            };
            let path = config
                .output_dir
                .join(resource_file_name(&config.base_name, language));
            write_resource(&path, map)?;
            report.resource_files.push(path);
        }

        if let Some(source_file) = &config.source_file {
            let base = store.base_map().cloned().unwrap_or_default();
            let display = match config.comment_language.as_deref() {
                Some(language) => store.map(language),
                None => Some(&base),
            };

            match display {
                Some(display) => {
                    let written =
                        write_java(source_file, config.namespace.as_deref(), display, &base)?;
                    report.source_file = Some(written);
                }
                None => {
                    let language = config.comment_language.as_deref().unwrap_or_default();
                    report.issues.push(Issue::missing_comment_language(language));
                }
            }
        }

        report.issues.sort();
        Ok(report)
    }
}

/// Validate `config` and run a single generation.
pub fn run(config: GeneratorConfig) -> Result<GenerationReport> {
    Generator::new(config)?.run()
}
