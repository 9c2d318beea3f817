use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::emit::java::SOURCE_EXTENSION;

pub const SETTINGS_FILE_NAME: &str = ".resgenrc.json";

/// Everything a single generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub base_name: String,
    /// Path of the generated source file, if one should be written.
    pub source_file: Option<PathBuf>,
    /// Package declared at the top of the generated source file.
    pub namespace: Option<String>,
    /// Language whose text documents the generated constants.
    pub comment_language: Option<String>,
    /// Reject a source file without a package. Hosts may generate a class
    /// in the default package.
    pub package_required: bool,
}

impl GeneratorConfig {
    /// Build a configuration for `input_file`, filling in defaults.
    ///
    /// - `output_dir` defaults to the directory containing the input.
    /// - `base_name` defaults to the input file name up to its first `.`.
    ///   When the name has no `.` it is used whole, which is only allowed
    ///   together with an explicit `output_dir` so the input is never
    ///   overwritten.
    pub fn from_input(
        input_file: impl Into<PathBuf>,
        output_dir: Option<PathBuf>,
        base_name: Option<String>,
    ) -> Result<Self> {
        let input_file = input_file.into();

        let base_name = match base_name {
            Some(name) => name,
            None => {
                let Some(file_name) = input_file.file_name().and_then(|name| name.to_str())
                else {
                    bail!("Invalid input file name: {}", input_file.display());
                };
                match file_name.split_once('.') {
                    Some((stem, _)) => stem.to_string(),
                    None if output_dir.is_some() => file_name.to_string(),
                    None => bail!(
                        "Cannot derive an output name from \"{}\"; set --outputDir or --outputFile",
                        file_name
                    ),
                }
            }
        };

        let output_dir = output_dir.unwrap_or_else(|| {
            input_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        });

        Ok(Self {
            input_file,
            output_dir,
            base_name,
            source_file: None,
            namespace: None,
            comment_language: None,
            package_required: true,
        })
    }

    pub fn with_source(mut self, source_file: PathBuf, namespace: Option<String>) -> Self {
        self.source_file = Some(source_file);
        self.namespace = namespace;
        self
    }

    pub fn with_comment_language(mut self, language: Option<String>) -> Self {
        self.comment_language = language;
        self
    }

    pub fn allow_default_package(mut self) -> Self {
        self.package_required = false;
        self
    }

    /// Reject configurations that cannot produce valid output.
    ///
    /// Runs before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.base_name.is_empty() {
            bail!("Output file name must not be empty");
        }
        if self.package_required
            && self.source_file.is_some()
            && self.namespace.as_deref().is_none_or(str::is_empty)
        {
            bail!("A package is required when a source file is generated");
        }
        Ok(())
    }
}

/// Settings a host application uses to drive regeneration.
///
/// Paths are relative to the host's root directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSettings {
    /// Generated default-language resource; also the staleness reference.
    #[serde(default = "default_messages")]
    pub messages: String,
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Fully qualified class name, e.g. `models.Messages`.
    #[serde(default)]
    pub source_class: Option<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_comment_language")]
    pub comment_language: Option<String>,
}

fn default_messages() -> String {
    "conf/messages".to_string()
}

fn default_origin() -> String {
    "conf/messages.origin".to_string()
}

fn default_source_root() -> String {
    "app".to_string()
}

fn default_comment_language() -> Option<String> {
    Some("ja".to_string())
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            messages: default_messages(),
            origin: default_origin(),
            source_class: None,
            source_root: default_source_root(),
            comment_language: default_comment_language(),
        }
    }
}

impl HostSettings {
    pub fn messages_path(&self, root: &Path) -> PathBuf {
        root.join(&self.messages)
    }

    pub fn origin_path(&self, root: &Path) -> PathBuf {
        root.join(&self.origin)
    }

    /// Split `source_class` into the source file path and its package.
    ///
    /// `models.Messages` maps to `<root>/<source_root>/models/Messages.java`
    /// with package `models`; a name without `.` has no package.
    pub fn source_target(&self, root: &Path) -> Option<(PathBuf, Option<String>)> {
        let class = self.source_class.as_deref()?;
        let mut path = root.join(&self.source_root);
        for segment in class.split('.') {
            path.push(segment);
        }
        path.set_extension(SOURCE_EXTENSION);

        let package = class
            .rsplit_once('.')
            .map(|(package, _)| package.to_string())
            .filter(|package| !package.is_empty());
        Some((path, package))
    }

    /// Build the generator configuration these settings describe.
    pub fn generator_config(&self, root: &Path) -> Result<GeneratorConfig> {
        let origin = self.origin_path(root);
        let messages = self.messages_path(root);
        let Some(base_name) = messages.file_name().and_then(|name| name.to_str()) else {
            bail!("Invalid messages path: {}", self.messages);
        };

        // Resources are written next to the origin file.
        let output_dir = origin
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());

        let mut config =
            GeneratorConfig::from_input(origin, Some(output_dir), Some(base_name.to_string()))?
                .with_comment_language(self.comment_language.clone())
                .allow_default_package();
        if let Some((source_file, package)) = self.source_target(root) {
            config = config.with_source(source_file, package);
        }
        Ok(config)
    }
}

pub fn find_settings_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let settings_path = current.join(SETTINGS_FILE_NAME);
        if settings_path.exists() {
            return Some(settings_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading host settings.
pub struct SettingsLoadResult {
    pub settings: HostSettings,
    /// Directory the settings' relative paths resolve against.
    pub root: PathBuf,
    /// True if settings were loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_settings(start_dir: &Path) -> Result<SettingsLoadResult> {
    match find_settings_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings file: {:?}", path))?;
            let settings: HostSettings = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse settings file: {:?}", path))?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(SettingsLoadResult {
                settings,
                root,
                from_file: true,
            })
        }
        None => Ok(SettingsLoadResult {
            settings: HostSettings::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
