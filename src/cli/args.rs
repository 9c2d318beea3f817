//! CLI argument definitions using clap.
//!
//! The historical single-dash long flags (`-outputDir DIR`) are rewritten to
//! their double-dash form by [`normalize_legacy_flags`] before clap sees them.

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

/// Long flags that are also accepted with a single leading dash.
const LEGACY_FLAGS: &[&str] = &[
    "-outputDir",
    "-outputFile",
    "-javaFile",
    "-javaPackage",
    "-comment",
];

#[derive(Debug, Parser)]
#[command(name = "resgen", author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory for the generated resource files (default: the input file's directory)
    #[arg(long = "outputDir", visible_alias = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Base name of the generated resource files (default: input file name up to its first '.')
    #[arg(long = "outputFile", visible_alias = "output-file", value_name = "BASENAME")]
    pub output_file: Option<String>,

    /// Generate a Java class with one constant per message key
    #[arg(
        long = "javaFile",
        visible_alias = "java-file",
        value_name = "PATH",
        requires = "java_package"
    )]
    pub java_file: Option<PathBuf>,

    /// Package of the generated Java class (required with --javaFile)
    #[arg(long = "javaPackage", visible_alias = "java-package", value_name = "PKG")]
    pub java_package: Option<String>,

    /// Language whose text documents the generated constants (default: the default language)
    #[arg(long = "comment", value_name = "LANG")]
    pub comment: Option<String>,

    /// Do nothing if the default-language output is newer than the input
    #[arg(long)]
    pub if_stale: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Origin file to generate from
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Rewrite `-outputDir` style flags to `--outputDir`.
///
/// Arguments after a literal `--` are left untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut escaped = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if escaped {
                return arg;
            }
            if arg == "--" {
                escaped = true;
                return arg;
            }
            match arg.to_str() {
                Some(flag) if LEGACY_FLAGS.contains(&flag) => OsString::from(format!("-{}", flag)),
                _ => arg,
            }
        })
        .collect()
}
