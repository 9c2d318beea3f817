//! Java source file exposing every message key as a `String` constant.
//!
//! The class name comes from the target file name; each constant is
//! documented with the message text so IDEs show it on hover.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::{symbol::to_constant_name, write_file};
use crate::store::LanguageMap;

pub const SOURCE_EXTENSION: &str = "java";

/// Where the generated class goes and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaTarget {
    pub class_name: String,
    pub path: PathBuf,
}

impl JavaTarget {
    /// Derive the class name from the portion of the file name before the
    /// first `.`. A file name without any `.` is used whole and the file
    /// gets a `.java` extension.
    pub fn resolve(path: &Path) -> Result<Self> {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            bail!("Invalid source file path: {}", path.display());
        };

        let target = match file_name.split_once('.') {
            Some((class_name, _)) => Self {
                class_name: class_name.to_string(),
                path: path.to_path_buf(),
            },
            None => Self {
                class_name: file_name.to_string(),
                path: path.with_file_name(format!("{}.{}", file_name, SOURCE_EXTENSION)),
            },
        };

        if target.class_name.is_empty() {
            bail!("Cannot derive a class name from: {}", path.display());
        }
        Ok(target)
    }
}

/// Render the class source.
///
/// Constants follow the key order of `base`. The comment text comes from
/// `display`, falling back to the base text for keys `display` lacks.
pub fn render_java(
    class_name: &str,
    package: Option<&str>,
    display: &LanguageMap,
    base: &LanguageMap,
) -> String {
    let mut out = String::new();

    if let Some(package) = package {
        out.push_str(&format!("package {};\n\n", package));
    }
    out.push_str(&format!("public class {} {{\n\n", class_name));

    for (key, base_text) in base {
        let text = display.get(key).unwrap_or(base_text);
        out.push_str(&format!(
            "\t/** {} */\n\tpublic static final String {} = \"{}\";\n\n",
            escape_doc(text),
            to_constant_name(key),
            escape_literal(key)
        ));
    }

    out.push_str("}\n");
    out
}

/// Resolve the target, render and write it. Returns the path written.
pub fn write_java(
    path: &Path,
    package: Option<&str>,
    display: &LanguageMap,
    base: &LanguageMap,
) -> Result<PathBuf> {
    let target = JavaTarget::resolve(path)?;
    let content = render_java(&target.class_name, package, display, base);
    write_file(&target.path, &content)?;
    Ok(target.path)
}

/// Keep `*/` in message text from closing the doc comment early.
fn escape_doc(text: &str) -> String {
    text.replace("*/", "*&#47;")
}

fn escape_literal(key: &str) -> String {
    key.replace('\\', "\\\\").replace('"', "\\\"")
}
