//! Flat `key=value` resource files.

use std::path::Path;

use anyhow::Result;

use super::write_file;
use crate::store::LanguageMap;

/// File name of the resource for `language`.
///
/// The default language uses the base name as-is, every other language
/// appends `.<language>`.
pub fn resource_file_name(base_name: &str, language: &str) -> String {
    if language.is_empty() {
        base_name.to_string()
    } else {
        format!("{}.{}", base_name, language)
    }
}

/// Render one `key=value` line per entry, in key order.
pub fn render_resource(map: &LanguageMap) -> String {
    let mut content = String::new();
    for (key, value) in map {
        content.push_str(key);
        content.push('=');
        content.push_str(value);
        content.push('\n');
    }
    content
}

pub fn write_resource(path: &Path, map: &LanguageMap) -> Result<()> {
    write_file(path, &render_resource(map))
}
