//! File emitters for generated outputs.
//!
//! - `resource`: flat `key=value` files, one per language
//! - `java`: the key-constant source file
//! - `symbol`: constant names derived from message keys

pub mod java;
pub mod resource;
pub mod symbol;

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Overwrite `path` with `content`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");

    Ok(())
}
