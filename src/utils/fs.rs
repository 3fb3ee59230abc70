//! File system utilities

use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Create parent directories for a file path if they don't exist
pub fn create_parent_directories(system: &dyn System, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent()
        && parent != Path::new("")
        && !system.exists(parent)
    {
        system.create_dir_all(parent).with_context(|| {
            format!(
                "Failed to create parent directories for: {}",
                file_path.display()
            )
        })?;
    }
    Ok(())
}
