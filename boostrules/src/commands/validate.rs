//! `validate` command: shape-checks an existing rule import document.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use boostrules_core::validate_shape;

use crate::commands::{success_msg, warn_msg};
use crate::ui::theme::ThemeMap;

/// Checks the document at `path` and returns its rule count.
pub fn run_validate(path: &Path, quiet: bool, theme: &ThemeMap) -> Result<usize> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule document {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let count = validate_shape(&value)
        .with_context(|| format!("{} is not a valid rule document", path.display()))?;
    debug!("Validated {} rules in {}", count, path.display());

    if !quiet {
        for key in ["version", "date"] {
            if value.get(key).and_then(serde_json::Value::as_str).is_none() {
                warn_msg(format!("Document has no `{}` string.", key), theme);
            }
        }
        success_msg(format!("{} is valid: {} rules.", path.display(), count), theme);
    }
    Ok(count)
}
