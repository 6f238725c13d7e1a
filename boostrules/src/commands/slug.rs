//! `slug` command: prints the term slug for each value, one per line.

use anyhow::Result;
use std::io::Write;

use boostrules_core::sanitize_slug;

pub fn run_slug<W: Write>(values: &[String], writer: &mut W) -> Result<()> {
    for value in values {
        writeln!(writer, "{}", sanitize_slug(value))?;
    }
    Ok(())
}
