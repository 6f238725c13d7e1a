//! `generator.rs`
//! One-shot entry points that run the whole pipeline: extract, sanitize, build.
//!
//! [`generate_document`] is the pure core: it takes any reader and returns the
//! document without touching the filesystem. [`generate_from_path`] adds input
//! path handling on top of it.

use log::info;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::builder::{build_document, GroupSummary};
use crate::config::GeneratorConfig;
use crate::document::RuleDocument;
use crate::errors::Result;
use crate::extractor::{extract_values, open_input, ExtractedValues};

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct Generation {
    pub document: RuleDocument,
    pub extracted: ExtractedValues,
    pub groups: Vec<GroupSummary>,
}

impl Generation {
    pub fn rule_count(&self) -> usize {
        self.document.rules.len()
    }
}

/// Runs the pipeline over an already opened export.
///
/// The configuration is validated first; the input is fully drained before
/// the document is built.
pub fn generate_document<R: Read>(reader: R, config: &GeneratorConfig) -> Result<Generation> {
    config.validate()?;
    let extracted = extract_values(reader, &config.attributes, config.flexible_rows)?;
    let (document, groups) = build_document(&extracted, config);
    info!("Generated {} rules.", document.rules.len());
    Ok(Generation {
        document,
        extracted,
        groups,
    })
}

/// Opens the export at `path` and runs the pipeline over it.
pub fn generate_from_path(path: &Path, config: &GeneratorConfig) -> Result<Generation> {
    info!("Reading CSV: {}", path.display());
    let file = open_input(path)?;
    generate_document(BufReader::new(file), config)
}
