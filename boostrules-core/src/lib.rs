// boostrules-core/src/lib.rs
//! # boostrules Core Library
//!
//! `boostrules-core` turns a product export spreadsheet into a related-product
//! rule import for the WooBooster merchandising plugin. It extracts distinct
//! taxonomy values (manufacturer, caliber/gauge), normalizes them into term
//! slugs and builds one display rule per value.
//!
//! The library is pure and stateless apart from the explicit file helpers:
//! the core entry point takes any reader and returns the finished document.
//!
//! ## Modules
//!
//! * `config`: `GeneratorConfig`, the attribute mappings and rule groups driving a run.
//! * `extractor`: Reads the CSV export and collects unique values per attribute.
//! * `sanitizers`: Slug normalization for attribute values.
//! * `builder`: Builds rules from extracted values.
//! * `document`: The serialized rule document and its shape checks.
//! * `generator`: One-shot wrappers running the whole pipeline.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use boostrules_core::{generate_document, GeneratorConfig};
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), boostrules_core::BoostRulesError> {
//!     let csv = "ID,attribute:pa_manufacturer,attribute:pa_caliber-gauge\n\
//!                1,Acme Corp,9mm\n";
//!
//!     let config = GeneratorConfig {
//!         date: NaiveDate::from_ymd_opt(2026, 2, 18),
//!         ..GeneratorConfig::default()
//!     };
//!     let generation = generate_document(csv.as_bytes(), &config)?;
//!
//!     assert_eq!(generation.rule_count(), 2);
//!     assert_eq!(generation.document.rules[0].name, "Brand: Acme Corp");
//!     println!("{}", generation.document.to_json_pretty()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`BoostRulesError`], which separates a missing
//! input file, undecodable input, malformed rows and output failures.
//! Configuration loading uses `anyhow` for context-rich messages.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod builder;
pub mod config;
pub mod document;
pub mod errors;
pub mod extractor;
pub mod generator;
pub mod sanitizers;

/// Re-exports the generator configuration types.
pub use config::{
    AttributeMapping,
    GeneratorConfig,
    RuleGroup,
    DEFAULT_ACTION_LIMIT,
    DEFAULT_ACTION_ORDERBY,
    DEFAULT_DOCUMENT_VERSION,
    ORDERBY_KEYS,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::BoostRulesError;

/// Re-exports the extraction stage.
pub use extractor::{extract_values, split_cell, AttributeValues, ExtractedValues};

/// Re-exports the slug sanitizer.
pub use sanitizers::slug::sanitize_slug;

/// Re-exports the rule builder and document model.
pub use builder::{build_document, build_rule, build_rules, GroupSummary};
pub use document::{validate_shape, Action, Condition, Rule, RuleDocument};

/// Re-exports types and functions for one-shot use.
pub use generator::{generate_document, generate_from_path, Generation};
