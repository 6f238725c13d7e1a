//! Configuration management for `boostrules-core`.
//!
//! This module defines the data structures that drive rule generation: which
//! CSV columns are extracted into which taxonomy attributes, and which
//! attributes produce rule groups (label, priority and action parameters).
//! It handles YAML deserialization and provides utilities for loading and
//! validating these configs.
//!
//! The built-in defaults reproduce the stock import exactly: brand rules at
//! priority 20 followed by caliber rules at priority 10, six bestselling
//! related products each.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::BoostRulesError;

/// Version tag written into the document envelope by default.
pub const DEFAULT_DOCUMENT_VERSION: &str = "1.0.2";

/// Default number of related products surfaced by an action.
pub const DEFAULT_ACTION_LIMIT: u32 = 6;

/// Default ordering strategy for related products.
pub const DEFAULT_ACTION_ORDERBY: &str = "bestselling";

/// Ordering keys accepted by the plugin's action editor.
pub const ORDERBY_KEYS: &[&str] = &["rand", "date", "price", "price_desc", "bestselling", "rating"];

/// Maps one CSV column to the taxonomy attribute its values belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct AttributeMapping {
    /// Header name in the product export (e.g. `attribute:pa_manufacturer`).
    pub column: String,
    /// Taxonomy identifier (e.g. `pa_manufacturer`).
    pub taxonomy: String,
}

impl AttributeMapping {
    pub fn new(column: impl Into<String>, taxonomy: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            taxonomy: taxonomy.into(),
        }
    }
}

/// Describes how one extracted attribute is turned into rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleGroup {
    /// Taxonomy attribute the rules match on and pull related products from.
    pub attribute: String,
    /// Prefix of the rule display name (`"<label>: <raw value>"`).
    pub label: String,
    /// Rule priority; higher priorities are evaluated first by the plugin.
    pub priority: i64,
    /// 1 = enabled, 0 = disabled.
    pub status: u8,
    /// Maximum number of related products.
    pub limit: u32,
    /// Ordering strategy for related products.
    pub orderby: String,
}

impl Default for RuleGroup {
    fn default() -> Self {
        Self {
            attribute: String::new(),
            label: String::new(),
            priority: 10,
            status: 1,
            limit: DEFAULT_ACTION_LIMIT,
            orderby: DEFAULT_ACTION_ORDERBY.to_string(),
        }
    }
}

impl RuleGroup {
    pub fn new(attribute: impl Into<String>, label: impl Into<String>, priority: i64) -> Self {
        Self {
            attribute: attribute.into(),
            label: label.into(),
            priority,
            ..Self::default()
        }
    }
}

/// Top-level generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Version tag written into the document envelope.
    pub version: String,
    /// Generation date; `None` means today (local time).
    pub date: Option<NaiveDate>,
    /// Emit rules in lexicographic order of the raw values.
    pub sort_values: bool,
    /// Accept rows whose field count differs from the header. When false,
    /// such a row aborts the run with a malformed-row error.
    pub flexible_rows: bool,
    /// Columns to extract.
    pub attributes: Vec<AttributeMapping>,
    /// Rule groups, emitted in this order.
    pub groups: Vec<RuleGroup>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_DOCUMENT_VERSION.to_string(),
            date: None,
            sort_values: true,
            flexible_rows: true,
            attributes: vec![
                AttributeMapping::new("attribute:pa_caliber-gauge", "pa_caliber-gauge"),
                AttributeMapping::new("attribute:pa_manufacturer", "pa_manufacturer"),
                AttributeMapping::new("attribute:pa_brand-fit", "pa_brand-fit"),
                AttributeMapping::new("attribute:pa_model-fit", "pa_model-fit"),
            ],
            groups: vec![
                RuleGroup::new("pa_manufacturer", "Brand", 20),
                RuleGroup::new("pa_caliber-gauge", "Caliber", 10),
            ],
        }
    }
}

impl GeneratorConfig {
    /// Loads the generator configuration from a YAML file.
    ///
    /// Fields missing from the file keep their built-in defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading generator config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GeneratorConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded {} attribute mappings and {} rule groups from {}.",
            config.attributes.len(),
            config.groups.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads the built-in configuration from the embedded YAML.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default generator config from embedded string...");
        let default_yaml = include_str!("../config/default_generator.yaml");
        let config: GeneratorConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default generator config")?;
        debug!(
            "Loaded default config: {} attributes, {} groups.",
            config.attributes.len(),
            config.groups.len()
        );
        Ok(config)
    }

    /// The date written into the envelope.
    pub fn resolve_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Checks the configuration for inconsistencies, reporting all of them at once.
    pub fn validate(&self) -> std::result::Result<(), BoostRulesError> {
        let mut errors = Vec::new();

        if self.version.trim().is_empty() {
            errors.push("`version` cannot be empty.".to_string());
        }

        if self.attributes.is_empty() {
            errors.push("At least one attribute mapping is required.".to_string());
        }

        let mut taxonomies = HashSet::new();
        for mapping in &self.attributes {
            if mapping.column.trim().is_empty() {
                errors.push(format!("Attribute '{}' has an empty `column`.", mapping.taxonomy));
            }
            if mapping.taxonomy.trim().is_empty() {
                errors.push(format!("Column '{}' has an empty `taxonomy`.", mapping.column));
            } else if !taxonomies.insert(mapping.taxonomy.as_str()) {
                errors.push(format!("Duplicate taxonomy found: '{}'.", mapping.taxonomy));
            }
        }

        let mut grouped = HashSet::new();
        for group in &self.groups {
            if !taxonomies.contains(group.attribute.as_str()) {
                errors.push(format!(
                    "Rule group '{}' references attribute '{}' which is not extracted.",
                    group.label, group.attribute
                ));
            }
            if !grouped.insert(group.attribute.as_str()) {
                errors.push(format!("Duplicate rule group for attribute '{}'.", group.attribute));
            }
            if group.label.trim().is_empty() {
                errors.push(format!("Rule group '{}' has an empty `label`.", group.attribute));
            }
            if group.status > 1 {
                errors.push(format!(
                    "Rule group '{}': status must be 0 or 1, got {}.",
                    group.attribute, group.status
                ));
            }
            if group.limit == 0 {
                errors.push(format!("Rule group '{}': limit must be greater than 0.", group.attribute));
            }
            if !ORDERBY_KEYS.contains(&group.orderby.as_str()) {
                errors.push(format!(
                    "Rule group '{}': unknown orderby '{}' (expected one of: {}).",
                    group.attribute,
                    group.orderby,
                    ORDERBY_KEYS.join(", ")
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(BoostRulesError::InvalidConfig(errors.join("\n")))
        }
    }
}
