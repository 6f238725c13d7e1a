//! document.rs - The rule import document and its JSON serialization.
//!
//! The layout mirrors what the merchandising plugin's importer reads:
//! a `{ version, date, rules }` envelope where each rule carries its
//! condition groups keyed by group index (`"0"`) and a list of actions.
//! Documents are written with 4-space indentation.
//!
//! License: MIT OR APACHE 2.0

use chrono::NaiveDate;
use fs2::FileExt;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::errors::{BoostRulesError, Result};

const OUTPUT_TMP_SUFFIX: &str = ".tmp";

/// A single match condition on a product attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub condition_attribute: String,
    pub condition_value: String,
    /// Whether descendant terms also match (0 or 1).
    pub include_children: u8,
}

/// What to display when a rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Where related products come from; always `attribute` here.
    pub action_source: String,
    /// Attribute whose shared value selects related products.
    pub action_value: String,
    pub action_limit: u32,
    pub action_orderby: String,
}

/// A related-product display rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub priority: i64,
    pub status: u8,
    /// Condition groups keyed by group index; serialized with string keys.
    pub conditions: BTreeMap<u32, Vec<Condition>>,
    pub actions: Vec<Action>,
}

/// The envelope written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDocument {
    pub version: String,
    pub date: NaiveDate,
    pub rules: Vec<Rule>,
}

impl RuleDocument {
    pub fn new(version: impl Into<String>, date: NaiveDate, rules: Vec<Rule>) -> Self {
        Self {
            version: version.into(),
            date,
            rules,
        }
    }

    /// Serializes the document as JSON indented with four spaces.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        // serde_json only emits valid UTF-8.
        String::from_utf8(buf).map_err(|e| BoostRulesError::InvalidDocument(e.to_string()))
    }

    /// Writes the document as JSON indented with four spaces. No trailing newline.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }

    /// Writes the document to `path`, replacing any previous content.
    ///
    /// The JSON goes to a sibling temporary file held under an exclusive lock
    /// and is renamed over `path` once complete.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        let write_err = |source: std::io::Error| BoostRulesError::OutputWrite {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(OUTPUT_TMP_SUFFIX);
        let tmp_path = path.with_file_name(tmp_name);
        debug!("Writing {} bytes to {}", json.len(), tmp_path.display());
        let written = Self::write_locked(&tmp_path, json.as_bytes())
            .and_then(|()| fs::rename(&tmp_path, path));
        if let Err(source) = written {
            if tmp_path.exists() {
                if let Err(e) = fs::remove_file(&tmp_path) {
                    debug!("Could not remove {}: {}", tmp_path.display(), e);
                }
            }
            return Err(write_err(source));
        }

        info!("Saved {} rules to {}", self.rules.len(), path.display());
        Ok(())
    }

    fn write_locked(tmp_path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut tmp = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(tmp_path)?;
        tmp.lock_exclusive()?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        FileExt::unlock(&tmp)
    }

    /// Parses a document previously written by [`RuleDocument::save`] or exported by the plugin.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        validate_shape(&value)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Checks the structure the plugin importer relies on without deserializing
/// into the typed model, so every problem can be reported by rule index.
pub fn validate_shape(value: &serde_json::Value) -> Result<usize> {
    use serde_json::Value;

    let rules = value
        .get("rules")
        .and_then(Value::as_array)
        .ok_or_else(|| BoostRulesError::InvalidDocument("missing `rules` array".to_string()))?;

    let mut errors = Vec::new();
    for (i, rule) in rules.iter().enumerate() {
        let name = rule.get("name").and_then(Value::as_str).unwrap_or("");
        if name.trim().is_empty() {
            errors.push(format!("rule #{i}: missing or empty `name`"));
        }

        match rule.get("conditions") {
            Some(Value::Object(groups)) => {
                for (group_id, group) in groups {
                    if group_id.parse::<u32>().is_err() {
                        errors.push(format!("rule #{i}: condition group key '{group_id}' is not an index"));
                    }
                    check_conditions(i, group, &mut errors);
                }
            }
            Some(Value::Array(groups)) => {
                for group in groups {
                    check_conditions(i, group, &mut errors);
                }
            }
            Some(_) => errors.push(format!("rule #{i}: `conditions` must be an object or array")),
            None => errors.push(format!("rule #{i}: missing `conditions`")),
        }

        match rule.get("actions").and_then(Value::as_array) {
            Some(actions) => {
                for (j, action) in actions.iter().enumerate() {
                    if !action.is_object() {
                        errors.push(format!("rule #{i} action #{j}: must be an object"));
                        continue;
                    }
                    // Missing fields fall back to the importer's defaults.
                    for key in ["action_source", "action_value", "action_orderby"] {
                        if action.get(key).is_some_and(|v| !v.is_string()) {
                            errors.push(format!("rule #{i} action #{j}: `{key}` must be a string"));
                        }
                    }
                    if let Some(limit) = action.get("action_limit") {
                        if !is_limit(limit) {
                            errors.push(format!("rule #{i} action #{j}: `action_limit` must be a number"));
                        }
                    }
                }
            }
            None => errors.push(format!("rule #{i}: missing `actions` array")),
        }
    }

    if errors.is_empty() {
        Ok(rules.len())
    } else {
        Err(BoostRulesError::InvalidDocument(errors.join("\n")))
    }
}

/// The importer coerces limits with `absint`, so numeric strings are accepted.
fn is_limit(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Number(_) => true,
        serde_json::Value::String(s) => s.trim().parse::<f64>().is_ok(),
        _ => false,
    }
}

fn check_conditions(rule_index: usize, group: &serde_json::Value, errors: &mut Vec<String>) {
    let Some(conditions) = group.as_array() else {
        errors.push(format!("rule #{rule_index}: condition group must be an array"));
        return;
    };
    for (k, condition) in conditions.iter().enumerate() {
        for key in ["condition_attribute", "condition_value"] {
            if !condition.get(key).is_some_and(serde_json::Value::is_string) {
                errors.push(format!("rule #{rule_index} condition #{k}: `{key}` must be a string"));
            }
        }
    }
}
