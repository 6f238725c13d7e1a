//! builder.rs - Turns extracted attribute values into display rules.
//!
//! Each configured rule group walks the unique raw values of its attribute,
//! sanitizes them into term slugs and emits one rule per non-empty slug. The
//! rule name keeps the raw value; the condition matches on the slug.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::collections::BTreeMap;

use crate::config::{GeneratorConfig, RuleGroup};
use crate::document::{Action, Condition, Rule, RuleDocument};
use crate::extractor::ExtractedValues;
use crate::sanitizers::slug::sanitize_slug;

/// Per-group outcome of a build, used for the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub attribute: String,
    pub label: String,
    pub priority: i64,
    /// Distinct raw values extracted for the attribute.
    pub distinct_values: usize,
    /// Rules emitted.
    pub rules: usize,
    /// Raw values dropped because their slug was empty.
    pub skipped: Vec<String>,
}

/// Builds the single rule for one raw value, or `None` when its slug is empty.
pub fn build_rule(group: &RuleGroup, raw_value: &str) -> Option<Rule> {
    let slug = sanitize_slug(raw_value);
    if slug.is_empty() {
        return None;
    }

    let condition = Condition {
        condition_attribute: group.attribute.clone(),
        condition_value: slug,
        include_children: 0,
    };
    let action = Action {
        action_source: "attribute".to_string(),
        action_value: group.attribute.clone(),
        action_limit: group.limit,
        action_orderby: group.orderby.clone(),
    };

    Some(Rule {
        name: format!("{}: {}", group.label, raw_value),
        priority: group.priority,
        status: group.status,
        conditions: BTreeMap::from([(0, vec![condition])]),
        actions: vec![action],
    })
}

/// Builds every rule, group by group in configured order.
pub fn build_rules(extracted: &ExtractedValues, config: &GeneratorConfig) -> (Vec<Rule>, Vec<GroupSummary>) {
    let mut rules = Vec::new();
    let mut summaries = Vec::with_capacity(config.groups.len());

    for group in &config.groups {
        let mut summary = GroupSummary {
            attribute: group.attribute.clone(),
            label: group.label.clone(),
            priority: group.priority,
            distinct_values: 0,
            rules: 0,
            skipped: Vec::new(),
        };

        let Some(values) = extracted.values(&group.attribute) else {
            warn!("No values were extracted for rule group '{}'.", group.attribute);
            summaries.push(summary);
            continue;
        };
        summary.distinct_values = values.len();

        let ordered: Vec<&str> = if config.sort_values {
            values.sorted()
        } else {
            values.iter().collect()
        };

        for raw in ordered {
            match build_rule(group, raw) {
                Some(rule) => {
                    debug!("Rule '{}' -> {}", rule.name, group.attribute);
                    rules.push(rule);
                    summary.rules += 1;
                }
                None => {
                    warn!("Skipping '{}' in {}: value has no usable slug.", raw, group.attribute);
                    summary.skipped.push(raw.to_string());
                }
            }
        }

        summaries.push(summary);
    }

    (rules, summaries)
}

/// Builds the full document envelope around the generated rules.
pub fn build_document(extracted: &ExtractedValues, config: &GeneratorConfig) -> (RuleDocument, Vec<GroupSummary>) {
    let (rules, summaries) = build_rules(extracted, config);
    let document = RuleDocument::new(config.version.clone(), config.resolve_date(), rules);
    (document, summaries)
}
