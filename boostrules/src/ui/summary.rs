//! Run summary table.
//!
//! Lists, per extracted attribute, how many distinct values were found and
//! how many rules were emitted or skipped. Attributes that are extracted but
//! not grouped into rules are listed with a dash in the rule columns.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use boostrules_core::Generation;

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

fn styled(text: String, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> Cell {
    match color_for(&entry, theme) {
        Some(color) if supports_color => Cell::new(text.color(color).to_string()),
        _ => Cell::new(text),
    }
}

/// Builds the summary table for a finished run.
pub fn build_summary_table(generation: &Generation, theme: &ThemeMap, supports_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["Attribute", "Label", "Priority", "Values", "Rules", "Skipped"]
                .into_iter()
                .map(|title| styled(title.to_string(), ThemeEntry::Header, theme, supports_color)),
        );

    for group in &generation.groups {
        table.add_row(vec![
            styled(group.attribute.clone(), ThemeEntry::SummaryAttribute, theme, supports_color),
            Cell::new(&group.label),
            Cell::new(group.priority).set_alignment(CellAlignment::Right),
            styled(group.distinct_values.to_string(), ThemeEntry::SummaryCount, theme, supports_color)
                .set_alignment(CellAlignment::Right),
            styled(group.rules.to_string(), ThemeEntry::SummaryCount, theme, supports_color)
                .set_alignment(CellAlignment::Right),
            Cell::new(group.skipped.len()).set_alignment(CellAlignment::Right),
        ]);
    }

    for (taxonomy, values) in &generation.extracted.attributes {
        if generation.groups.iter().any(|g| &g.attribute == taxonomy) {
            continue;
        }
        table.add_row(vec![
            styled(taxonomy.clone(), ThemeEntry::SummaryAttribute, theme, supports_color),
            Cell::new("-"),
            Cell::new("-").set_alignment(CellAlignment::Right),
            Cell::new(values.len()).set_alignment(CellAlignment::Right),
            Cell::new("-").set_alignment(CellAlignment::Right),
            Cell::new("-").set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Prints the summary, followed by the skipped values and missing columns if any.
pub fn print_summary<W: Write>(
    generation: &Generation,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", build_summary_table(generation, theme, supports_color))?;

    for group in &generation.groups {
        if !group.skipped.is_empty() {
            writeln!(
                writer,
                "{}: skipped values with no usable slug: {}",
                group.attribute,
                group.skipped.join(" | ")
            )?;
        }
    }
    if !generation.extracted.missing_columns.is_empty() {
        writeln!(
            writer,
            "Columns not found in export: {}",
            generation.extracted.missing_columns.join(", ")
        )?;
    }
    Ok(())
}
