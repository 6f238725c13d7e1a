//! This file defines the command-line interface (CLI) for the boostrules application,
//! including all available commands and their arguments.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "boostrules",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate related-product rules from a product export",
    long_about = "boostrules reads a product export CSV, collects the distinct manufacturer and caliber/gauge values and writes a WooBooster rule import (JSON) with one related-product rule per value.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress progress messages and logging.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `boostrules` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a rule import document from a product export.
    #[command(about = "Generate a rule import document from a product export CSV.")]
    Generate(GenerateCommand),

    /// Checks that a rule document has the shape the plugin importer expects.
    #[command(about = "Check the shape of an existing rule import document.")]
    Validate(ValidateCommand),

    /// Prints the slug of each value.
    #[command(about = "Print the term slug of each given value.")]
    Slug(SlugCommand),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Path to the product export CSV.
    #[arg(long, short = 'i', value_name = "FILE", help = "Product export CSV to read.")]
    pub input: PathBuf,

    /// Write the document to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the rule document to a file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a generator configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a generator configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Overrides the document version tag.
    #[arg(long = "version-tag", value_name = "VERSION", help = "Version tag written into the document.")]
    pub version_tag: Option<String>,

    /// Overrides the generation date.
    #[arg(long = "date", value_name = "YYYY-MM-DD", help = "Generation date written into the document (defaults to today).")]
    pub date: Option<NaiveDate>,

    /// Suppress the per-attribute summary.
    #[arg(long = "no-summary", help = "Suppress the per-attribute summary table.")]
    pub no_summary: bool,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// The rule document to check.
    #[arg(value_name = "FILE", help = "Rule import document (JSON) to check.")]
    pub path: PathBuf,
}

/// Arguments for the `slug` command.
#[derive(Parser, Debug)]
pub struct SlugCommand {
    /// Values to sanitize.
    #[arg(value_name = "VALUE", required = true, help = "Values to turn into term slugs.")]
    pub values: Vec<String>,
}
