//! `generate` command: product export in, rule import document out.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

use boostrules_core::{generate_from_path, Generation, GeneratorConfig};

use crate::cli::GenerateCommand;
use crate::commands::{info_msg, success_msg, warn_msg};
use crate::ui::summary;
use crate::ui::theme::ThemeMap;

/// Options for a generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub version_tag: Option<String>,
    pub date: Option<NaiveDate>,
    pub no_summary: bool,
    pub quiet: bool,
}

impl GenerateOptions {
    pub fn from_command(cmd: GenerateCommand, quiet: bool) -> Self {
        Self {
            input: cmd.input,
            output: cmd.output,
            config: cmd.config,
            version_tag: cmd.version_tag,
            date: cmd.date,
            no_summary: cmd.no_summary,
            quiet,
        }
    }
}

/// Loads the configuration file (or the built-in defaults) and applies CLI overrides.
pub fn resolve_config(opts: &GenerateOptions) -> Result<GeneratorConfig> {
    let mut config = match &opts.config {
        Some(path) => GeneratorConfig::load_from_file(path)?,
        None => GeneratorConfig::load_default()?,
    };

    if let Some(version) = &opts.version_tag {
        debug!("Overriding document version with '{}'", version);
        config.version = version.clone();
    }
    if let Some(date) = opts.date {
        debug!("Overriding document date with {}", date);
        config.date = Some(date);
    }

    config.validate().context("Invalid generator configuration")?;
    Ok(config)
}

/// Runs the whole generate command.
pub fn run_generate(opts: &GenerateOptions, theme: &ThemeMap) -> Result<Generation> {
    info!("Starting generate operation.");
    let config = resolve_config(opts)?;

    if !opts.quiet {
        info_msg(format!("Reading CSV: {}", opts.input.display()), theme);
    }
    let generation = generate_from_path(&opts.input, &config)
        .with_context(|| format!("Error reading CSV {}", opts.input.display()))?;

    if !opts.quiet {
        info_msg(format!("Generated {} rules.", generation.rule_count()), theme);
        if generation.rule_count() == 0 {
            warn_msg("No rules were generated; check the export's attribute columns.", theme);
        }
    }

    write_document(opts, &generation, theme)?;

    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        summary::print_summary(&generation, &mut io::stderr(), theme, stderr_supports_color)?;
    }

    info!("Generate operation completed.");
    Ok(generation)
}

fn write_document(opts: &GenerateOptions, generation: &Generation, theme: &ThemeMap) -> Result<()> {
    match &opts.output {
        Some(path) => {
            generation
                .document
                .save(path)
                .with_context(|| format!("Failed to save rules to {}", path.display()))?;
            if !opts.quiet {
                success_msg(format!("Saved to {}", path.display()), theme);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            generation
                .document
                .write_json(&mut writer)
                .context("Failed to write rules to stdout")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
