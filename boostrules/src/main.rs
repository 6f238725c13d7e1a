// boostrules/src/main.rs
//! boostrules entry point.
//!
//! Parses the command line, sets up logging and the console theme, then runs
//! the selected subcommand. Any failure is reported as a single error line
//! and the process exits with status 1.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use boostrules::cli::{Cli, Commands};
use boostrules::commands::{error_msg, generate, slug, validate};
use boostrules::logger;
use boostrules::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};

fn run(cli: Cli, theme: &ThemeMap) -> Result<()> {
    match cli.command {
        Commands::Generate(cmd) => {
            let opts = generate::GenerateOptions::from_command(cmd, cli.quiet);
            generate::run_generate(&opts, theme)?;
        }
        Commands::Validate(cmd) => {
            validate::run_validate(&cmd.path, cli.quiet, theme)?;
        }
        Commands::Slug(cmd) => {
            slug::run_slug(&cmd.values, &mut io::stdout().lock())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    log::info!("boostrules started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme = match build_theme_map(cli.theme.as_ref()) {
        Ok(theme) => theme,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            error_msg(format!("{e:#}"), &fallback);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{e:#}"), &theme);
            ExitCode::FAILURE
        }
    }
}
