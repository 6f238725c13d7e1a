//! Logging setup for the `boostrules` binary.
//!
//! Uses `env_logger`; `RUST_LOG` is honored unless an explicit level is given.

use log::LevelFilter;

/// Initializes the global logger. Calling it more than once is harmless.
///
/// With `level` set, that level applies to every target and overrides
/// `RUST_LOG`. Otherwise `RUST_LOG` is used, defaulting to `warn`.
pub fn init_logger(level: Option<LevelFilter>) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags to a log level.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
