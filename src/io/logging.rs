//! Logger installation for the command-line tool
//!
//! The library only emits `log` records; the binary decides where they go.

use log::{LevelFilter, debug};

/// Log level for a repeated `-v` count
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` at the level chosen by `verbosity`
///
/// `RUST_LOG`, when set, overrides the level. Calling this more than once keeps
/// the first logger. Returns whether this call installed it.
pub fn init_logging(verbosity: u8) -> bool {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .format_timestamp(None)
        .parse_default_env();
    match builder.try_init() {
        Ok(()) => true,
        Err(error) => {
            debug!("Keeping the existing logger: {error}");
            false
        }
    }
}
