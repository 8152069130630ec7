//! Logger setup for the native binary.

use crate::config::LogLevel;

/// Install `env_logger` and cap output at `level`.
///
/// The logger itself accepts everything (narrowed by `RUST_LOG` directives if
/// set) so [`set_level`] can raise verbosity once the config file is read.
pub fn init(level: LogLevel) {
    let result = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
    set_level(level);
}

/// Change verbosity, e.g. after the config has been read.
pub fn set_level(level: LogLevel) {
    log::set_max_level(level.to_level_filter());
}
