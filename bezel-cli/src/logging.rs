// ============================================================================
// bezel-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// bezel-core logs through the `log` facade; this module installs env_logger
// as the backend with a colored level prefix.
//
// USAGE:
// - default: info
// - --debug: debug
// - RUST_LOG overrides both, e.g. RUST_LOG=bezel_core=trace

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Write};

/// Whether stderr is an interactive terminal that should get ANSI colors.
pub fn stderr_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Level used when RUST_LOG is not set.
pub fn default_level(debug: bool) -> LevelFilter {
    if debug { LevelFilter::Debug } else { LevelFilter::Info }
}

/// Initializes env_logger for the process.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(debug: bool) {
    let color = stderr_supports_color();
    let _ = env_logger::Builder::new()
        .filter_level(default_level(debug))
        .parse_default_env()
        .format(move |buf, record| {
            let label = match record.level() {
                Level::Error => "ERROR",
                Level::Warn => "WARN ",
                Level::Info => "INFO ",
                Level::Debug => "DEBUG",
                Level::Trace => "TRACE",
            };
            if !color {
                return writeln!(buf, "{} {}", label, record.args());
            }
            match record.level() {
                Level::Error => writeln!(buf, "{} {}", label.bright_red(), record.args()),
                Level::Warn => writeln!(buf, "{} {}", label.yellow(), record.args()),
                Level::Info => writeln!(buf, "{} {}", label.green(), record.args()),
                Level::Debug => writeln!(buf, "{} {}", label.blue(), record.args()),
                Level::Trace => writeln!(buf, "{} {}", label.magenta(), record.args()),
            }
        })
        .try_init();

    log::debug!("Logger initialized with level: {}", log::max_level());
}
