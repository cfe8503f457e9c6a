// ============================================================================
// bezel-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and reporting for the CLI
//
// The CLI reuses the core error type. This module turns a CoreError into the
// diagnostic a user sees on stderr and the process exit code.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - report_error: Prints the diagnostic for a failed run
// - EXIT_FAILURE: Exit code for every failure the CLI itself reports

use bezel_core::{CoreError, CoreResult};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit code for any failed run. Usage errors are left to clap (exit code 2).
pub const EXIT_FAILURE: i32 = 1;

/// Writes the diagnostic for `error` to `out`.
///
/// Unknown devices list the valid ids per orientation. Engine failures get a
/// hint to re-run with `--debug` unless debug output was already on.
pub fn write_error<W: Write>(out: &mut W, error: &CoreError, debug: bool, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{} {}", "Error:".bold().bright_red(), error)?;
    } else {
        writeln!(out, "Error: {error}")?;
    }

    if let CoreError::UnknownDevice {
        landscape, portrait, ..
    } = error
    {
        writeln!(out, "  Landscape devices: {}", landscape.join(", "))?;
        writeln!(out, "  Portrait devices:  {}", portrait.join(", "))?;
    }

    if error.is_engine_error() && !debug {
        writeln!(
            out,
            "  Re-run with --debug to see ffmpeg's output and the full command line."
        )?;
    }
    Ok(())
}

/// Prints the diagnostic for `error` to stderr.
pub fn report_error(error: &CoreError, debug: bool) {
    let color = crate::logging::stderr_supports_color();
    let mut stderr = io::stderr().lock();
    // Nothing sensible to do if stderr itself is gone.
    let _ = write_error(&mut stderr, error, debug, color);
}
