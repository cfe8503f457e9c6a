// bezel-cli/src/lib.rs
//
// Library portion of the Bezel CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::devices::list_devices;
pub use commands::overlay::run_overlay;
pub use error::{CliResult, EXIT_FAILURE, report_error};
