// ============================================================================
// bezel-cli/src/main.rs
// ============================================================================
//
// BEZEL CLI: Main Entry Point
//
// Parses the command line, sets up logging and runs the requested mode.
// Exit code 0 only when ffmpeg exited cleanly and the output file exists;
// 1 for every failure reported here; clap exits with 2 on usage errors.

use bezel_cli::{Cli, EXIT_FAILURE, list_devices, logging, report_error, run_overlay};
use clap::Parser;
use log::debug;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let result = if cli.list_devices {
        list_devices()
    } else {
        run_overlay(&cli).map(|output| debug!("Finished: {}", output.display()))
    };

    if let Err(e) = result {
        report_error(&e, cli.debug);
        process::exit(EXIT_FAILURE);
    }
}
