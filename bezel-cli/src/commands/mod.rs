//! Command implementations for the CLI.
//!
//! `bezel` has no subcommands; each module here implements one of its modes.

/// Frames one recording (the default mode).
pub mod overlay;

/// Prints the device catalog (`--list-devices`).
pub mod devices;
