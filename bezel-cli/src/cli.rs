// bezel-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use bezel_core::Orientation;
use bezel_core::color::DEFAULT_BACKGROUND;
use bezel_core::config::{ENV_FFMPEG, ENV_FRAMES_DIR};
use clap::Parser;
use std::path::PathBuf;

const TRADEMARK_NOTICE: &str = "Apple, the Apple logo, Apple TV, Apple Watch, iPad, iPhone, iPod, \
iPod touch, iTunes, the iTunes logo, Mac, iMac, MacBook, MacBook Pro, MacBook Air, macOS, and \
QuickTime are trademarks of Apple Inc., registered in the U.S. and other countries.";

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Bezel: place screen recordings inside device frames",
    long_about = "Scales a screen recording to fit a device frame image, pads it onto a canvas \
                  and overlays the frame using ffmpeg.",
    after_help = TRADEMARK_NOTICE
)]
pub struct Cli {
    /// Screen recording to frame
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        required_unless_present = "list_devices"
    )]
    pub input: Option<String>,

    /// Destination file (defaults to the input name with an `_overlay` suffix)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Device frame to use (see --list-devices)
    #[arg(
        short = 'd',
        long = "device",
        value_name = "ID",
        required_unless_present = "list_devices"
    )]
    pub device: Option<String>,

    /// Orientation of the device: portrait or landscape
    #[arg(long, value_name = "ORIENTATION", default_value = "portrait")]
    pub orientation: Orientation,

    /// Background color as #RRGGBB, #RRGGBBAA or 0xRRGGBB
    #[arg(short = 'c', long = "bg-color", value_name = "HEX", default_value = DEFAULT_BACKGROUND)]
    pub bg_color: String,

    /// Copy the audio track of the recording instead of stripping it
    #[arg(long)]
    pub keep_audio: bool,

    /// Show ffmpeg's full output and the assembled command line
    #[arg(long)]
    pub debug: bool,

    /// Print the available devices per orientation and exit
    #[arg(long)]
    pub list_devices: bool,

    /// Directory holding the device frame images
    #[arg(long, value_name = "DIR", env = ENV_FRAMES_DIR)]
    pub frames_dir: Option<PathBuf>,

    /// ffmpeg binary to run (defaults to `ffmpeg` on PATH)
    #[arg(long, value_name = "PATH", env = ENV_FFMPEG)]
    pub ffmpeg: Option<PathBuf>,
}
