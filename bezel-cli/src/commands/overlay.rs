//! Implementation of the default action: framing one recording.
//!
//! Translates the parsed arguments into a `RunRequest` and an `OverlayConfig`,
//! prepares the job, then runs it while a spinner shows ffmpeg's progress.
//! The spinner only exists while ffmpeg runs, so validation errors and the
//! final log lines never share the terminal line with it.

use crate::cli::Cli;
use crate::error::CliResult;

use bezel_core::external::{SidecarSpawner, run_job};
use bezel_core::{BackgroundColor, CoreError, FfmpegProgress, OverlayConfig, RunRequest};

use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, debug, info, log_enabled};
use std::path::PathBuf;
use std::time::Duration;

/// Builds the core request from CLI arguments.
///
/// The background color is validated here so a malformed value fails before
/// any device lookup happens.
pub fn build_request(args: &Cli) -> CliResult<RunRequest> {
    let input = args
        .input
        .clone()
        .ok_or_else(|| CoreError::InvalidRequest("an input file is required".to_string()))?;
    let device = args
        .device
        .clone()
        .ok_or_else(|| CoreError::InvalidRequest("a device id is required".to_string()))?;
    let background: BackgroundColor = args.bg_color.parse()?;

    let mut request = RunRequest::new(input, device);
    request.output = args.output.clone();
    request.orientation = args.orientation;
    request.background = background;
    request.keep_audio = args.keep_audio;
    request.debug = args.debug;
    Ok(request)
}

/// Environment configuration with command-line overrides applied.
pub fn build_config(args: &Cli) -> OverlayConfig {
    let mut config = OverlayConfig::from_env();
    if let Some(dir) = &args.frames_dir {
        config.frames_dir = dir.clone();
    }
    if let Some(ffmpeg) = &args.ffmpeg {
        config.ffmpeg_path = Some(ffmpeg.clone());
    }
    config
}

/// The spinner is dropped whenever debug lines may be written while ffmpeg
/// runs, either through `--debug` or a RUST_LOG override.
fn spinner_enabled(debug: bool) -> bool {
    !debug && !log_enabled!(Level::Debug)
}

fn progress_spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
    );
    pb.set_message("Starting ffmpeg");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn describe_progress(progress: &FfmpegProgress) -> String {
    format!(
        "Encoding {} (frame {}, {:.1} fps, {:.2}x)",
        progress.time, progress.frame, progress.fps, progress.speed
    )
}

/// Runs one overlay job end to end and returns the written file.
pub fn run_overlay(args: &Cli) -> CliResult<PathBuf> {
    let request = build_request(args)?;
    let config = build_config(args);
    debug!("Request: {request:?}");
    debug!("Config: {config:?}");

    let job = bezel_core::prepare_job(&request, &config)?;
    debug!("Job: {job:?}");

    let spinner = progress_spinner(spinner_enabled(args.debug));
    let result = run_job(&SidecarSpawner, &job, &config, |progress| {
        spinner.set_message(describe_progress(progress));
    });
    spinner.finish_and_clear();

    let output = result?;
    info!("Video saved to: {}", output.display());
    Ok(output)
}
