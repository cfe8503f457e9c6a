//! Core library for compositing screen recordings into device frames.
//!
//! A run resolves a device profile from the built-in [`Registry`], builds a
//! [`ProcessingJob`] describing the filter graph (rotate, scale, pad, overlay)
//! and hands it to ffmpeg as a single process.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use bezel_core::{OverlayConfig, RunRequest, overlay_video};
//! use bezel_core::devices::Orientation;
//! use bezel_core::external::SidecarSpawner;
//!
//! let mut request = RunRequest::new("~/Movies/rec.mp4", "iphoneXSmax");
//! request.orientation = Orientation::Landscape;
//! request.background = "#ffffff".parse().unwrap();
//!
//! let config = OverlayConfig::from_env();
//! let output = overlay_video(&SidecarSpawner, &request, &config, |_| {}).unwrap();
//! println!("saved to {}", output.display());
//! ```

pub mod color;
pub mod config;
pub mod devices;
pub mod error;
pub mod external;
pub mod paths;
pub mod pipeline;

// Re-exports for public API
pub use color::BackgroundColor;
pub use config::OverlayConfig;
pub use devices::{DeviceProfile, Orientation, Registry};
pub use error::{CoreError, CoreResult};
pub use pipeline::{ProcessingJob, RunRequest, build_job};

pub use ffmpeg_sidecar::event::FfmpegProgress;
use external::FfmpegSpawner;
use std::path::PathBuf;

/// Validates the config, resolves the device profile and builds the job.
///
/// Nothing is spawned; callers that want to show progress UI only once the
/// request is known to be valid run the returned job with
/// [`external::run_job`].
pub fn prepare_job(request: &RunRequest, config: &OverlayConfig) -> CoreResult<ProcessingJob> {
    config.validate()?;
    let profile = Registry::builtin()?.lookup(&request.device, request.orientation)?;
    build_job(profile, request, config)
}

/// Resolves the device profile, builds the job and runs it.
///
/// Every validation (unknown device, same input and output, bad config)
/// happens before ffmpeg is spawned.
pub fn overlay_video<S, P>(
    spawner: &S,
    request: &RunRequest,
    config: &OverlayConfig,
    on_progress: P,
) -> CoreResult<PathBuf>
where
    S: FfmpegSpawner,
    P: FnMut(&FfmpegProgress),
{
    let job = prepare_job(request, config)?;
    external::run_job(spawner, &job, config, on_progress)
}
