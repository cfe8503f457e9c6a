// ============================================================================
// bezel-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: The ffmpeg Engine Boundary
//
// This module encapsulates everything that touches the external ffmpeg
// binary: turning a ProcessingJob into an argument list, spawning the process
// through a trait seam, and interpreting its outcome.
//
// KEY COMPONENTS:
// - ffmpeg: Command construction from a ProcessingJob
// - ffmpeg_executor: FfmpegSpawner/FfmpegProcess traits and run_job
// - mocks: Scriptable spawner for tests (feature "test-mocks")

/// Contains ffmpeg argument building for overlay jobs
pub mod ffmpeg;

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

#[cfg(all(unix, any(test, feature = "test-mocks")))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg::{FfmpegCommandBuilder, build_ffmpeg_command, command_args, format_command};
pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner, run_job};
