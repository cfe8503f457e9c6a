// ============================================================================
// bezel-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// This module spawns the single ffmpeg process of a run, streams its events,
// and decides whether the run succeeded. Success needs both a zero exit status
// and the declared output file on disk afterwards.
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active FFmpeg process
// - FfmpegSpawner: Trait for creating new FFmpeg processes
// - SidecarSpawner: Concrete implementation using ffmpeg-sidecar
// - run_job: Executes a ProcessingJob and classifies the outcome

use crate::config::OverlayConfig;
use crate::error::{
    CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error,
    event_stream_error,
};
use crate::pipeline::ProcessingJob;

use super::ffmpeg::{build_ffmpeg_command, format_command};

use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, FfmpegProgress, LogLevel};
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitStatus;

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self
            .0
            .iter()
            .map_err(|e| event_stream_error("ffmpeg", e.to_string()))?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg", e))
    }
}

// --- Job Execution ---

/// Runs `job` through one ffmpeg process and verifies the result.
///
/// `on_progress` receives every progress update ffmpeg reports. In debug mode
/// the assembled command line is logged and ffmpeg's own log lines are
/// forwarded to the logger.
///
/// # Errors
///
/// Any failure to start or wait for the process, a non-zero exit status, or a
/// missing output file. Partial output is left in place for inspection.
pub fn run_job<S, P>(
    spawner: &S,
    job: &ProcessingJob,
    config: &OverlayConfig,
    mut on_progress: P,
) -> CoreResult<PathBuf>
where
    S: FfmpegSpawner,
    P: FnMut(&FfmpegProgress),
{
    let binary = config.ffmpeg_binary();
    let cmd = build_ffmpeg_command(job, &binary);
    if job.debug {
        info!("ffmpeg command: {}", format_command(&binary, &cmd));
    } else {
        debug!("ffmpeg command: {}", format_command(&binary, &cmd));
    }

    let with_binary = |e: CoreError| match e {
        CoreError::EngineStart { source, .. } => command_start_error(binary.clone(), source),
        other => other,
    };
    let mut process = spawner.spawn(cmd).map_err(with_binary)?;

    let mut last_error: Option<String> = None;
    process.handle_events(|event| {
        match event {
            FfmpegEvent::Progress(progress) => on_progress(&progress),
            FfmpegEvent::Error(message) | FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, message) => {
                debug!("ffmpeg error: {message}");
                last_error = Some(message);
            }
            FfmpegEvent::Log(_, message) if job.debug => info!("ffmpeg: {message}"),
            _ => {}
        }
        Ok(())
    })
    .map_err(with_binary)?;

    let status = process.wait()?;
    if !status.success() {
        debug!("ffmpeg exited with {status}");
        return Err(command_failed_error(
            status,
            last_error.unwrap_or_else(|| "no error output captured".to_string()),
        ));
    }

    if !job.output.exists() {
        debug!("ffmpeg finished but {} does not exist", job.output.display());
        return Err(CoreError::OutputMissing(job.output.clone()));
    }

    debug!("ffmpeg wrote {}", job.output.display());
    Ok(job.output.clone())
}
