// ============================================================================
// bezel-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for bezel-core
//
// Every failure a run can hit is one of three kinds: a bad device selection,
// a bad request (paths, colors), or a failure of the external ffmpeg process.
// All of them are fatal to the run; nothing here is retried.
//
// KEY COMPONENTS:
// - CoreError: Enum of all error kinds, built on thiserror
// - CoreResult: Result alias used across the crate
// - Helper constructors for ffmpeg process failures

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

use crate::devices::Orientation;

/// Errors produced while resolving, building or executing an overlay job.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No profile is registered for the requested (orientation, device) pair.
    ///
    /// Carries the full list of valid ids for both orientations so the caller
    /// can show the user what is available.
    #[error("Unknown device '{device}' for {orientation} orientation")]
    UnknownDevice {
        device: String,
        orientation: Orientation,
        landscape: Vec<String>,
        portrait: Vec<String>,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to start '{binary}': {source}")]
    EngineStart {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to wait for '{binary}': {source}")]
    EngineWait {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("ffmpeg exited with {status}: {message}")]
    EngineFailed { status: ExitStatus, message: String },

    #[error("ffmpeg reported success but no output was written to {}", .0.display())]
    OutputMissing(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for bezel-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// True for every failure that originates in the external ffmpeg process.
    #[must_use]
    pub fn is_engine_error(&self) -> bool {
        matches!(
            self,
            Self::EngineStart { .. }
                | Self::EngineWait { .. }
                | Self::EngineFailed { .. }
                | Self::OutputMissing(_)
        )
    }
}

// ---- Helper constructors ----

pub(crate) fn command_start_error(binary: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::EngineStart {
        binary: binary.into(),
        source,
    }
}

pub(crate) fn command_wait_error(binary: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::EngineWait {
        binary: binary.into(),
        source,
    }
}

/// The process started but its event stream could not be attached.
pub(crate) fn event_stream_error(binary: impl Into<String>, message: impl Into<String>) -> CoreError {
    command_start_error(binary, io::Error::other(message.into()))
}

pub(crate) fn command_failed_error(status: ExitStatus, message: impl Into<String>) -> CoreError {
    CoreError::EngineFailed {
        status,
        message: message.into(),
    }
}
