// bezel-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::ffmpeg::command_args;
use super::{FfmpegProcess, FfmpegSpawner};
use crate::error::{CoreError, CoreResult, event_stream_error};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::cell::RefCell;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::rc::Rc;

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Vec<FfmpegEvent>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
    /// When set, handle_events fails with this message before any event.
    pub stream_error: Option<String>,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        if let Some(message) = &self.stream_error {
            return Err(event_stream_error("ffmpeg (mock)", message.clone()));
        }
        for event in self.events_to_emit.clone() {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

/// What the mock does when spawned.
enum MockOutcome {
    Exit {
        events: Vec<FfmpegEvent>,
        exit_code: i32,
        create_output: bool,
    },
    SpawnError(std::io::ErrorKind),
    StreamError(String),
}

/// Mock implementation of FfmpegSpawner.
///
/// Records every argument list it receives. Without a scripted outcome it
/// behaves like a successful ffmpeg run that writes the output file.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    outcome: Rc<RefCell<Option<MockOutcome>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn succeed_with(&self, events: Vec<FfmpegEvent>, create_output: bool) {
        self.outcome.replace(Some(MockOutcome::Exit {
            events,
            exit_code: 0,
            create_output,
        }));
    }

    pub fn exit_with(&self, events: Vec<FfmpegEvent>, exit_code: i32) {
        self.outcome.replace(Some(MockOutcome::Exit {
            events,
            exit_code,
            create_output: false,
        }));
    }

    pub fn fail_to_spawn(&self, kind: std::io::ErrorKind) {
        self.outcome.replace(Some(MockOutcome::SpawnError(kind)));
    }

    pub fn fail_event_stream(&self, message: &str) {
        self.outcome
            .replace(Some(MockOutcome::StreamError(message.to_string())));
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args = command_args(&cmd);
        self.received_calls.borrow_mut().push(args.clone());

        let outcome = self.outcome.borrow_mut().take().unwrap_or(MockOutcome::Exit {
            events: Vec::new(),
            exit_code: 0,
            create_output: true,
        });

        match outcome {
            MockOutcome::SpawnError(kind) => Err(CoreError::EngineStart {
                binary: "ffmpeg (mock)".to_string(),
                source: std::io::Error::from(kind),
            }),
            MockOutcome::StreamError(message) => Ok(MockFfmpegProcess {
                events_to_emit: Vec::new(),
                exit_status: ExitStatus::from_raw(0),
                stream_error: Some(message),
            }),
            MockOutcome::Exit {
                events,
                exit_code,
                create_output,
            } => {
                if create_output {
                    if let Some(output) = args.last() {
                        log::debug!("Mock ffmpeg writing dummy output to {output}");
                        std::fs::write(output, b"mock output")?;
                    }
                }
                Ok(MockFfmpegProcess {
                    events_to_emit: events,
                    exit_status: ExitStatus::from_raw(exit_code << 8),
                    stream_error: None,
                })
            }
        }
    }
}
