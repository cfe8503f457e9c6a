//! FFmpeg command construction for overlay jobs.
//!
//! The command is assembled as a structured argument list; no shell ever sees
//! the file names or the color string.

use ffmpeg_sidecar::command::FfmpegCommand;

use crate::pipeline::filter::OUTPUT_LABEL;
use crate::pipeline::{AudioDirective, MetadataDirective, ProcessingJob};

/// Builder for `FFmpeg` commands with the flags every overlay run shares
pub struct FfmpegCommandBuilder {
    cmd: FfmpegCommand,
    quiet: bool,
    overwrite: bool,
}

impl FfmpegCommandBuilder {
    /// Creates a builder launching `binary` (a name on PATH or a full path)
    #[must_use]
    pub fn new(binary: &str) -> Self {
        Self {
            cmd: FfmpegCommand::new_with_path(binary),
            quiet: true,
            overwrite: true,
        }
    }

    /// Keeps ffmpeg's log output down to errors and progress statistics
    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Sets whether an existing output file is replaced without asking
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Builds the `FFmpeg` command with all configured options
    #[must_use]
    pub fn build(mut self) -> FfmpegCommand {
        self.cmd.arg("-hide_banner");
        if self.overwrite {
            self.cmd.arg("-y");
        }
        if self.quiet {
            self.cmd.args(["-loglevel", "level+error", "-stats"]);
        }
        self.cmd
    }
}

/// Builds the single ffmpeg invocation that executes `job`.
#[must_use]
pub fn build_ffmpeg_command(job: &ProcessingJob, binary: &str) -> FfmpegCommand {
    let mut cmd = FfmpegCommandBuilder::new(binary)
        .with_quiet(!job.debug)
        .build();

    cmd.input(job.input.to_string_lossy().as_ref());
    cmd.input(job.frame_image.to_string_lossy().as_ref());
    cmd.args(["-filter_complex", &job.filter_graph()]);
    cmd.args(["-map", &format!("[{OUTPUT_LABEL}]")]);

    match job.audio {
        AudioDirective::Copy => {
            cmd.args(["-map", "0:a?"]);
            cmd.args(["-c:a", "copy"]);
        }
        AudioDirective::Drop => {
            cmd.arg("-an");
        }
    }

    for directive in &job.metadata {
        match directive {
            MetadataDirective::ResetRotation => {
                cmd.args(["-metadata:s:v:0", "rotate=0"]);
            }
        }
    }

    cmd.output(job.output.to_string_lossy().as_ref());
    cmd
}

/// Renders the program and arguments on one line for diagnostics.
#[must_use]
pub fn format_command(binary: &str, cmd: &FfmpegCommand) -> String {
    std::iter::once(binary.to_string())
        .chain(command_args(cmd))
        .map(|text| {
            if text.is_empty() || text.contains(|c: char| c.is_whitespace() || c == '"') {
                format!("{text:?}")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collects the arguments of `cmd` (without the program) as strings.
#[must_use]
pub fn command_args(cmd: &FfmpegCommand) -> Vec<String> {
    cmd.get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
