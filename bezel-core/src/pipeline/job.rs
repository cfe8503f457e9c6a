//! Turns a device profile plus a run request into an engine-ready job.

use std::path::PathBuf;

use log::{debug, info};

use crate::color::BackgroundColor;
use crate::config::OverlayConfig;
use crate::devices::{Anchor, CanvasSize, DeviceClass, DeviceProfile, Orientation};
use crate::error::{CoreError, CoreResult};
use crate::paths::{derive_output_path, expand_path, same_location};

use super::filter::{
    CANVAS_LABEL, CANVAS_PIXEL_FORMAT, FilterStep, OUTPUT_LABEL, VideoFilterChain,
};

/// Options for a single overlay run, as supplied by the caller.
///
/// Paths are kept as written; `~` and `$VAR` expansion happens when the job
/// is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub input: String,
    /// Destination; derived from `input` when absent
    pub output: Option<String>,
    pub device: String,
    pub orientation: Orientation,
    pub background: BackgroundColor,
    /// Copy the source audio stream instead of dropping it
    pub keep_audio: bool,
    /// Verbose ffmpeg output and a logged command line
    pub debug: bool,
}

impl RunRequest {
    /// A portrait, black-background, audio-stripping request.
    pub fn new(input: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: None,
            device: device.into(),
            orientation: Orientation::default(),
            background: BackgroundColor::default(),
            keep_audio: false,
            debug: false,
        }
    }
}

/// What happens to the source audio. Audio is never re-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioDirective {
    Copy,
    Drop,
}

/// Output metadata adjustments applied for specific device classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataDirective {
    /// Clears the stored rotation of the video stream. Tablet recordings carry
    /// their physical rotation in metadata, which would otherwise rotate the
    /// already-rotated output a second time on playback.
    ResetRotation,
}

/// A fully resolved overlay job, consumed once by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingJob {
    pub input: PathBuf,
    pub frame_image: PathBuf,
    pub output: PathBuf,
    pub orientation: Orientation,
    pub device_class: DeviceClass,
    /// Steps applied to the source video, in order, ending with the canvas.
    pub transforms: Vec<FilterStep>,
    pub overlay_anchor: Anchor,
    pub audio: AudioDirective,
    pub metadata: Vec<MetadataDirective>,
    pub debug: bool,
}

impl ProcessingJob {
    /// Canvas size and video placement of the pad step.
    #[must_use]
    pub fn canvas(&self) -> Option<(CanvasSize, Anchor)> {
        self.transforms.iter().find_map(|step| match step {
            FilterStep::Pad { canvas, anchor, .. } => Some((*canvas, *anchor)),
            _ => None,
        })
    }

    /// The complete `-filter_complex` description.
    ///
    /// Input 0 is the recording, input 1 the frame image; the result is
    /// labelled so it can be mapped explicitly.
    #[must_use]
    pub fn filter_graph(&self) -> String {
        let chain = self
            .transforms
            .iter()
            .fold(VideoFilterChain::new(), |chain, step| chain.add_step(step))
            .build()
            .unwrap_or_else(|| "null".to_string());
        let overlay = FilterStep::Overlay(self.overlay_anchor);
        format!("[0:v]{chain}[{CANVAS_LABEL}];[{CANVAS_LABEL}][1:v]{overlay}[{OUTPUT_LABEL}]")
    }
}

/// Builds the job for `profile` from the caller's request.
///
/// # Errors
///
/// [`CoreError::InvalidRequest`] when the resolved input and output are the
/// same file, or when no output name can be derived from the input.
pub fn build_job(
    profile: &DeviceProfile,
    request: &RunRequest,
    config: &OverlayConfig,
) -> CoreResult<ProcessingJob> {
    let input = expand_path(&request.input);
    let output = match &request.output {
        Some(raw) => expand_path(raw),
        None => derive_output_path(&input, &config.output_suffix)?,
    };
    if same_location(&input, &output) {
        return Err(CoreError::InvalidRequest(format!(
            "input and output are the same file ({}); refusing to overwrite the recording",
            input.display()
        )));
    }

    let mut transforms = Vec::with_capacity(5);
    // Recordings are captured in the sensor's portrait orientation no matter how
    // the content is shown, so landscape presentation rotates before scaling.
    if request.orientation == Orientation::Landscape {
        transforms.push(FilterStep::Rotate);
    }
    transforms.push(FilterStep::Scale(profile.scale));
    transforms.push(FilterStep::Pad {
        canvas: profile.canvas,
        anchor: profile.video_anchor,
        color: request.background.clone(),
    });
    transforms.push(FilterStep::SquarePixels);
    transforms.push(FilterStep::Format(CANVAS_PIXEL_FORMAT));

    let metadata = metadata_rules(profile.class, request.orientation);

    let audio = if request.keep_audio {
        AudioDirective::Copy
    } else {
        AudioDirective::Drop
    };

    let frame_image = config.frames_dir.join(profile.frame_image);
    info!(
        "Resizing source video to match device frame {} in {} orientation and applying overlay.",
        profile.frame_image, request.orientation
    );
    debug!(
        "Job for '{}' ({}): {} -> {}",
        request.device,
        profile.class,
        input.display(),
        output.display()
    );

    Ok(ProcessingJob {
        input,
        frame_image,
        output,
        orientation: request.orientation,
        device_class: profile.class,
        transforms,
        overlay_anchor: profile.overlay_anchor,
        audio,
        metadata,
        debug: request.debug,
    })
}

/// Class-specific output fixes.
fn metadata_rules(class: DeviceClass, orientation: Orientation) -> Vec<MetadataDirective> {
    match (class, orientation) {
        (DeviceClass::Tablet, Orientation::Landscape) => vec![MetadataDirective::ResetRotation],
        _ => Vec::new(),
    }
}
