//! Filter-graph building blocks.
//!
//! Geometry is written symbolically (`iw`, `ow`, `main_w`, `overlay_w`, ...)
//! because the real frame sizes are only known once ffmpeg opens the inputs.

use std::fmt;

use crate::color::BackgroundColor;
use crate::devices::{Anchor, CanvasSize, ScaleRule};

/// Pixel layout forced on the canvas before compositing, so the frame image is
/// not blended against chroma-subsampled video.
pub const CANVAS_PIXEL_FORMAT: &str = "rgb24";

/// Label of the padded canvas inside the filter graph.
pub const CANVAS_LABEL: &str = "canvas";

/// Label of the composited video stream mapped to the output.
pub const OUTPUT_LABEL: &str = "vout";

/// One geometric operation applied to the source video stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterStep {
    /// 90° counter-clockwise rotation.
    Rotate,
    Scale(ScaleRule),
    /// Pads to `canvas` with the video placed at `anchor`.
    Pad {
        canvas: CanvasSize,
        anchor: Anchor,
        color: BackgroundColor,
    },
    /// Asserts square pixels.
    SquarePixels,
    Format(&'static str),
    /// Composites input 1 (the frame image) onto the canvas.
    Overlay(Anchor),
}

impl FilterStep {
    #[must_use]
    pub fn is_rotation(&self) -> bool {
        matches!(self, Self::Rotate)
    }

    #[must_use]
    pub fn is_scale(&self) -> bool {
        matches!(self, Self::Scale(_))
    }
}

impl fmt::Display for FilterStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotate => f.write_str("transpose=2"),
            Self::Scale(ScaleRule::FixedWidth(w)) => write!(f, "scale={w}:-1"),
            Self::Scale(ScaleRule::FixedHeight(h)) => write!(f, "scale=-1:{h}"),
            Self::Pad {
                canvas,
                anchor,
                color,
            } => write!(
                f,
                "pad={canvas}:{}:color={}",
                pad_position(*anchor),
                color.as_ffmpeg()
            ),
            Self::SquarePixels => f.write_str("setsar=1"),
            Self::Format(pix_fmt) => write!(f, "format={pix_fmt}"),
            Self::Overlay(anchor) => write!(f, "overlay={}", overlay_position(*anchor)),
        }
    }
}

/// Position of the scaled video inside the pad filter's output.
#[must_use]
pub fn pad_position(anchor: Anchor) -> String {
    match anchor {
        Anchor::Center => "(ow-iw)/2:(oh-ih)/2".to_string(),
        Anchor::Fixed { x, y } => format!("{x}:{y}"),
    }
}

/// Position of the frame image on the canvas.
#[must_use]
pub fn overlay_position(anchor: Anchor) -> String {
    match anchor {
        Anchor::Center => "(main_w-overlay_w)/2:(main_h-overlay_h)/2".to_string(),
        Anchor::Fixed { x, y } => format!("{x}:{y}"),
    }
}

/// Builder for a comma-separated chain of filters on one stream.
#[derive(Debug, Default)]
pub struct VideoFilterChain {
    filters: Vec<String>,
}

impl VideoFilterChain {
    /// Creates a new empty filter chain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step to the chain
    #[must_use]
    pub fn add_step(mut self, step: &FilterStep) -> Self {
        self.filters.push(step.to_string());
        self
    }

    /// Builds the chain into a single filter string
    #[must_use]
    pub fn build(self) -> Option<String> {
        if self.filters.is_empty() {
            None
        } else {
            Some(self.filters.join(","))
        }
    }
}
