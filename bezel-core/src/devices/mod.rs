// ============================================================================
// bezel-core/src/devices/mod.rs
// ============================================================================
//
// DEVICE FRAME REGISTRY: Geometry Profiles for Device Bezels
//
// This module owns the fixed catalog of device-frame profiles and answers
// lookups by (orientation, device-id). The catalog is static data, validated
// once when the registry is first touched and shared read-only afterwards.
//
// KEY COMPONENTS:
// - Orientation, DeviceClass: Tags selecting a profile and its special cases
// - ScaleRule, Anchor, CanvasSize: Geometry building blocks of a profile
// - DeviceProfile: Everything needed to place a recording inside one frame
// - Registry: Validated catalog with lookup and listing operations

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::OnceCell;

use crate::error::{CoreError, CoreResult};

mod catalog;

use catalog::{CATALOG, CatalogEntry};

// ============================================================================
// PROFILE TYPES
// ============================================================================

/// Orientation the recording is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Landscape, Orientation::Portrait];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            other => Err(CoreError::InvalidRequest(format!(
                "unknown orientation '{other}' (expected portrait or landscape)"
            ))),
        }
    }
}

/// Coarse device category. Drives class-specific post-processing only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Phone,
    Tablet,
    Desktop,
    Wearable,
}

impl DeviceClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
            Self::Wearable => "wearable",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the source video is resized: one axis pinned, the other left to the
/// engine so the source aspect ratio is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleRule {
    FixedWidth(u32),
    FixedHeight(u32),
}

impl ScaleRule {
    /// The pinned target in pixels.
    #[must_use]
    pub fn target(self) -> u32 {
        match self {
            Self::FixedWidth(px) | Self::FixedHeight(px) => px,
        }
    }
}

/// Placement of an element within the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Centered on both axes, computed by the engine from the frame sizes.
    Center,
    /// Literal pixel offset of the element's top-left corner.
    Fixed { x: u32, y: u32 },
}

/// Width and height of the padded canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Geometry and artwork for one (orientation, device) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// File name of the bezel artwork, relative to the frames directory.
    pub frame_image: &'static str,
    /// Size the scaled video is padded to.
    pub canvas: CanvasSize,
    pub scale: ScaleRule,
    /// Where the frame image is composited onto the canvas.
    pub overlay_anchor: Anchor,
    /// Where the scaled video sits inside the canvas.
    pub video_anchor: Anchor,
    pub class: DeviceClass,
}

// ============================================================================
// REGISTRY
// ============================================================================

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Validated, read-only catalog of device profiles.
#[derive(Debug)]
pub struct Registry {
    profiles: BTreeMap<(Orientation, &'static str), DeviceProfile>,
}

impl Registry {
    /// Returns the process-wide registry, building and validating it on first use.
    pub fn builtin() -> CoreResult<&'static Registry> {
        REGISTRY.get_or_try_init(|| Registry::from_entries(CATALOG))
    }

    pub(crate) fn from_entries(entries: &[CatalogEntry]) -> CoreResult<Self> {
        let mut profiles = BTreeMap::new();
        for entry in entries {
            validate_entry(entry)?;
            if profiles
                .insert((entry.orientation, entry.device), entry.profile)
                .is_some()
            {
                return Err(CoreError::Config(format!(
                    "device '{}' is registered twice for {} orientation",
                    entry.device, entry.orientation
                )));
            }
        }
        log::debug!("Device registry loaded with {} profiles", profiles.len());
        Ok(Self { profiles })
    }

    /// Resolves the profile for `device` in `orientation`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownDevice`] when nothing is registered for the
    /// pair. The error lists every valid id for both orientations.
    pub fn lookup(&self, device: &str, orientation: Orientation) -> CoreResult<&DeviceProfile> {
        self.profiles
            .iter()
            .find(|((o, id), _)| *o == orientation && *id == device)
            .map(|(_, profile)| profile)
            .ok_or_else(|| CoreError::UnknownDevice {
                device: device.to_string(),
                orientation,
                landscape: self.device_names(Orientation::Landscape),
                portrait: self.device_names(Orientation::Portrait),
            })
    }

    /// Every device id, across both orientations.
    #[must_use]
    pub fn supported_devices(&self) -> BTreeSet<&'static str> {
        self.profiles.keys().map(|(_, id)| *id).collect()
    }

    /// Device ids registered for one orientation, sorted.
    #[must_use]
    pub fn devices(&self, orientation: Orientation) -> Vec<&'static str> {
        self.profiles
            .keys()
            .filter(|(o, _)| *o == orientation)
            .map(|(_, id)| *id)
            .collect()
    }

    /// Iterates all registered profiles in (orientation, id) order.
    pub fn profiles(&self) -> impl Iterator<Item = (Orientation, &'static str, &DeviceProfile)> {
        self.profiles
            .iter()
            .map(|((orientation, id), profile)| (*orientation, *id, profile))
    }

    fn device_names(&self, orientation: Orientation) -> Vec<String> {
        self.devices(orientation)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

fn validate_entry(entry: &CatalogEntry) -> CoreResult<()> {
    let invalid = |reason: &str| {
        Err(CoreError::Config(format!(
            "profile '{}' ({}): {reason}",
            entry.device, entry.orientation
        )))
    };

    if entry.device.trim().is_empty() {
        return invalid("device id is empty");
    }

    let image = entry.profile.frame_image;
    if image.is_empty() || image.starts_with('.') {
        return invalid("frame image name is empty or hidden");
    }
    if image.contains(['/', '\\']) {
        return invalid("frame image must be a bare file name");
    }
    if !image.to_ascii_lowercase().ends_with(".png") {
        return invalid("frame image must be a .png file");
    }

    let canvas = entry.profile.canvas;
    if canvas.width == 0 || canvas.height == 0 {
        return invalid("canvas size must be non-zero");
    }
    if entry.profile.scale.target() == 0 {
        return invalid("scale target must be non-zero");
    }

    Ok(())
}
