// ============================================================================
// bezel-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Run-Independent Settings
//
// Settings that do not change between runs: where the frame artwork lives,
// which ffmpeg binary to launch, and the suffix used to derive output names.
// Values come from defaults, then BEZEL_* environment variables, then any
// explicit overrides the CLI applies on top.
//
// KEY COMPONENTS:
// - OverlayConfig: Main configuration structure
// - Default constants
// - get_env_* helpers for environment lookups

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Directory holding the device-frame PNGs, relative to the working directory.
pub const DEFAULT_FRAMES_DIR: &str = "device_frames";

/// Suffix inserted before the extension when no output path is given.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_overlay";

pub const ENV_FRAMES_DIR: &str = "BEZEL_FRAMES_DIR";
pub const ENV_FFMPEG: &str = "BEZEL_FFMPEG";
pub const ENV_OUTPUT_SUFFIX: &str = "BEZEL_OUTPUT_SUFFIX";

// ============================================================================
// OVERLAY CONFIGURATION
// ============================================================================

/// Settings shared by every overlay run.
///
/// # Examples
///
/// ```rust
/// use bezel_core::config::OverlayConfig;
/// use std::path::PathBuf;
///
/// let mut config = OverlayConfig::default();
/// config.frames_dir = PathBuf::from("/opt/bezel/frames");
/// config.validate().unwrap();
/// assert_eq!(config.ffmpeg_binary(), "ffmpeg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Directory containing the frame images referenced by device profiles
    pub frames_dir: PathBuf,

    /// Explicit ffmpeg binary; `None` means `ffmpeg` from PATH
    pub ffmpeg_path: Option<PathBuf>,

    /// Suffix for derived output names (`rec.mp4` -> `rec_overlay.mp4`)
    pub output_suffix: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from(DEFAULT_FRAMES_DIR),
            ffmpeg_path: None,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl OverlayConfig {
    /// Builds a configuration from defaults overridden by `BEZEL_*` variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            frames_dir: get_env_path(ENV_FRAMES_DIR, defaults.frames_dir),
            ffmpeg_path: std::env::var_os(ENV_FFMPEG).map(PathBuf::from),
            output_suffix: get_env_string(ENV_OUTPUT_SUFFIX, defaults.output_suffix),
        }
    }

    /// The binary name or path handed to the process launcher.
    #[must_use]
    pub fn ffmpeg_binary(&self) -> String {
        self.ffmpeg_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ffmpeg".to_string())
    }

    /// Checks that the settings can produce a usable output path.
    pub fn validate(&self) -> CoreResult<()> {
        if self.output_suffix.is_empty() {
            return Err(CoreError::Config("output suffix must not be empty".into()));
        }
        if self.output_suffix.contains(['/', '\\']) {
            return Err(CoreError::Config(format!(
                "output suffix '{}' must not contain path separators",
                self.output_suffix
            )));
        }
        if self.frames_dir.as_os_str().is_empty() {
            return Err(CoreError::Config("frames directory must not be empty".into()));
        }
        Ok(())
    }
}

// ============================================================================
// ENVIRONMENT HELPERS
// ============================================================================

/// Get a string value from an environment variable or use the default
pub fn get_env_string(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

/// Get a path value from an environment variable or use the default
pub fn get_env_path(key: &str, default: PathBuf) -> PathBuf {
    std::env::var_os(key).map(PathBuf::from).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = OverlayConfig::default();
        assert_eq!(config.frames_dir, PathBuf::from("device_frames"));
        assert_eq!(config.output_suffix, "_overlay");
        assert_eq!(config.ffmpeg_binary(), "ffmpeg");
        config.validate().unwrap();
    }

    #[test]
    fn explicit_ffmpeg_path_is_used() {
        let config = OverlayConfig {
            ffmpeg_path: Some(PathBuf::from("/usr/local/bin/ffmpeg")),
            ..OverlayConfig::default()
        };
        assert_eq!(config.ffmpeg_binary(), "/usr/local/bin/ffmpeg");
    }

    #[test]
    fn bad_suffixes_are_rejected() {
        let mut config = OverlayConfig::default();
        config.output_suffix = String::new();
        assert!(config.validate().is_err());

        config.output_suffix = "/framed".to_string();
        assert!(config.validate().is_err());
    }
}
