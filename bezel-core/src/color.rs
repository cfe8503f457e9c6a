//! Background fill color for the padded canvas.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Opaque black, the fill used when no color is requested.
pub const DEFAULT_BACKGROUND: &str = "#000000";

/// A validated `RRGGBB` or `RRGGBBAA` hex color.
///
/// Accepts `#`, `0x` or no prefix. Validation matters because the value ends up
/// inside a filter-graph option, where `:` or `,` would change its meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundColor(String);

impl BackgroundColor {
    /// Returns the color in ffmpeg's `0xRRGGBB[AA]` notation.
    #[must_use]
    pub fn as_ffmpeg(&self) -> String {
        format!("0x{}", self.0)
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self("000000".to_string())
    }
}

impl FromStr for BackgroundColor {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let valid_len = digits.len() == 6 || digits.len() == 8;
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidRequest(format!(
                "background color '{s}' is not a hex color like \"#ffffff\""
            )));
        }

        Ok(Self(digits.to_ascii_uppercase()))
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
