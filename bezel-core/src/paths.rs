//! Path resolution for run requests.
//!
//! Expansion is a pure string transform: a leading `~` becomes the home
//! directory and `$VAR` / `${VAR}` references are substituted. Nothing here
//! touches the filesystem.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Expands `~` and environment variables using the process environment.
///
/// Unknown variables are left as written.
#[must_use]
pub fn expand_path(raw: &str) -> PathBuf {
    expand_path_with(raw, |var| std::env::var(var).ok())
}

/// Like [`expand_path`], with an explicit variable lookup.
pub fn expand_path_with<F>(raw: &str, lookup: F) -> PathBuf
where
    F: FnMut(&str) -> Option<String>,
{
    let home_expanded = shellexpand::tilde(raw);
    let fully_expanded = shellexpand::env_with_context_no_errors(&home_expanded, lookup);
    PathBuf::from(fully_expanded.into_owned())
}

/// Derives an output path by inserting `suffix` before the extension.
///
/// `clips/rec.mp4` with `_overlay` becomes `clips/rec_overlay.mp4`; a path
/// without an extension just gets the suffix appended.
pub fn derive_output_path(input: &Path, suffix: &str) -> CoreResult<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        CoreError::InvalidRequest(format!(
            "cannot derive an output name from '{}'",
            input.display()
        ))
    })?;

    let mut name = OsString::from(stem);
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(input.with_file_name(name))
}

/// Whether two paths name the same file.
///
/// Relative paths are anchored at the current directory and `.` components
/// are ignored, so `rec.mp4`, `./rec.mp4` and `$PWD/rec.mp4` all match. The
/// filesystem is never consulted; symlinks are not resolved.
#[must_use]
pub fn same_location(a: &Path, b: &Path) -> bool {
    let significant = |p: &Path| -> Vec<OsString> {
        let anchored = std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf());
        anchored
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_os_string())
            .collect()
    };
    significant(a) == significant(b)
}
