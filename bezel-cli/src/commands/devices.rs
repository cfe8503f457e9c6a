//! Implementation of `--list-devices`.

use crate::error::CliResult;
use bezel_core::devices::{Orientation, Registry};
use std::io::{self, Write};

/// Writes the device ids registered for each orientation, one section per
/// orientation, along with the frame image each one uses.
pub fn write_devices<W: Write>(out: &mut W, registry: &Registry) -> io::Result<()> {
    for orientation in Orientation::ALL {
        writeln!(out, "{orientation}:")?;
        for device in registry.devices(orientation) {
            if let Ok(profile) = registry.lookup(device, orientation) {
                writeln!(
                    out,
                    "  {:<16} {:<9} canvas {:<10} {}",
                    device,
                    profile.class.as_str(),
                    profile.canvas.to_string(),
                    profile.frame_image
                )?;
            }
        }
    }
    Ok(())
}

/// Prints the built-in catalog to stdout.
pub fn list_devices() -> CliResult<()> {
    let registry = Registry::builtin()?;
    let mut stdout = io::stdout().lock();
    write_devices(&mut stdout, registry)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_orientation_and_device() {
        let registry = Registry::builtin().unwrap();
        let mut buf = Vec::new();
        write_devices(&mut buf, registry).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("landscape:\n"));
        assert!(text.contains("portrait:\n"));
        for device in registry.supported_devices() {
            assert!(text.contains(device), "{device} missing from listing");
        }
        let portrait = text.split("portrait:\n").nth(1).unwrap();
        assert!(portrait.contains("imac27"));
        let landscape = text.split("portrait:\n").next().unwrap();
        assert!(!landscape.contains("imac27"));
    }
}
