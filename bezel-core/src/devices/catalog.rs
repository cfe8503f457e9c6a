//! Built-in device-frame catalog.
//!
//! Padding sizes are chosen so the recording keeps its native resolution where
//! possible: the pinned scale axis matches the device's screen resolution and
//! the canvas matches the frame artwork. Portrait phones and tablets pin the
//! height; landscape profiles pin the width (after rotation).

use super::{Anchor, CanvasSize, DeviceClass, DeviceProfile, Orientation, ScaleRule};

/// One row of the catalog: a profile registered under (orientation, device-id).
#[derive(Debug, Clone, Copy)]
pub(crate) struct CatalogEntry {
    pub orientation: Orientation,
    pub device: &'static str,
    pub profile: DeviceProfile,
}

const fn centered(
    orientation: Orientation,
    device: &'static str,
    class: DeviceClass,
    frame_image: &'static str,
    canvas: (u32, u32),
    scale: ScaleRule,
) -> CatalogEntry {
    CatalogEntry {
        orientation,
        device,
        profile: DeviceProfile {
            frame_image,
            canvas: CanvasSize::new(canvas.0, canvas.1),
            scale,
            overlay_anchor: Anchor::Center,
            video_anchor: Anchor::Center,
            class,
        },
    }
}

const fn cornered(
    device: &'static str,
    class: DeviceClass,
    frame_image: &'static str,
    canvas: (u32, u32),
    scale: ScaleRule,
    video_offset: (u32, u32),
) -> CatalogEntry {
    CatalogEntry {
        orientation: Orientation::Portrait,
        device,
        profile: DeviceProfile {
            frame_image,
            canvas: CanvasSize::new(canvas.0, canvas.1),
            scale,
            overlay_anchor: Anchor::Fixed { x: 0, y: 0 },
            video_anchor: Anchor::Fixed {
                x: video_offset.0,
                y: video_offset.1,
            },
            class,
        },
    }
}

use super::DeviceClass::{Desktop, Phone, Tablet, Wearable};
use super::Orientation::{Landscape, Portrait};
use super::ScaleRule::{FixedHeight, FixedWidth};

pub(crate) static CATALOG: &[CatalogEntry] = &[
    // ---- Landscape ----
    centered(Landscape, "iphone8S", Phone, "iPhone-8-Landscape-Silver.png", (1800, 920), FixedWidth(1334)),
    centered(Landscape, "iphone8SG", Phone, "iPhone-8-Landscape-Space-Gray.png", (1800, 920), FixedWidth(1334)),
    centered(Landscape, "iphone8plusS", Phone, "iPhone-8Plus-Landscape-Silver.png", (2540, 1280), FixedWidth(1920)),
    centered(Landscape, "iphone8plusSG", Phone, "iPhone-8Plus-Landscape-Space-Gray.png", (2540, 1280), FixedWidth(1920)),
    centered(Landscape, "iphoneXS", Phone, "iPhone-XS-Landscape-Space-Gray.png", (2062, 1044), FixedWidth(1920)),
    centered(Landscape, "iphoneXSmax", Phone, "iPhone-XS-Max-Landscape-Space-Gray.png", (2050, 1032), FixedWidth(1920)),
    centered(Landscape, "ipadPro11", Tablet, "iPad-Pro-11-Landscape-Space-Gray.png", (2680, 1960), FixedWidth(2388)),
    centered(Landscape, "ipadPro129", Tablet, "iPad-Pro-12.9-Landscape-Space-Gray.png", (3100, 2420), FixedWidth(2732)),
    // ---- Portrait ----
    centered(Portrait, "iphone8S", Phone, "iPhone-8-Portrait-Silver.png", (920, 1800), FixedHeight(1334)),
    centered(Portrait, "iphone8SG", Phone, "iPhone-8-Portrait-Space-Gray.png", (920, 1800), FixedHeight(1334)),
    centered(Portrait, "iphone8plusS", Phone, "iPhone-8Plus-Portrait-Silver.png", (1280, 2540), FixedHeight(1920)),
    centered(Portrait, "iphone8plusSG", Phone, "iPhone-8Plus-Portrait-Space-Gray.png", (1280, 2540), FixedHeight(1920)),
    centered(Portrait, "iphoneXS", Phone, "iPhone-XS-Portrait-Space-Gray.png", (1044, 2062), FixedHeight(1920)),
    centered(Portrait, "iphoneXSmax", Phone, "iPhone-XS-Max-Portrait-Space-Gray.png", (1032, 2050), FixedHeight(1920)),
    centered(Portrait, "ipadPro11", Tablet, "iPad-Pro-11-Portrait-Space-Gray.png", (1960, 2680), FixedHeight(2388)),
    centered(Portrait, "ipadPro129", Tablet, "iPad-Pro-12.9-Portrait-Space-Gray.png", (2420, 3100), FixedHeight(2732)),
    // Stationary displays and watches have a single orientation and a frame
    // whose screen window is not centered in the artwork.
    cornered("imac27", Desktop, "iMac-27-Silver.png", (3200, 2640), FixedWidth(2560), (320, 260)),
    cornered("watch44", Wearable, "Apple-Watch-44mm-Space-Gray.png", (520, 856), FixedHeight(448), (76, 204)),
];
