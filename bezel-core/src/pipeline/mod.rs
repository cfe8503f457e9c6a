//! Overlay pipeline builder.
//!
//! Combines a resolved [`DeviceProfile`](crate::devices::DeviceProfile) with a
//! [`RunRequest`] into a [`ProcessingJob`]: rotate, scale, pad onto the canvas,
//! then composite the device frame on top.

pub mod filter;
pub mod job;

pub use filter::{FilterStep, VideoFilterChain};
pub use job::{AudioDirective, MetadataDirective, ProcessingJob, RunRequest, build_job};
