//! Camera capture module for webcam access and frame capture.
//!
//! This module is the capture collaborator of the processing pipeline:
//! - Device enumeration via [`list_devices`]
//! - Camera capture via [`CameraCapture`], which runs a background thread
//!   with a single latest-frame buffer and serves grayscale grids through
//!   the pipeline's `FrameSource` contract
//! - Configuration via [`CameraSettings`] and [`Resolution`]

mod capture;
mod capture_loop;
mod device;
mod frame_utils;
mod types;

pub use capture::CameraCapture;
pub use device::list_devices;
pub use frame_utils::{center_crop, mirror_rows, resize_area, to_grayscale};
pub use types::{CameraError, CameraInfo, CameraSettings, Resolution, RgbFrame};
