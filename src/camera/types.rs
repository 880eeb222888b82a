//! Camera types and data structures.

use std::fmt;
use std::time::Instant;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Camera resolution settings.
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Medium resolution (640x480) - balanced, recommended
    pub const MEDIUM: Resolution = Resolution {
        width: 640,
        height: 480,
    };
}

impl Default for Resolution {
    fn default() -> Self {
        Self::MEDIUM
    }
}

/// A captured RGB camera frame (3 bytes per pixel, row-major).
#[derive(Debug, Clone)]
pub struct RgbFrame {
    /// Raw pixel data in RGB order
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Timestamp when the frame was captured
    pub timestamp: Instant,
}

/// Settings for camera capture.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Camera device index
    pub device_index: u32,
    /// Capture resolution
    pub resolution: Resolution,
    /// Target FPS (actual may vary)
    pub fps: u32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            resolution: Resolution::default(),
            fps: 30,
        }
    }
}

/// Errors that can occur during camera operations.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    /// Failed to query camera devices
    #[error("failed to query cameras: {0}")]
    QueryFailed(String),
    /// Failed to open camera
    #[error("failed to open camera: {0}")]
    OpenFailed(String),
    /// Camera permission denied (macOS)
    #[error(
        "camera permission denied; grant access in System Settings > Privacy & Security > Camera"
    )]
    PermissionDenied,
    /// Camera device not found at the specified index
    #[error("camera device {0} not found; run 'asciicam list-cameras' to see available devices")]
    DeviceNotFound(u32),
    /// Failed to start video stream
    #[error("failed to start camera stream: {0}")]
    StreamFailed(String),
    /// Capture thread is already running
    #[error("capture thread is already running")]
    AlreadyRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info_display() {
        let info = CameraInfo {
            index: 0,
            name: "Test Camera".to_string(),
            description: "Built-in".to_string(),
        };
        assert_eq!(format!("{}", info), "[0] Test Camera (Built-in)");
    }

    #[test]
    fn test_camera_settings_default() {
        let settings = CameraSettings::default();
        assert_eq!(settings.device_index, 0);
        assert_eq!(settings.resolution.width, 640);
        assert_eq!(settings.resolution.height, 480);
        assert_eq!(settings.fps, 30);
    }

    #[test]
    fn test_camera_error_display() {
        assert_eq!(
            format!("{}", CameraError::StreamFailed("test".to_string())),
            "failed to start camera stream: test"
        );
        assert!(format!("{}", CameraError::DeviceNotFound(5)).contains('5'));
    }
}
