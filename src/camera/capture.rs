//! Camera capture handle and public API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use super::capture_loop::{run_capture_loop, CaptureCommand};
use super::device::list_devices;
use super::frame_utils::{center_crop, mirror_rows, resize_area, to_grayscale};
use super::types::{CameraError, CameraSettings, Resolution, RgbFrame};
use crate::ascii::GrayFrame;
use crate::pipeline::FrameSource;

/// Camera capture handle.
///
/// The camera runs a background thread that continuously captures frames
/// and stores the latest one in a shared single-frame buffer. Call
/// `start()` to begin capturing; the [`FrameSource`] implementation then
/// serves grayscale grids of exactly the requested geometry from that
/// buffer, or `None` while no frame is available.
pub struct CameraCapture {
    /// Latest captured frame (shared with the capture thread)
    frame_buffer: Arc<Mutex<Option<RgbFrame>>>,
    /// Capture thread handle
    capture_thread: Option<JoinHandle<()>>,
    /// Channel to send commands to the capture thread
    command_tx: Option<Sender<CaptureCommand>>,
    /// Signal to stop the capture thread
    stop_signal: Arc<AtomicBool>,
    /// Current settings
    settings: CameraSettings,
    /// Actual resolution (set after the camera opens)
    actual_resolution: Option<Resolution>,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Open a camera with the specified settings.
    ///
    /// This validates that the camera exists but doesn't open the camera
    /// stream until `start()` is called; the camera itself is opened inside
    /// the background thread to avoid thread-safety issues.
    ///
    /// # Errors
    /// * `CameraError::DeviceNotFound` - if the device index doesn't exist
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        let devices = list_devices()?;
        if !devices.iter().any(|d| d.index == settings.device_index) {
            return Err(CameraError::DeviceNotFound(settings.device_index));
        }

        Ok(Self {
            frame_buffer: Arc::new(Mutex::new(None)),
            capture_thread: None,
            command_tx: None,
            stop_signal: Arc::new(AtomicBool::new(false)),
            settings,
            actual_resolution: None,
        })
    }

    /// Get the current camera settings.
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Get the actual resolution the camera is using.
    ///
    /// Returns `None` if the camera hasn't been started yet. This may
    /// differ from the requested resolution if the camera doesn't support
    /// it exactly.
    pub fn actual_resolution(&self) -> Option<Resolution> {
        self.actual_resolution
    }

    /// Start capturing frames in a background thread.
    ///
    /// # Errors
    /// * `CameraError::AlreadyRunning` - if capture is already running
    /// * `CameraError::StreamFailed` - if the camera stream fails to start
    /// * `CameraError::PermissionDenied` - if camera access is denied (macOS)
    /// * `CameraError::OpenFailed` - if the camera fails to open otherwise
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.is_running() {
            return Err(CameraError::AlreadyRunning);
        }

        self.stop_signal.store(false, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel();
        self.command_tx = Some(tx);

        let buffer = Arc::clone(&self.frame_buffer);
        let stop = Arc::clone(&self.stop_signal);
        let settings = self.settings.clone();

        // Channel to receive the actual resolution/fps from the thread
        let (info_tx, info_rx) = mpsc::channel::<Result<(Resolution, u32), CameraError>>();

        let handle = std::thread::spawn(move || {
            run_capture_loop(settings, buffer, stop, rx, info_tx);
        });

        self.capture_thread = Some(handle);

        // Wait for the thread to report success or failure
        match info_rx.recv() {
            Ok(Ok((res, fps))) => {
                log::info!("camera stream started at {}x{} @{}fps", res.width, res.height, fps);
                self.actual_resolution = Some(res);
                Ok(())
            }
            Ok(Err(e)) => {
                self.shutdown_thread();
                Err(e)
            }
            Err(_) => {
                self.shutdown_thread();
                Err(CameraError::StreamFailed(
                    "capture thread terminated unexpectedly".to_string(),
                ))
            }
        }
    }

    /// Stop the capture thread, waiting for it to finish.
    pub fn stop(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);

        // Also send the stop command via the channel in case the thread is blocked
        if let Some(tx) = self.command_tx.take() {
            let _ = tx.send(CaptureCommand::Stop);
        }

        if let Some(handle) = self.capture_thread.take() {
            let _ = handle.join();
        }
    }

    /// Check if the capture thread is currently running.
    pub fn is_running(&self) -> bool {
        self.capture_thread
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Get a clone of the latest captured frame, if any.
    fn latest_frame(&self) -> Option<RgbFrame> {
        let buffer = self.frame_buffer.lock().ok()?;
        buffer.clone()
    }

    fn shutdown_thread(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);
        if let Some(h) = self.capture_thread.take() {
            let _ = h.join();
        }
    }
}

impl FrameSource for CameraCapture {
    /// Produce a grayscale grid of exactly `width` x `height` from the
    /// latest captured frame.
    ///
    /// Transform order: grayscale conversion, horizontal mirror, zoom as a
    /// center-crop, then area resize to the requested dimensions. Returns
    /// `None` when no frame has been captured yet or the target geometry is
    /// degenerate - never a partially-sized grid.
    fn read_grayscale(&mut self, width: u32, height: u32, zoom: f32, mirror: bool) -> Option<GrayFrame> {
        if width == 0 || height == 0 {
            return None;
        }

        let rgb = self.latest_frame()?;
        let mut gray = to_grayscale(&rgb);

        if mirror {
            mirror_rows(&mut gray);
        }

        let cropped = center_crop(&gray, zoom);
        Some(resize_area(&cropped, width, height))
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        self.stop();
    }
}
