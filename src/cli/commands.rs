//! CLI subcommand handlers.

use crate::camera::{list_devices, CameraError};

/// Print available camera devices to stdout.
///
/// Returns an error if device enumeration itself fails; finding zero
/// cameras prints a hint but is not an error.
pub fn list_cameras() -> Result<(), CameraError> {
    let devices = list_devices()?;

    if devices.is_empty() {
        println!("No cameras found.");
        return Ok(());
    }

    println!("Available cameras:");
    for device in devices {
        println!("  {}", device);
    }
    Ok(())
}
