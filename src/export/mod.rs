//! Recording/export bridge.
//!
//! Owns no state: it receives an ordered sequence of glyph frames and a
//! target path, and persists them as plain text or as a looping animated
//! GIF. Failures are reported to the caller as results and never take the
//! process down; an empty buffer is a no-op, not an error.

mod gif;
mod text;

pub use gif::GifExporter;
pub use text::{write_recording, write_snapshot, FRAME_SEPARATOR};

/// Errors from the export bridge.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// No usable monospaced font was found on the system
    #[error("no monospaced font found; install DejaVu Sans Mono or Liberation Mono")]
    FontNotFound,
    /// A font file exists but could not be parsed
    #[error("failed to parse font: {0}")]
    FontParse(String),
    /// Filesystem failure while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// GIF encoding failure
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
