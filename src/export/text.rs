//! Plain-text persistence for snapshots and recordings.

use std::fs;
use std::io;
use std::path::Path;

use crate::ascii::GlyphFrame;

/// Separator between frames in a recording file: a form feed on its own
/// line, so pagers and scripts can split frames cleanly.
pub const FRAME_SEPARATOR: &str = "\n\u{0C}\n";

/// Write a single glyph frame as a text file.
pub fn write_snapshot(frame: &GlyphFrame, path: &Path) -> io::Result<()> {
    fs::write(path, frame.to_text())
}

/// Write a recording as form-feed-separated text frames.
///
/// An empty buffer is a no-op: no file is created and no error raised.
pub fn write_recording(frames: &[GlyphFrame], path: &Path) -> io::Result<()> {
    if frames.is_empty() {
        return Ok(());
    }

    let joined = frames
        .iter()
        .map(GlyphFrame::to_text)
        .collect::<Vec<_>>()
        .join(FRAME_SEPARATOR);
    fs::write(path, joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(text: &[&str]) -> GlyphFrame {
        GlyphFrame::from_rows(text.iter().map(|row| row.chars().collect()).collect())
    }

    #[test]
    fn test_write_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap.txt");
        write_snapshot(&frame(&["#.", ".#"]), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "#.\n.#");
    }

    #[test]
    fn test_write_recording_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.txt");
        write_recording(&[frame(&["ab"]), frame(&["cd"])], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ab\n\u{0C}\ncd");
    }

    #[test]
    fn test_write_recording_empty_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.txt");
        write_recording(&[], &path).unwrap();
        assert!(!path.exists());
    }
}
