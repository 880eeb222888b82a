//! Tests for the recording/export bridge.

use std::fs;

use asciicam::ascii::GlyphFrame;
use asciicam::export::{
    write_recording, write_snapshot, ExportError, GifExporter, FRAME_SEPARATOR,
};

fn frame(rows: &[&str]) -> GlyphFrame {
    GlyphFrame::from_rows(rows.iter().map(|r| r.chars().collect()).collect())
}

// ==================== Text Artifacts ====================

#[test]
fn test_snapshot_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.txt");

    write_snapshot(&frame(&["@@..", "..@@"]), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "@@..\n..@@");
}

#[test]
fn test_recording_preserves_order_and_separator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recording.txt");

    let frames = [frame(&["one"]), frame(&["two"]), frame(&["three"])];
    write_recording(&frames, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let parts: Vec<&str> = content.split(FRAME_SEPARATOR).collect();
    assert_eq!(parts, vec!["one", "two", "three"]);
}

#[test]
fn test_recording_empty_buffer_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recording.txt");

    write_recording(&[], &path).unwrap();
    assert!(!path.exists());
}

// ==================== GIF Artifacts ====================

#[test]
fn test_gif_export_produces_animation() {
    // Requires a monospaced system font; skip on machines without one
    let exporter = match GifExporter::new() {
        Ok(e) => e,
        Err(ExportError::FontNotFound) => {
            eprintln!("skipping test (no system font)");
            return;
        }
        Err(e) => panic!("unexpected exporter error: {}", e),
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.gif");

    let frames = [
        frame(&["#####", ".....", "#####"]),
        frame(&[".....", "#####", "....."]),
        frame(&["#.#.#", ".#.#.", "#.#.#"]),
    ];
    exporter.export(&frames, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    // GIF89a magic and a non-trivial payload
    assert_eq!(&bytes[..6], b"GIF89a");
    assert!(bytes.len() > 100);

    // Canvas geometry follows the first frame and the cell metrics
    let (cell_w, cell_h) = exporter.cell_metrics();
    let width = u16::from_le_bytes([bytes[6], bytes[7]]) as u32;
    let height = u16::from_le_bytes([bytes[8], bytes[9]]) as u32;
    assert_eq!(width, 5 * cell_w);
    assert_eq!(height, 3 * cell_h);
}

#[test]
fn test_gif_export_empty_is_noop() {
    if let Ok(exporter) = GifExporter::new() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.gif");
        exporter.export(&[], &path).unwrap();
        assert!(!path.exists());
    }
}
