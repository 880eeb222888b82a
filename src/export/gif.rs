//! Animated GIF export of recorded glyph frames.
//!
//! Each text frame is rasterized with a monospaced TTF font onto a dark
//! canvas, one visual row per text row, and the sequence is encoded as a
//! looping GIF with a fixed per-frame duration.

use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use fontdue::{Font, FontSettings, Metrics};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame as ImageFrame, Rgba, RgbaImage};

use super::ExportError;
use crate::ascii::GlyphFrame;

/// Milliseconds per GIF frame.
const FRAME_DURATION_MS: u32 = 100;

/// Font size in pixels.
const FONT_SIZE: f32 = 12.0;

/// Dark grey background.
const BG_COLOR: [u8; 3] = [20, 20, 20];

/// Off-white text.
const TEXT_COLOR: [u8; 3] = [240, 240, 240];

/// Monospaced fonts probed in order, covering macOS and common Linux
/// distributions.
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Courier New.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
];

/// Rasterizing GIF exporter for glyph-frame recordings.
pub struct GifExporter {
    font: Font,
    /// Advance of a monospace cell in pixels
    cell_width: u32,
    /// Line height in pixels
    cell_height: u32,
    /// Baseline offset from the top of a cell
    ascent: i32,
}

impl GifExporter {
    /// Create an exporter using the first monospaced font found on the
    /// system.
    ///
    /// # Errors
    /// * `ExportError::FontNotFound` - if none of the candidate fonts exist
    /// * `ExportError::FontParse` - if a candidate exists but fails to parse
    pub fn new() -> Result<Self, ExportError> {
        for candidate in FONT_CANDIDATES {
            let path = Path::new(candidate);
            if path.exists() {
                let bytes = fs::read(path)?;
                return Self::with_font_bytes(&bytes);
            }
        }
        Err(ExportError::FontNotFound)
    }

    /// Create an exporter from raw TTF bytes.
    pub fn with_font_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| ExportError::FontParse(e.to_string()))?;

        let cell_width = font.metrics('M', FONT_SIZE).advance_width.ceil().max(1.0) as u32;
        let (cell_height, ascent) = match font.horizontal_line_metrics(FONT_SIZE) {
            Some(lm) => (
                (lm.ascent - lm.descent + lm.line_gap).ceil().max(1.0) as u32,
                lm.ascent.round() as i32,
            ),
            None => ((FONT_SIZE * 1.2).ceil() as u32, FONT_SIZE as i32),
        };

        Ok(Self {
            font,
            cell_width,
            cell_height,
            ascent,
        })
    }

    /// Pixel dimensions of one character cell.
    pub fn cell_metrics(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// Export frames as a looping animated GIF.
    ///
    /// The canvas size is derived from the first frame; later frames render
    /// clipped to it if their geometry changed mid-recording. An empty
    /// buffer is a no-op.
    pub fn export(&self, frames: &[GlyphFrame], path: &Path) -> Result<(), ExportError> {
        let Some(first) = frames.first() else {
            return Ok(());
        };

        let img_width = (first.width() as u32 * self.cell_width).max(1);
        let img_height = (first.height() as u32 * self.cell_height).max(1);

        log::info!(
            "exporting {} frames at {}x{} to {}",
            frames.len(),
            img_width,
            img_height,
            path.display()
        );

        let file = File::create(path)?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder.set_repeat(Repeat::Infinite)?;

        let mut glyph_cache: HashMap<char, (Metrics, Vec<u8>)> = HashMap::new();

        for (i, frame) in frames.iter().enumerate() {
            let image = self.rasterize(frame, img_width, img_height, &mut glyph_cache);
            let delay = Delay::from_numer_denom_ms(FRAME_DURATION_MS, 1);
            encoder.encode_frame(ImageFrame::from_parts(image, 0, 0, delay))?;

            if i % 10 == 0 {
                log::debug!("encoded {}/{} frames", i, frames.len());
            }
        }

        Ok(())
    }

    /// Draw one glyph frame onto a fresh canvas.
    fn rasterize(
        &self,
        frame: &GlyphFrame,
        img_width: u32,
        img_height: u32,
        glyph_cache: &mut HashMap<char, (Metrics, Vec<u8>)>,
    ) -> RgbaImage {
        let mut image = RgbaImage::from_pixel(
            img_width,
            img_height,
            Rgba([BG_COLOR[0], BG_COLOR[1], BG_COLOR[2], 255]),
        );

        for (row_idx, row) in frame.rows.iter().enumerate() {
            let baseline = row_idx as i32 * self.cell_height as i32 + self.ascent;
            for (col_idx, &glyph) in row.iter().enumerate() {
                if glyph == ' ' {
                    continue;
                }
                let (metrics, bitmap) = glyph_cache
                    .entry(glyph)
                    .or_insert_with(|| self.font.rasterize(glyph, FONT_SIZE));

                let x0 = col_idx as i32 * self.cell_width as i32 + metrics.xmin;
                let y0 = baseline - metrics.height as i32 - metrics.ymin;
                blend_glyph(&mut image, x0, y0, metrics, bitmap);
            }
        }

        image
    }
}

/// Blend a coverage bitmap onto the canvas as text-over-background.
fn blend_glyph(image: &mut RgbaImage, x0: i32, y0: i32, metrics: &Metrics, bitmap: &[u8]) {
    let (img_w, img_h) = (image.width() as i32, image.height() as i32);

    for gy in 0..metrics.height as i32 {
        let y = y0 + gy;
        if y < 0 || y >= img_h {
            continue;
        }
        for gx in 0..metrics.width as i32 {
            let x = x0 + gx;
            if x < 0 || x >= img_w {
                continue;
            }
            let coverage = bitmap[(gy * metrics.width as i32 + gx) as usize] as u32;
            if coverage == 0 {
                continue;
            }
            let pixel = image.get_pixel_mut(x as u32, y as u32);
            for c in 0..3 {
                let bg = BG_COLOR[c] as u32;
                let fg = TEXT_COLOR[c] as u32;
                pixel.0[c] = ((bg * (255 - coverage) + fg * coverage) / 255) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(text: &[&str]) -> GlyphFrame {
        GlyphFrame::from_rows(text.iter().map(|row| row.chars().collect()).collect())
    }

    #[test]
    fn test_export_empty_buffer_is_noop() {
        // No system font needed: the empty check comes first
        if let Ok(exporter) = GifExporter::new() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("empty.gif");
            exporter.export(&[], &path).unwrap();
            assert!(!path.exists());
        }
    }

    #[test]
    fn test_export_writes_gif() {
        // Skip when no monospaced system font is available (minimal CI images)
        let exporter = match GifExporter::new() {
            Ok(e) => e,
            Err(ExportError::FontNotFound) => {
                eprintln!("skipping test (no system font)");
                return;
            }
            Err(e) => panic!("unexpected exporter error: {}", e),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.gif");
        exporter
            .export(&[frame(&["#.", ".#"]), frame(&[".#", "#."])], &path)
            .unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.len() > 6);
        assert_eq!(&bytes[..3], b"GIF");
    }

    #[test]
    fn test_cell_metrics_positive() {
        if let Ok(exporter) = GifExporter::new() {
            let (w, h) = exporter.cell_metrics();
            assert!(w > 0);
            assert!(h > 0);
        }
    }
}
