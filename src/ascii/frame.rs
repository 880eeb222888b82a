//! Frame value types shared by the processing pipeline.

/// A grayscale intensity grid, one byte per pixel in row-major order.
///
/// This is the unit of exchange between the capture collaborator and the
/// processing pipeline. It has pure value semantics: a fresh grid is
/// produced each tick and dropped once mapped to glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    /// Pixel intensities (0-255), `width * height` bytes
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl GrayFrame {
    /// Create a frame from raw intensity data.
    ///
    /// The data length must equal `width * height`; mismatches are a
    /// programming error in the capture adapter, so this is checked with
    /// a debug assertion rather than a runtime result.
    pub fn from_data(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), (width * height) as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Create a zero-filled frame of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; (width * height) as usize],
            width,
            height,
        }
    }

    /// Intensity at (x, y). Callers must stay in bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[(y * self.width + x) as usize]
    }

    /// One pixel row as a slice.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.width) as usize;
        &self.data[start..start + self.width as usize]
    }
}

/// One full grid of mapped characters, one row per captured pixel row.
///
/// Ephemeral per tick unless the session is recording, in which case
/// frames are cloned into the recorded buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphFrame {
    /// Glyph rows, top to bottom
    pub rows: Vec<Vec<char>>,
}

impl GlyphFrame {
    /// Build a frame from glyph rows.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// Height in rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width in glyphs (of the first row; all rows share it).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Whether the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the frame as plain text, rows joined by newlines.
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
