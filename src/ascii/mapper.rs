//! Intensity to glyph mapping via a precomputed lookup table.

use super::frame::{GlyphFrame, GrayFrame};
use super::ramp::Ramp;

/// Errors from building a glyph lookup table.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapperError {
    /// The ramp contains no glyphs
    #[error("character ramp is empty")]
    EmptyRamp,
}

/// Build a 256-entry intensity→glyph table for a ramp.
///
/// Entry `i` is `glyphs[min(i * len / 256, len - 1)]`, so intensity 0 maps
/// to the first (lightest) glyph and 255 clamps to the last (darkest) one.
///
/// # Errors
/// * `MapperError::EmptyRamp` - if the ramp has zero glyphs
pub fn build_table(glyphs: &str) -> Result<Box<[char; 256]>, MapperError> {
    let ramp: Vec<char> = glyphs.chars().collect();
    if ramp.is_empty() {
        return Err(MapperError::EmptyRamp);
    }

    let len = ramp.len();
    let mut table = Box::new([' '; 256]);
    for (i, slot) in table.iter_mut().enumerate() {
        let index = (i * len / 256).min(len - 1);
        *slot = ramp[index];
    }
    Ok(table)
}

/// Maps grayscale intensities to glyphs with O(1) lookup per pixel.
///
/// The table is derived once from the ramp at construction; switching
/// ramps means building a fresh mapper, so a stale table can never survive
/// a ramp change.
#[derive(Debug, Clone)]
pub struct GlyphMapper {
    table: Box<[char; 256]>,
}

impl GlyphMapper {
    /// Create a mapper for an arbitrary glyph ramp, lightest to darkest.
    ///
    /// # Errors
    /// * `MapperError::EmptyRamp` - if the ramp has zero glyphs
    pub fn new(glyphs: &str) -> Result<Self, MapperError> {
        Ok(Self {
            table: build_table(glyphs)?,
        })
    }

    /// Create a mapper for one of the built-in ramps.
    ///
    /// The built-in ramps are non-empty by construction, but the table
    /// build is checked rather than assumed.
    pub fn for_ramp(ramp: Ramp) -> Result<Self, MapperError> {
        Self::new(ramp.glyphs())
    }

    /// Look up the glyph for a single intensity value.
    #[inline]
    pub fn lookup(&self, intensity: u8) -> char {
        self.table[intensity as usize]
    }

    /// Map a full intensity grid to a glyph frame.
    ///
    /// Pure and linear in the grid size: one table lookup per pixel, no
    /// per-pixel ramp search.
    pub fn map(&self, gray: &GrayFrame) -> GlyphFrame {
        let rows = (0..gray.height)
            .map(|y| {
                gray.row(y)
                    .iter()
                    .map(|&v| self.table[v as usize])
                    .collect()
            })
            .collect();
        GlyphFrame::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_table_empty_ramp() {
        assert_eq!(build_table("").unwrap_err(), MapperError::EmptyRamp);
    }

    #[test]
    fn test_build_table_single_glyph() {
        let table = build_table("#").unwrap();
        assert!(table.iter().all(|&g| g == '#'));
    }

    #[test]
    fn test_table_boundaries() {
        let table = build_table(" .:-=+*#%@").unwrap();
        assert_eq!(table[0], ' ');
        // 255 must clamp to the last glyph, not wrap
        assert_eq!(table[255], '@');
    }

    #[test]
    fn test_two_glyph_midpoint() {
        // floor(128 * 2 / 256) = 1 -> second glyph
        let mapper = GlyphMapper::new("_#").unwrap();
        assert_eq!(mapper.lookup(127), '_');
        assert_eq!(mapper.lookup(128), '#');
    }

    #[test]
    fn test_map_dimensions() {
        let mapper = GlyphMapper::for_ramp(Ramp::Standard).unwrap();
        let gray = GrayFrame::from_data(vec![0, 64, 128, 192, 255, 32], 3, 2);
        let frame = mapper.map(&gray);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.width(), 3);
    }

    #[test]
    fn test_ramp_switch_uses_new_table() {
        let mapper = GlyphMapper::for_ramp(Ramp::Standard).unwrap();
        assert_eq!(mapper.lookup(255), '@');
        let mapper = GlyphMapper::for_ramp(Ramp::Block).unwrap();
        assert_eq!(mapper.lookup(255), '█');
    }
}
