//! Unit tests for the glyph lookup-table mapper.
//!
//! These verify the table-building law, its boundary behavior, and that
//! ramp switches always take effect before the next mapping.

use asciicam::ascii::{build_table, GlyphMapper, GrayFrame, MapperError, Ramp, RAMP_CHOICES};

// ==================== Lookup Law Tests ====================

/// The contract: lookup(build(R), i) == R[min(floor(i * |R| / 256), |R| - 1)]
fn expected_glyph(glyphs: &[char], intensity: u8) -> char {
    let len = glyphs.len();
    let index = (intensity as usize * len / 256).min(len - 1);
    glyphs[index]
}

#[test]
fn test_lookup_law_all_builtin_ramps() {
    for ramp in RAMP_CHOICES {
        let glyphs: Vec<char> = ramp.glyphs().chars().collect();
        let table = build_table(ramp.glyphs()).unwrap();
        for i in 0..=255u8 {
            assert_eq!(
                table[i as usize],
                expected_glyph(&glyphs, i),
                "ramp {} intensity {}",
                ramp.name(),
                i
            );
        }
    }
}

#[test]
fn test_lookup_law_small_ramps() {
    for glyphs in ["#", "_#", "abc", " .:oO@"] {
        let chars: Vec<char> = glyphs.chars().collect();
        let table = build_table(glyphs).unwrap();
        for i in 0..=255u8 {
            assert_eq!(table[i as usize], expected_glyph(&chars, i));
        }
    }
}

#[test]
fn test_lookup_boundaries() {
    let table = build_table(Ramp::Standard.glyphs()).unwrap();
    // i = 0 resolves to the first (lightest) glyph
    assert_eq!(table[0], ' ');
    // i = 255 resolves to the last (darkest) glyph: clamped, no wrap
    assert_eq!(table[255], '@');
}

#[test]
fn test_table_length_is_256() {
    let table = build_table("ab").unwrap();
    assert_eq!(table.len(), 256);
}

#[test]
fn test_empty_ramp_rejected() {
    assert_eq!(build_table("").unwrap_err(), MapperError::EmptyRamp);
    assert!(GlyphMapper::new("").is_err());
}

// ==================== Rebuild Tests ====================

#[test]
fn test_rebuild_with_new_ramp_maps_saturated_grid() {
    // After switching ramps, an all-255 grid must map entirely to the new
    // ramp's last glyph.
    let gray = GrayFrame::from_data(vec![255; 12], 4, 3);

    let mapper = GlyphMapper::for_ramp(Ramp::Standard).unwrap();
    let frame = mapper.map(&gray);
    assert!(frame.rows.iter().flatten().all(|&g| g == '@'));

    let mapper = GlyphMapper::for_ramp(Ramp::Block).unwrap();
    let frame = mapper.map(&gray);
    assert!(frame.rows.iter().flatten().all(|&g| g == '█'));
}

#[test]
fn test_map_preserves_geometry() {
    let mapper = GlyphMapper::for_ramp(Ramp::Minimal).unwrap();
    let gray = GrayFrame::from_data((0..60).map(|i| (i * 4) as u8).collect(), 10, 6);
    let frame = mapper.map(&gray);
    assert_eq!(frame.height(), 6);
    assert!(frame.rows.iter().all(|row| row.len() == 10));
}

#[test]
fn test_two_glyph_index_arithmetic() {
    // floor(128 * 2 / 256) = 1, so 128 lands on the darker glyph
    let mapper = GlyphMapper::new("_#").unwrap();
    assert_eq!(mapper.lookup(0), '_');
    assert_eq!(mapper.lookup(127), '_');
    assert_eq!(mapper.lookup(128), '#');
    assert_eq!(mapper.lookup(255), '#');
}
