//! Unit tests for the enhancement chain.

use asciicam::ascii::{enhance, EnhanceSettings, GrayFrame};

fn checker(width: u32, height: u32, low: u8, high: u8) -> GrayFrame {
    let data = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            if (x + y) % 2 == 0 {
                low
            } else {
                high
            }
        })
        .collect();
    GrayFrame::from_data(data, width, height)
}

// ==================== Identity and Round-Trip Tests ====================

#[test]
fn test_all_disabled_is_identity() {
    // contrast 1.0, brightness 0, every stage off: bit-identical output
    let gray = checker(20, 15, 40, 210);
    let out = enhance(&gray, &EnhanceSettings::disabled());
    assert_eq!(out, gray);
}

#[test]
fn test_invert_round_trip() {
    // Two inverts through the otherwise-disabled chain restore the input
    let gray = checker(8, 8, 3, 252);
    let settings = EnhanceSettings {
        invert: true,
        ..EnhanceSettings::disabled()
    };
    let once = enhance(&gray, &settings);
    assert_ne!(once, gray);
    let twice = enhance(&once, &settings);
    assert_eq!(twice, gray);
}

#[test]
fn test_deterministic() {
    let gray = checker(32, 32, 10, 240);
    let settings = EnhanceSettings::default();
    assert_eq!(enhance(&gray, &settings), enhance(&gray, &settings));
}

// ==================== Range Safety Tests ====================

#[test]
fn test_full_chain_stays_in_range() {
    // Saturating input through every stage: output must be valid u8 data of
    // the same geometry (range safety is implied by the type; check shape)
    let gray = checker(33, 17, 0, 255);
    let settings = EnhanceSettings {
        brightness: 100,
        contrast: 3.0,
        equalize: true,
        edge_blend: true,
        edge_alpha: 1.0,
        invert: true,
        ..EnhanceSettings::default()
    };
    let out = enhance(&gray, &settings);
    assert_eq!(out.width, 33);
    assert_eq!(out.height, 17);
    assert_eq!(out.data.len(), gray.data.len());
}

#[test]
fn test_negative_brightness_clamps_to_zero() {
    let gray = GrayFrame::from_data(vec![5, 50, 200], 3, 1);
    let settings = EnhanceSettings {
        brightness: -60,
        ..EnhanceSettings::disabled()
    };
    let out = enhance(&gray, &settings);
    assert_eq!(out.data, vec![0, 0, 140]);
}

#[test]
fn test_contrast_scales_before_brightness() {
    // (100 * 2.0) + 10 = 210, not (100 + 10) * 2.0 = 220
    let gray = GrayFrame::from_data(vec![100], 1, 1);
    let settings = EnhanceSettings {
        brightness: 10,
        contrast: 2.0,
        ..EnhanceSettings::disabled()
    };
    let out = enhance(&gray, &settings);
    assert_eq!(out.data, vec![210]);
}

// ==================== Edge Blend Tests ====================

#[test]
fn test_edge_blend_zero_alpha_is_identity() {
    let gray = checker(16, 16, 30, 220);
    let settings = EnhanceSettings {
        edge_blend: true,
        edge_alpha: 0.0,
        ..EnhanceSettings::disabled()
    };
    assert_eq!(enhance(&gray, &settings), gray);
}

#[test]
fn test_edge_blend_full_alpha_is_edge_map() {
    // alpha = 1.0 replaces the grid with the gradient magnitude; a flat
    // grid has no gradient, so everything goes to zero
    let gray = GrayFrame::from_data(vec![77; 36], 6, 6);
    let settings = EnhanceSettings {
        edge_blend: true,
        edge_alpha: 1.0,
        ..EnhanceSettings::disabled()
    };
    let out = enhance(&gray, &settings);
    assert!(out.data.iter().all(|&v| v == 0));
}

#[test]
fn test_edge_blend_brightens_boundaries() {
    // A hard vertical step: pixels at the seam gain intensity from the
    // blended edge map, pixels far from it lose a fraction
    let mut gray = GrayFrame::new(8, 5);
    for y in 0..5 {
        for x in 4..8 {
            gray.data[(y * 8 + x) as usize] = 200;
        }
    }
    let settings = EnhanceSettings {
        edge_blend: true,
        edge_alpha: 0.5,
        ..EnhanceSettings::disabled()
    };
    let out = enhance(&gray, &settings);
    // Interior dark pixel away from the seam: 0 * 0.5 + 0 * 0.5 = 0
    assert_eq!(out.get(1, 2), 0);
    // Dark pixel at the seam gets half the (saturated) edge magnitude
    assert!(out.get(3, 2) > 100);
}

// ==================== Adaptive Equalization Tests ====================

#[test]
fn test_equalize_spreads_low_contrast_gradient() {
    // A gradient compressed into [100, 140] should widen after equalization
    let gray = GrayFrame::from_data(
        (0..64 * 64).map(|i| 100 + ((i % 64) * 40 / 63) as u8).collect(),
        64,
        64,
    );
    let settings = EnhanceSettings {
        equalize: true,
        ..EnhanceSettings::disabled()
    };
    let out = enhance(&gray, &settings);

    let in_spread = 40;
    let out_min = *out.data.iter().min().unwrap() as i32;
    let out_max = *out.data.iter().max().unwrap() as i32;
    assert!(
        out_max - out_min > in_spread,
        "equalization did not widen contrast: {}..{}",
        out_min,
        out_max
    );
}

#[test]
fn test_equalize_flat_grid_stays_near_flat() {
    let gray = GrayFrame::from_data(vec![128; 64 * 64], 64, 64);
    let settings = EnhanceSettings {
        equalize: true,
        ..EnhanceSettings::disabled()
    };
    let out = enhance(&gray, &settings);
    for &v in &out.data {
        assert!((118..=142).contains(&v), "flat 128 remapped to {}", v);
    }
}
