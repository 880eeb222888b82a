//! Stochastic glitch corruption of glyph rows.
//!
//! Glitching operates on mapped glyph rows, never on pixels, so it runs
//! after the lookup-table mapper. Each row is treated independently: it may
//! be cyclically shifted, and it may receive digital static from a fixed
//! noise alphabet.

use super::frame::GlyphFrame;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Glyphs injected as digital static.
pub const NOISE_ALPHABET: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '{', '}', '[', ']', '|', '\\',
    '<', '>', '?',
];

/// Per-glyph replacement probability once a row is selected for static.
const NOISE_RATE: f32 = 0.02;

/// Settings for the glitch processor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchSettings {
    /// Master toggle
    pub enabled: bool,
    /// Probability of a glitch event per row (0.0-1.0)
    pub intensity: f32,
    /// Maximum horizontal shift in glyphs
    pub max_shift: i32,
}

impl Default for GlitchSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity: 0.05,
            max_shift: 5,
        }
    }
}

/// Source of randomness for the glitch processor.
///
/// Production wiring uses thread-local entropy; tests inject scripted
/// sources so shift and noise decisions are deterministic.
pub trait NoiseSource {
    /// Flip a biased coin: true with the given probability.
    fn coin(&mut self, probability: f32) -> bool;
    /// Uniform signed offset in `[-max, max]`.
    fn offset(&mut self, max: i32) -> i32;
    /// Pick one glyph from a non-empty alphabet.
    fn pick(&mut self, alphabet: &[char]) -> char;
}

/// Thread-local entropy source used by the live session.
#[derive(Debug)]
pub struct EntropySource(ThreadRng);

impl EntropySource {
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for EntropySource {
    fn coin(&mut self, probability: f32) -> bool {
        self.0.random::<f32>() < probability
    }

    fn offset(&mut self, max: i32) -> i32 {
        if max <= 0 {
            0
        } else {
            self.0.random_range(-max..=max)
        }
    }

    fn pick(&mut self, alphabet: &[char]) -> char {
        alphabet[self.0.random_range(0..alphabet.len())]
    }
}

/// Apply glitch effects to a glyph frame.
///
/// For each row independently: with probability `intensity`, rotate the row
/// cyclically by a random offset in `[-max_shift, max_shift]` (reduced
/// modulo the row length; rows shorter than one glyph are left untouched);
/// with probability `intensity * 0.5`, replace each glyph independently with
/// a noise glyph at a small fixed rate. Disabled or empty frames pass
/// through unchanged.
pub fn apply<N: NoiseSource>(
    mut frame: GlyphFrame,
    settings: &GlitchSettings,
    noise: &mut N,
) -> GlyphFrame {
    if !settings.enabled || frame.is_empty() {
        return frame;
    }

    for row in frame.rows.iter_mut() {
        if noise.coin(settings.intensity) {
            let shift = noise.offset(settings.max_shift);
            shift_row(row, shift);
        }

        if noise.coin(settings.intensity * 0.5) {
            for glyph in row.iter_mut() {
                if noise.coin(NOISE_RATE) {
                    *glyph = noise.pick(NOISE_ALPHABET);
                }
            }
        }
    }

    frame
}

/// Cyclically shift a row right by `shift` glyphs (left for negative).
///
/// The shift is reduced modulo the row length, so shifting by the length
/// (or by zero) is a no-op. Empty rows are left untouched.
pub fn shift_row(row: &mut [char], shift: i32) {
    if row.is_empty() {
        return;
    }
    let len = row.len() as i32;
    let by = shift.rem_euclid(len) as usize;
    row.rotate_right(by);
}
