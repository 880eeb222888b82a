//! Character ramp definitions for glyph mapping.

/// Standard 10-character ramp (balanced).
/// Glyphs ordered from lightest (space) to darkest (@).
pub const RAMP_STANDARD: &str = " .:-=+*#%@";

/// Rich alphanumeric ramp (recommended for faces/detail).
pub const RAMP_ALPHA: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Extended symbols ramp (artistic).
pub const RAMP_SYMBOLS: &str =
    " `.-':_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Wg0MNQB%&@";

/// Dense 70-character ramp (maximum detail).
pub const RAMP_DENSE: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Block characters (stylized, high contrast).
pub const RAMP_BLOCK: &str = " ░▒▓█";

/// Minimal ramp (high contrast, simple).
pub const RAMP_MINIMAL: &str = " .:oO@";

/// Character ramp for glyph mapping.
///
/// A closed set of ramps, each an ordered glyph sequence from lightest to
/// darkest. The live session switches between them with the 1-6 keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ramp {
    /// Rich alphanumeric ramp (70 levels)
    #[default]
    Alpha,
    /// Extended symbols ramp (92 levels)
    Symbols,
    /// Dense ramp (70 levels)
    Dense,
    /// Standard density ramp (10 levels)
    Standard,
    /// Unicode block ramp (5 levels)
    Block,
    /// Minimal ramp (6 levels)
    Minimal,
}

/// Ramps in live-switch order, indexed by the 1-6 keys.
pub const RAMP_CHOICES: [Ramp; 6] = [
    Ramp::Alpha,
    Ramp::Symbols,
    Ramp::Dense,
    Ramp::Standard,
    Ramp::Block,
    Ramp::Minimal,
];

impl Ramp {
    /// Get the glyph string for this ramp, lightest to darkest.
    ///
    /// Every variant maps to a non-empty string.
    pub fn glyphs(&self) -> &'static str {
        match self {
            Ramp::Alpha => RAMP_ALPHA,
            Ramp::Symbols => RAMP_SYMBOLS,
            Ramp::Dense => RAMP_DENSE,
            Ramp::Standard => RAMP_STANDARD,
            Ramp::Block => RAMP_BLOCK,
            Ramp::Minimal => RAMP_MINIMAL,
        }
    }

    /// Get a human-readable name for the ramp.
    pub fn name(&self) -> &'static str {
        match self {
            Ramp::Alpha => "alpha",
            Ramp::Symbols => "symbols",
            Ramp::Dense => "dense",
            Ramp::Standard => "standard",
            Ramp::Block => "block",
            Ramp::Minimal => "minimal",
        }
    }

    /// Look up the ramp bound to a digit key (1-6).
    pub fn from_key(digit: char) -> Option<Self> {
        let idx = digit.to_digit(10)? as usize;
        if (1..=RAMP_CHOICES.len()).contains(&idx) {
            Some(RAMP_CHOICES[idx - 1])
        } else {
            None
        }
    }
}
