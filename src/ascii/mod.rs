//! ASCII processing pipeline: intensity grids in, glyph frames out.
//!
//! The per-tick transform chain is:
//!
//! 1. **Enhancement** - brightness/contrast, adaptive local contrast,
//!    edge blending, inversion ([`enhance`])
//! 2. **Mapping** - intensity to glyph via a precomputed 256-entry
//!    lookup table ([`mapper`])
//! 3. **Glitch** - optional stochastic corruption of the glyph rows
//!    ([`glitch`])
//!
//! Every stage is pure: identical input and settings produce identical
//! output, with randomness confined to an injectable [`glitch::NoiseSource`].

pub mod enhance;
pub mod frame;
pub mod glitch;
pub mod mapper;
pub mod ramp;

pub use enhance::{enhance, EnhanceSettings};
pub use frame::{GlyphFrame, GrayFrame};
pub use glitch::{EntropySource, GlitchSettings, NoiseSource};
pub use mapper::{build_table, GlyphMapper, MapperError};
pub use ramp::{Ramp, RAMP_CHOICES};
