//! Frame pipeline orchestration: capture, enhance, map, glitch.
//!
//! The orchestrator composes one tick of the processing chain. It owns no
//! session state; the caller hands it an immutable settings snapshot each
//! tick and receives a glyph frame back (or nothing, when capture has no
//! frame to offer - a skipped tick, not an error).

use crate::ascii::{
    enhance, glitch, EnhanceSettings, GlitchSettings, GlyphFrame, GlyphMapper, GrayFrame,
    NoiseSource,
};

/// Terminal character aspect correction: cells are roughly twice as tall as
/// they are wide, so the capture grid carries more rows than the terminal
/// shows.
pub const ASPECT_CORRECTION: f32 = 0.55;

/// Rows reserved at the bottom of the terminal for the status line.
const RESERVED_ROWS: u16 = 2;

/// Capture contract: a collaborator that produces grayscale grids on demand.
///
/// Implementations must apply mirror as a horizontal flip before the zoom
/// center-crop, zoom before the resize, and must return a grid of exactly
/// the requested dimensions or `None` - never a partially-sized grid.
pub trait FrameSource {
    fn read_grayscale(
        &mut self,
        width: u32,
        height: u32,
        zoom: f32,
        mirror: bool,
    ) -> Option<GrayFrame>;
}

/// Immutable snapshot of the session settings a tick needs.
///
/// Captured once per tick at the tick boundary, so every pipeline stage in
/// the tick sees a consistent view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSettings {
    pub zoom: f32,
    pub mirror: bool,
    pub enhance: EnhanceSettings,
    pub glitch: GlitchSettings,
}

/// Derive the capture grid dimensions from the terminal geometry.
///
/// The grid spans the full terminal width; the row count is expanded by the
/// character aspect correction (minus the reserved status rows), and the
/// renderer shows as many rows as fit.
pub fn capture_dimensions(term_cols: u16, term_rows: u16) -> (u32, u32) {
    let width = term_cols as u32;
    let usable = term_rows.saturating_sub(RESERVED_ROWS) as f32;
    let height = (usable / ASPECT_CORRECTION) as u32;
    (width, height)
}

/// Run one pipeline tick: capture, enhance, map, optionally glitch.
///
/// Returns `None` when the source has no frame this tick; the caller skips
/// rendering and retries on the next tick.
pub fn tick<S: FrameSource, N: NoiseSource>(
    source: &mut S,
    settings: &TickSettings,
    mapper: &GlyphMapper,
    noise: &mut N,
    width: u32,
    height: u32,
) -> Option<GlyphFrame> {
    let gray = source.read_grayscale(width, height, settings.zoom, settings.mirror)?;
    let enhanced = enhance(&gray, &settings.enhance);
    let frame = mapper.map(&enhanced);
    Some(glitch::apply(frame, &settings.glitch, noise))
}
