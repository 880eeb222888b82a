//! Status line formatting.

use crate::session::Session;

/// Format the status line for the bottom of the screen.
///
/// Shows: recording marker | ramp | glitch marker | zoom | fps | key hints
pub fn format_status(session: &Session, fps: f32) -> String {
    let rec = if session.recording { "\u{25CF} REC" } else { "     " };
    let glt = if session.glitch.enabled { "GLT" } else { "---" };
    format!(
        " {} | {} | {} | Zoom:{:.1}x | {:>2.0} FPS | h:Help q:Quit",
        rec,
        session.ramp.name(),
        glt,
        session.zoom,
        fps,
    )
}
