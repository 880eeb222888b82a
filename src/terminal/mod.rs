//! Terminal display collaborator.
//!
//! The interactive loop talks to the display through the [`Surface`]
//! contract so tests can substitute a scripted fake. The production
//! implementation is [`TerminalSurface`] (crossterm), paired with
//! [`RawModeGuard`] for panic-safe raw mode and alternate screen handling.

mod display;
mod help;
mod raw_mode;
mod status;

use std::io;

use crossterm::event::KeyEvent;

use crate::ascii::GlyphFrame;

pub use display::TerminalSurface;
pub use help::HELP_LINES;
pub use raw_mode::RawModeGuard;
pub use status::format_status;

/// Display contract for the interactive loop.
///
/// Draw calls must truncate content that exceeds the current width rather
/// than erroring; individual draw failures are reported so the caller can
/// skip them, never tear down the session.
pub trait Surface {
    /// Current (columns, rows) of the display.
    fn dimensions(&mut self) -> (u16, u16);
    /// Draw a glyph frame from the top-left corner.
    fn render_frame(&mut self, frame: &GlyphFrame) -> io::Result<()>;
    /// Draw the status line on the bottom row.
    fn render_status(&mut self, text: &str) -> io::Result<()>;
    /// Draw a centered overlay (help panel).
    fn render_help(&mut self, lines: &[&str]) -> io::Result<()>;
    /// Poll one pending key event without blocking.
    fn poll_key(&mut self) -> Option<KeyEvent>;
}
