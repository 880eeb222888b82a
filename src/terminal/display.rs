//! Crossterm-backed terminal surface.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use super::Surface;
use crate::ascii::GlyphFrame;

/// Terminal surface for rendering glyph frames.
///
/// Rows and the status line are truncated to the current terminal width;
/// the bottom row is reserved for the status line. The caller is expected
/// to hold a raw-mode guard while this surface is in use.
pub struct TerminalSurface {
    stdout: io::Stdout,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    fn truncated(text: &str, width: u16) -> String {
        text.chars().take(width as usize).collect()
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn dimensions(&mut self) -> (u16, u16) {
        crossterm::terminal::size().unwrap_or((80, 24))
    }

    fn render_frame(&mut self, frame: &GlyphFrame) -> io::Result<()> {
        let (cols, rows) = self.dimensions();
        // The bottom row belongs to the status line
        let visible = rows.saturating_sub(1) as usize;

        for (y, row) in frame.rows.iter().take(visible).enumerate() {
            let line: String = row.iter().take(cols as usize).collect();
            crossterm::queue!(
                self.stdout,
                MoveTo(0, y as u16),
                Print(line),
                Clear(ClearType::UntilNewLine)
            )?;
        }
        self.stdout.flush()
    }

    fn render_status(&mut self, text: &str) -> io::Result<()> {
        let (cols, rows) = self.dimensions();
        if rows == 0 {
            return Ok(());
        }
        let mut line = Self::truncated(text, cols);
        // Pad so the reverse-video bar spans the full width
        while (line.chars().count() as u16) < cols {
            line.push(' ');
        }
        crossterm::queue!(
            self.stdout,
            MoveTo(0, rows - 1),
            SetAttribute(Attribute::Reverse),
            Print(line),
            SetAttribute(Attribute::Reset)
        )?;
        self.stdout.flush()
    }

    fn render_help(&mut self, lines: &[&str]) -> io::Result<()> {
        let (cols, rows) = self.dimensions();
        let box_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let sy = (rows as usize).saturating_sub(lines.len()) / 2;
        let sx = (cols as usize).saturating_sub(box_width) / 2;

        for (i, line) in lines.iter().enumerate() {
            let y = sy + i;
            if y >= rows as usize {
                break;
            }
            crossterm::queue!(
                self.stdout,
                MoveTo(sx as u16, y as u16),
                SetAttribute(Attribute::Reverse),
                Print(Self::truncated(line, cols)),
                SetAttribute(Attribute::Reset)
            )?;
        }
        self.stdout.flush()
    }

    fn poll_key(&mut self) -> Option<KeyEvent> {
        // Non-blocking: returns immediately when no event is pending
        if !event::poll(Duration::ZERO).ok()? {
            return None;
        }
        match event::read().ok()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(key),
            _ => None,
        }
    }
}
