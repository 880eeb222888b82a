//! Session state and the interactive mode state machine.
//!
//! The session is the single mutable record of all live settings. It has
//! exactly one writer - the input-handling step at the tick boundary - and
//! every pipeline stage reads it through an immutable [`TickSettings`]
//! snapshot. All invariants (zoom bounds, non-empty ramp) are enforced at
//! the mutation site, so the pipeline never sees an invalid state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ascii::{EnhanceSettings, GlitchSettings, GlyphFrame, Ramp};
use crate::pipeline::TickSettings;

/// Zoom bounds and step for the interactive zoom keys.
pub const DEFAULT_ZOOM: f32 = 1.0;
pub const ZOOM_STEP: f32 = 0.1;
pub const MAX_ZOOM: f32 = 4.0;

/// A recognized input event, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    ToggleHelp,
    ToggleGlitch,
    ToggleMirror,
    ToggleInvert,
    ToggleEdges,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    SelectRamp(Ramp),
    Snapshot,
    ToggleRecording,
}

/// Result of applying one input event to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep looping
    Continue,
    /// Exit the loop
    Quit,
    /// Exit the loop carrying the current frame
    Snapshot,
    /// Exit the loop carrying the recorded buffer
    StopRecording,
}

/// Decode a key event into an input event.
///
/// Unrecognized keys map to `None` (a no-op tick). Ctrl+C is treated as
/// quit since raw mode swallows the usual signal.
pub fn event_for_key(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(InputEvent::ToggleHelp),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(InputEvent::ToggleGlitch),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(InputEvent::ToggleMirror),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(InputEvent::ToggleInvert),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(InputEvent::ToggleEdges),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(InputEvent::ZoomIn),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(InputEvent::ZoomOut),
        KeyCode::Char('0') => Some(InputEvent::ZoomReset),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::Snapshot),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::ToggleRecording),
        KeyCode::Char(c) => Ramp::from_key(c).map(InputEvent::SelectRamp),
        _ => None,
    }
}

/// Mutable session state for one interactive run.
#[derive(Debug, Clone)]
pub struct Session {
    /// Active character ramp
    pub ramp: Ramp,
    /// Zoom factor, kept within [1.0, MAX_ZOOM]
    pub zoom: f32,
    /// Horizontal mirror (selfie mode)
    pub mirror: bool,
    /// Enhancement settings; the invert and edge-blend toggles live here
    pub enhance: EnhanceSettings,
    /// Glitch settings; the glitch toggle lives here
    pub glitch: GlitchSettings,
    /// Help overlay visibility
    pub show_help: bool,
    /// Recording in progress
    pub recording: bool,
    /// Frames accumulated while recording
    recorded: Vec<GlyphFrame>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            ramp: Ramp::default(),
            zoom: DEFAULT_ZOOM,
            mirror: true,
            enhance: EnhanceSettings::default(),
            glitch: GlitchSettings::default(),
            show_help: false,
            recording: false,
            recorded: Vec::new(),
        }
    }
}

impl Session {
    /// Snapshot the settings the pipeline needs for one tick.
    pub fn tick_settings(&self) -> TickSettings {
        TickSettings {
            zoom: self.zoom,
            mirror: self.mirror,
            enhance: self.enhance,
            glitch: self.glitch,
        }
    }

    /// Apply one input event, returning the resulting transition.
    ///
    /// At most one event is applied per tick; every mutation is clamped
    /// here so the session can never leave its invariants.
    pub fn apply(&mut self, event: InputEvent) -> Transition {
        match event {
            InputEvent::Quit => return Transition::Quit,
            InputEvent::ToggleHelp => self.show_help = !self.show_help,
            InputEvent::ToggleGlitch => self.glitch.enabled = !self.glitch.enabled,
            InputEvent::ToggleMirror => self.mirror = !self.mirror,
            InputEvent::ToggleInvert => self.enhance.invert = !self.enhance.invert,
            InputEvent::ToggleEdges => self.enhance.edge_blend = !self.enhance.edge_blend,
            InputEvent::ZoomIn => self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM),
            InputEvent::ZoomOut => self.zoom = (self.zoom - ZOOM_STEP).max(DEFAULT_ZOOM),
            InputEvent::ZoomReset => self.zoom = DEFAULT_ZOOM,
            InputEvent::SelectRamp(ramp) => self.ramp = ramp,
            InputEvent::Snapshot => return Transition::Snapshot,
            InputEvent::ToggleRecording => {
                if self.recording {
                    self.recording = false;
                    return Transition::StopRecording;
                }
                self.recording = true;
                self.recorded.clear();
            }
        }
        Transition::Continue
    }

    /// Append a frame to the recorded buffer (call only while recording).
    pub fn record(&mut self, frame: GlyphFrame) {
        self.recorded.push(frame);
    }

    /// Number of frames recorded so far.
    pub fn recorded_len(&self) -> usize {
        self.recorded.len()
    }

    /// Move the recorded buffer out, leaving the session's buffer empty.
    pub fn take_recording(&mut self) -> Vec<GlyphFrame> {
        std::mem::take(&mut self.recorded)
    }
}
