//! Help overlay content.

/// Lines of the centered help overlay.
pub const HELP_LINES: &[&str] = &[
    "╔═══════════════════════════════════╗",
    "║         CREATIVE CONTROLS         ║",
    "╠═══════════════════════════════════╣",
    "║  1-6 : Switch Character Ramp      ║",
    "║  s   : Take Snapshot (.txt)       ║",
    "║  r   : Start/Stop Recording       ║",
    "║  g   : Toggle Glitch Effect       ║",
    "║  + / - : Zoom In / Out            ║",
    "║  0   : Reset Zoom                 ║",
    "║  m   : Toggle Mirror Mode         ║",
    "║  i   : Toggle Invert              ║",
    "║  e   : Toggle Edge Sharpness      ║",
    "║  h   : Hide Help                  ║",
    "║  q   : Quit App                   ║",
    "╚═══════════════════════════════════╝",
];
