//! The paced interactive loop.
//!
//! One tick: run the pipeline, render the result and status (and the help
//! overlay when shown), append to the recording buffer if recording, poll
//! one input event, apply at most one transition, then sleep whatever is
//! left of the frame period. Pacing is best-effort: a tick that overruns
//! its budget doesn't sleep and no debt is carried forward.

use std::time::{Duration, Instant};

use crate::ascii::{GlyphFrame, GlyphMapper, MapperError, NoiseSource};
use crate::pipeline::{self, FrameSource};
use crate::session::{event_for_key, Session, Transition};
use crate::terminal::{format_status, Surface, HELP_LINES};

/// Errors that can abort the interactive loop.
///
/// Render failures are not among them: individual draw calls that fail are
/// skipped for that tick and logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("glyph mapper error: {0}")]
    Mapper(#[from] MapperError),
}

/// How the interactive loop ended.
#[derive(Debug)]
pub enum Outcome {
    /// Plain quit, nothing to deliver
    Quit,
    /// Exited carrying one frame to persist
    Snapshot(GlyphFrame),
    /// Exited carrying the recorded buffer
    Recording(Vec<GlyphFrame>),
}

/// Run the interactive session loop until a terminal transition.
///
/// The session is the single mutable state record; the capture source and
/// display surface are collaborators behind their respective contracts, so
/// tests drive this loop with scripted fakes.
pub fn run_session<S, D, N>(
    source: &mut S,
    surface: &mut D,
    session: &mut Session,
    noise: &mut N,
    frame_period: Duration,
) -> Result<Outcome, AppError>
where
    S: FrameSource,
    D: Surface,
    N: NoiseSource,
{
    let mut active_ramp = session.ramp;
    let mut mapper = GlyphMapper::for_ramp(active_ramp)?;
    let mut last_frame: Option<GlyphFrame> = None;

    let mut fps = 0.0f32;
    let mut frames_since = 0u32;
    let mut fps_marker = Instant::now();

    loop {
        let tick_start = Instant::now();

        // A ramp switch rebuilds the lookup table before the next map call
        if active_ramp != session.ramp {
            active_ramp = session.ramp;
            mapper = GlyphMapper::for_ramp(active_ramp)?;
        }

        let (cols, rows) = surface.dimensions();
        let (width, height) = pipeline::capture_dimensions(cols, rows);
        let settings = session.tick_settings();

        match pipeline::tick(source, &settings, &mapper, noise, width, height) {
            Some(frame) => {
                if let Err(e) = surface.render_frame(&frame) {
                    log::debug!("frame draw skipped: {}", e);
                }
                if let Err(e) = surface.render_status(&format_status(session, fps)) {
                    log::debug!("status draw skipped: {}", e);
                }
                if session.show_help {
                    if let Err(e) = surface.render_help(HELP_LINES) {
                        log::debug!("help draw skipped: {}", e);
                    }
                }

                if session.recording {
                    session.record(frame.clone());
                }
                last_frame = Some(frame);
                frames_since += 1;
            }
            None => {
                // Transient capture miss: skip the tick and retry
            }
        }

        let since = fps_marker.elapsed();
        if since >= Duration::from_secs(1) {
            fps = frames_since as f32 / since.as_secs_f32();
            frames_since = 0;
            fps_marker = Instant::now();
        }

        // Poll one input event (non-blocking), apply at most one transition
        if let Some(key) = surface.poll_key() {
            if let Some(event) = event_for_key(key) {
                match session.apply(event) {
                    Transition::Continue => {}
                    Transition::Quit => return Ok(Outcome::Quit),
                    Transition::Snapshot => {
                        // Nothing to deliver before the first frame
                        if let Some(frame) = last_frame.take() {
                            return Ok(Outcome::Snapshot(frame));
                        }
                    }
                    Transition::StopRecording => {
                        return Ok(Outcome::Recording(session.take_recording()));
                    }
                }
            }
        }

        let elapsed = tick_start.elapsed();
        if elapsed < frame_period {
            std::thread::sleep(frame_period - elapsed);
        }
    }
}
