//! asciicam entry point: CLI dispatch and the session re-entry loop.

use std::io::BufRead;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;

use asciicam::app::{self, Outcome};
use asciicam::ascii::{EnhanceSettings, EntropySource, GlitchSettings, GlyphFrame};
use asciicam::camera::{CameraCapture, CameraSettings};
use asciicam::cli::{self, Args, Command};
use asciicam::config::Config;
use asciicam::export::{self, GifExporter};
use asciicam::session::Session;
use asciicam::terminal::{RawModeGuard, TerminalSurface};

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(Command::ListCameras) = args.command {
        cli::list_cameras()?;
        return Ok(());
    }

    let config = Config::load(args.config.as_deref())?;
    let mut session = build_session(&args, &config);
    let frame_period = Duration::from_secs_f32(1.0 / config.display.fps.max(1) as f32);

    // Camera-open failure at startup is the one fatal I/O error
    let mut camera = CameraCapture::open(CameraSettings {
        device_index: args.camera,
        ..CameraSettings::default()
    })?;
    camera.start()?;

    let mut noise = EntropySource::new();

    loop {
        let outcome = {
            let mut guard = RawModeGuard::enter()?;
            let mut surface = TerminalSurface::new();
            let result =
                app::run_session(&mut camera, &mut surface, &mut session, &mut noise, frame_period);
            // Restore the terminal before printing anything
            guard.exit()?;
            result?
        };

        match outcome {
            Outcome::Quit => break,
            Outcome::Snapshot(frame) => {
                save_snapshot(&frame);
                wait_for_enter();
            }
            Outcome::Recording(frames) => {
                deliver_recording(&frames);
                wait_for_enter();
            }
        }
    }

    camera.stop();
    Ok(())
}

/// Build the initial session state from config file values and CLI overrides.
fn build_session(args: &Args, config: &Config) -> Session {
    let mut enhance = if args.no_enhance {
        EnhanceSettings::disabled()
    } else {
        EnhanceSettings {
            brightness: config.enhance.brightness,
            contrast: config.enhance.contrast,
            equalize: config.enhance.equalize,
            clip_limit: config.enhance.clip_limit,
            edge_blend: config.enhance.edge_blend,
            edge_alpha: config.enhance.edge_alpha,
            ..EnhanceSettings::default()
        }
    };
    enhance.invert = args.invert;

    Session {
        ramp: args.ramp.into(),
        mirror: config.camera.mirror && !args.no_mirror,
        enhance,
        glitch: GlitchSettings {
            intensity: config.glitch.intensity,
            max_shift: config.glitch.max_shift,
            ..GlitchSettings::default()
        },
        ..Session::default()
    }
}

/// Persist one snapshot frame; failures are reported, never fatal.
fn save_snapshot(frame: &GlyphFrame) {
    let path = format!("snapshot-{}.txt", unix_timestamp());
    match export::write_snapshot(frame, Path::new(&path)) {
        Ok(()) => println!("Snapshot saved to {}", path),
        Err(e) => eprintln!("Failed to save snapshot: {}", e),
    }
}

/// Persist a recording as text and as an animated GIF.
fn deliver_recording(frames: &[GlyphFrame]) {
    if frames.is_empty() {
        println!("Recording stopped with no frames captured.");
        return;
    }

    println!("Recorded {} frames.", frames.len());
    let stem = format!("recording-{}", unix_timestamp());

    let txt_path = format!("{}.txt", stem);
    match export::write_recording(frames, Path::new(&txt_path)) {
        Ok(()) => println!("Text saved to {}", txt_path),
        Err(e) => eprintln!("Failed to save text recording: {}", e),
    }

    let gif_path = format!("{}.gif", stem);
    match GifExporter::new().and_then(|exporter| exporter.export(frames, Path::new(&gif_path))) {
        Ok(()) => println!("GIF saved to {}", gif_path),
        Err(e) => eprintln!("Failed to export GIF: {}", e),
    }
}

fn wait_for_enter() {
    println!("\nPress Enter to return to the camera...");
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
