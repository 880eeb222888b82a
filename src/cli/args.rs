//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::RampChoice;

/// Real-time ASCII camera: live webcam to ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "asciicam")]
#[command(version, about = "Live webcam to ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Camera device index (from list-cameras)
    #[arg(short, long, default_value = "0")]
    pub camera: u32,

    /// Initial character ramp
    #[arg(short, long, default_value = "alpha")]
    pub ramp: RampChoice,

    /// Invert brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Disable contrast enhancement
    #[arg(long)]
    pub no_enhance: bool,

    /// Disable the camera mirror (selfie) flip
    #[arg(long)]
    pub no_mirror: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
}
