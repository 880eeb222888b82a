//! Command-line interface definitions and helpers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command};
pub use commands::list_cameras;
pub use enums::RampChoice;
