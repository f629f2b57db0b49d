//! Command-line interface definitions for intelitile.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, value_parser};
use intelitile_core::{Error as CoreError, Rect, SessionId};
use logging::LogArgs;

use crate::error::{Error, Result};

/// Command-line interface for the `intelitile` binary.
#[derive(Parser, Debug)]
#[command(
    name = "intelitile",
    about = "Maximize a window into the largest free space on screen",
    version
)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// Session step to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Session steps, run in order: `init`, any number of `add`, then one
/// placement.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a session and print a SetEnv directive carrying its id.
    Init(InitArgs),
    /// Record a window that must not be covered.
    Add(WindowArgs),
    /// Maximize the target into the largest free space.
    Place(WindowArgs),
    /// Keep the target's width; maximize its height into a free space.
    #[command(name = "tallPlace", alias = "tall-place")]
    TallPlace(WindowArgs),
    /// Keep the target's height; maximize its width into a free space.
    #[command(name = "widePlace", alias = "wide-place")]
    WidePlace(WindowArgs),
}

/// Arguments for the `init` subcommand.
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Screen width in pixels.
    #[arg(value_parser = value_parser!(i32).range(1..))]
    pub width: i32,

    /// Screen height in pixels.
    #[arg(value_parser = value_parser!(i32).range(1..))]
    pub height: i32,

    /// Directory for the session file (default: /dev/shm, else the temp dir).
    #[arg(long, value_name = "PATH")]
    pub session_dir: Option<PathBuf>,

    /// Environment variable the session id is bound to.
    #[arg(long, value_name = "NAME", default_value = "yaluInteliTileID")]
    pub env_name: String,
}

/// A session id followed by window geometry.
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// Session id printed by `init`.
    #[arg(value_name = "SESSION")]
    pub session: String,

    /// Left edge of the window.
    #[arg(allow_negative_numbers = true)]
    pub x: i32,

    /// Top edge of the window.
    #[arg(allow_negative_numbers = true)]
    pub y: i32,

    /// Window width in pixels.
    #[arg(value_parser = value_parser!(i32).range(1..))]
    pub width: i32,

    /// Window height in pixels.
    #[arg(value_parser = value_parser!(i32).range(1..))]
    pub height: i32,
}

impl WindowArgs {
    /// The session these arguments refer to.
    pub fn session_id(&self) -> SessionId {
        SessionId::new(self.session.as_str())
    }

    /// The window geometry as a rectangle.
    pub fn rect(&self) -> Result<Rect> {
        Rect::from_origin_size(self.x, self.y, self.width, self.height).ok_or_else(|| {
            Error::Core(CoreError::Geometry(format!(
                "window {}x{}+{}+{} overflows screen coordinates",
                self.width, self.height, self.x, self.y
            )))
        })
    }
}
