//! Window manager command text written to stdout for the caller to execute.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::policy::PlacementCommand;

/// A command understood by the window manager's scripting interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Bind an environment variable, used to hand a session id back.
    SetEnv {
        /// Variable name.
        name: String,
        /// Variable value, written quoted.
        value: String,
    },
    /// Maximize the current window to the given size, then move it.
    Resize(PlacementCommand),
}

impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::SetEnv { name, value } => writeln!(f, "SetEnv {name} \"{value}\""),
            Self::Resize(cmd) => {
                writeln!(f, "Maximize {}p {}p", cmd.width, cmd.height)?;
                writeln!(f, "ThisWindow (Maximized) Move {}p {}p", cmd.x, cmd.y)
            }
        }
    }
}
