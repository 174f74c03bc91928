//! Error handling for the MiniDOS HAL
//!
//! Only the process boundary reports through [`HalError`]; filesystem probes
//! hand back plain `io::Error` so callers can translate them per command.

use std::fmt;
use std::io;
use std::result;

/// Result type for HAL operations
pub type HalResult<T> = result::Result<T, HalError>;

#[derive(Debug)]
pub enum HalError {
    /// The requested program could not be located on `PATH`.
    ProgramNotFound(String),
    /// The program was found but the OS refused to start it.
    Launch { program: String, source: io::Error },
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::ProgramNotFound(program) => {
                write!(f, "program '{program}' not found in PATH")
            }
            HalError::Launch { program, source } => {
                write!(f, "failed to launch '{program}': {source}")
            }
        }
    }
}

impl std::error::Error for HalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HalError::ProgramNotFound(_) => None,
            HalError::Launch { source, .. } => Some(source),
        }
    }
}

impl HalError {
    /// Classify a spawn failure. `NotFound` from the OS means the binary
    /// vanished between lookup and exec, which reads the same to the user.
    pub fn launch(program: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            HalError::ProgramNotFound(program.to_string())
        } else {
            HalError::Launch {
                program: program.to_string(),
                source: err,
            }
        }
    }
}
