use std::fmt;
use std::io;

pub mod executor;
pub mod signal;

pub use executor::{ProcessExecutor, ProcessStatus, NOT_FOUND_STATUS};
pub use signal::InterruptFlag;

#[derive(Debug)]
pub enum ProcessError {
    /// The OS refused to create the child at all.
    Spawn(io::Error),
    /// The child was created but its status could not be collected.
    Wait(io::Error),
    SignalError(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "spawn: {}", e),
            ProcessError::Wait(e) => write!(f, "waitpid: {}", e),
            ProcessError::SignalError(msg) => write!(f, "signal: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn(e) | ProcessError::Wait(e) => Some(e),
            ProcessError::SignalError(_) => None,
        }
    }
}
