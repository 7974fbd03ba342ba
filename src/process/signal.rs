use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::SIGINT;

use crate::process::ProcessError;

/// Records that SIGINT arrived; the loop polls it between reads.
///
/// Installing the hook replaces the default action, so the interpreter
/// survives Ctrl-C while a foreground child runs. Children get the default
/// disposition back on exec.
#[derive(Clone, Debug, Default)]
pub struct InterruptFlag {
    pending: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self) -> Result<(), ProcessError> {
        signal_hook::flag::register(SIGINT, Arc::clone(&self.pending))
            .map(|_| ())
            .map_err(|e| ProcessError::SignalError(e.to_string()))
    }

    pub fn raise(&self) {
        self.pending.store(true, Ordering::SeqCst);
    }

    /// Returns whether an interrupt arrived since the last call.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}
