use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use signal_hook::consts::{SIGINT, SIGQUIT};

use crate::process::ProcessError;

/// Records keyboard interrupts so the shell can check for them at fixed
/// points instead of reacting inside a signal handler.
///
/// While registered, SIGINT and SIGQUIT no longer terminate the shell.
/// Children get the default dispositions back when they exec.
#[derive(Clone, Debug)]
pub struct InterruptFlag {
    interrupted: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn install() -> Result<Self, ProcessError> {
        let interrupted = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(SIGINT, Arc::clone(&interrupted))
            .map_err(ProcessError::SignalError)?;
        signal_hook::flag::register(SIGQUIT, Arc::new(AtomicBool::new(false)))
            .map_err(ProcessError::SignalError)?;

        Ok(Self { interrupted })
    }

    /// Returns whether an interrupt arrived since the last call, clearing it.
    pub fn take(&self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }

    #[cfg(test)]
    pub(crate) fn raise(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }
}
