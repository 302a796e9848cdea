//! crates/logging/src/terminate.rs
//! What happens after a fatal line has been written.

use std::sync::{Arc, Mutex, PoisonError};

/// Exit status used after a fatal line.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the program after a fatal line.
///
/// The production implementation is [`ProcessExit`]. Tests install an
/// [`ExitRecorder`] so the fatal path can be observed without killing the test
/// process; in that case the logging call returns normally.
pub trait Terminator: Send + Sync {
    /// Terminates with `code`.
    fn terminate(&self, code: i32);
}

/// Exits the process immediately without unwinding or running destructors.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}

/// Records requested exit codes instead of exiting.
#[derive(Debug, Default)]
pub struct ExitRecorder {
    codes: Mutex<Vec<i32>>,
}

impl ExitRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every exit code requested so far, oldest first.
    #[must_use]
    pub fn codes(&self) -> Vec<i32> {
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reports whether termination was requested at least once.
    #[must_use]
    pub fn terminated(&self) -> bool {
        !self
            .codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Terminator for ExitRecorder {
    fn terminate(&self, code: i32) {
        self.codes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(code);
    }
}

impl<T> Terminator for Arc<T>
where
    T: Terminator + ?Sized,
{
    fn terminate(&self, code: i32) {
        (**self).terminate(code);
    }
}
