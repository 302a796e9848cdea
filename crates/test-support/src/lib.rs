//! Shared test utilities for the figo workspace.
//!
//! [`CaptureBuffer`] stands in for standard output so tests can read back what
//! a logger wrote; the remaining helpers make assertions about rendered lines
//! independent of the wall clock.

use std::io::{self, Write};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use predicates::prelude::*;
use predicates::str::RegexPredicate;

/// Escape byte that starts every ANSI color sequence.
pub const ANSI_ESCAPE: char = '\x1b';

/// Placeholder substituted for timestamps by [`normalize_timestamp`].
pub const TIMESTAMP_PLACEHOLDER: &str = "<timestamp>";

/// Width of a `YY-MM-DD HH:MM:SS` timestamp.
pub const TIMESTAMP_WIDTH: usize = 17;

/// In-memory writer whose clones share one buffer.
///
/// Hand one clone to the code under test and keep another to inspect the
/// bytes it wrote.
#[derive(Clone, Debug, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns the written text split into lines, terminators removed.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reports whether `text` is exactly a `YY-MM-DD HH:MM:SS` timestamp.
#[must_use]
pub fn is_timestamp(text: &str) -> bool {
    TIMESTAMP.eval(text)
}

static TIMESTAMP: LazyLock<RegexPredicate> = LazyLock::new(|| {
    predicate::str::is_match(r"^[0-9]{2}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("timestamp pattern is a valid regex")
});

/// Replaces the timestamp of an uncolored `[Figo]` line with
/// [`TIMESTAMP_PLACEHOLDER`].
///
/// Lines without a timestamp after the prefix are returned unchanged.
#[must_use]
pub fn normalize_timestamp(line: &str) -> String {
    const START: usize = "[Figo] ".len();
    match line.get(START..START + TIMESTAMP_WIDTH) {
        Some(candidate) if line.starts_with("[Figo] ") && is_timestamp(candidate) => {
            format!(
                "{}{TIMESTAMP_PLACEHOLDER}{}",
                &line[..START],
                &line[START + TIMESTAMP_WIDTH..]
            )
        }
        _ => line.to_owned(),
    }
}

/// Reports whether `text` contains an ANSI escape.
#[must_use]
pub fn has_ansi_escape(text: &str) -> bool {
    text.contains(ANSI_ESCAPE)
}
