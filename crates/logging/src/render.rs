//! crates/logging/src/render.rs
//! Assembly of a single log line.
//!
//! Uncolored lines look like
//! `[Figo] 24-06-15 09:23:01 [ INFO] [main.rs:3 run()] hello`. With color
//! enabled only the timestamp (cyan) and the severity label (per-severity
//! color) are wrapped in escapes; the call site and the message never are.

use std::fmt::{self, Write as _};

use crate::ansi;
use crate::call_site::CallSite;
use crate::levels::Severity;

/// Literal that opens every line.
pub const PREFIX: &str = "[Figo]";

/// One rendered log line, newline included.
///
/// # Examples
///
/// ```
/// use logging::{Line, Severity};
///
/// let message = format_args!("value={}", 42).to_string();
/// let line = Line::new(Severity::Info, "24-06-15 09:23:01", &message);
/// assert_eq!(line.to_string(), "[Figo] 24-06-15 09:23:01 [ INFO] value=42\n");
///
/// let colored = line.colored(true).to_string();
/// assert_eq!(
///     colored,
///     "[Figo] \x1b[36m24-06-15 09:23:01\x1b[0m [\x1b[32m INFO\x1b[0m] value=42\n"
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Line<'a> {
    severity: Severity,
    timestamp: &'a str,
    call_site: Option<&'a CallSite>,
    message: &'a dyn fmt::Display,
    colored: bool,
}

impl<'a> Line<'a> {
    /// Creates an uncolored line without a call-site segment.
    #[must_use]
    pub fn new(severity: Severity, timestamp: &'a str, message: &'a dyn fmt::Display) -> Self {
        Self {
            severity,
            timestamp,
            call_site: None,
            message,
            colored: false,
        }
    }

    /// Sets the call-site segment.
    #[must_use]
    pub const fn call_site(mut self, call_site: Option<&'a CallSite>) -> Self {
        self.call_site = call_site;
        self
    }

    /// Enables or disables ANSI colors.
    #[must_use]
    pub const fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Returns the line's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Appends the rendered line to `buffer`.
    pub fn render_into(&self, buffer: &mut String) -> fmt::Result {
        write!(buffer, "{self}")
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;
        f.write_char(' ')?;

        if self.colored {
            write!(f, "{}{}{}", ansi::CYAN, self.timestamp, ansi::RESET)?;
            write!(
                f,
                " [{}{}{}] ",
                self.severity.color(),
                self.severity.label(),
                ansi::RESET
            )?;
        } else {
            write!(f, "{} [{}] ", self.timestamp, self.severity.label())?;
        }

        if let Some(site) = self.call_site {
            write!(f, "{site}")?;
        }

        write!(f, "{}", self.message)?;
        f.write_char('\n')
    }
}

impl fmt::Debug for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("severity", &self.severity)
            .field("timestamp", &self.timestamp)
            .field("call_site", &self.call_site)
            .field("colored", &self.colored)
            .finish_non_exhaustive()
    }
}
