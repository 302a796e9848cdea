//! crates/logging/src/levels.rs
//! Severity levels, their rendered labels and their label colors.

use std::fmt;
use std::str::FromStr;

use crate::ansi;

/// Severity of a log line, ordered by increasing urgency.
///
/// The ordering drives the verbosity filter: everything strictly below
/// [`Severity::Warning`] is dropped when the logger is not verbose.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Developer diagnostics.
    Debug,
    /// Routine progress.
    Info,
    /// Something unexpected that does not stop the program.
    Warning,
    /// A failed operation.
    Error,
    /// An unrecoverable failure; the process exits after the line is written.
    Fatal,
}

impl Severity {
    /// Every severity, from least to most urgent.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Returns the five-character label rendered between brackets.
    ///
    /// `INFO` and `WARN` carry a leading space so every label lines up.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::Info.label(), " INFO");
    /// assert_eq!(Severity::Warning.label(), " WARN");
    /// assert!(Severity::ALL.iter().all(|s| s.label().len() == 5));
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => " INFO",
            Self::Warning => " WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Returns the ANSI escape that colors this severity's label.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Debug => ansi::BLUE,
            Self::Info => ansi::GREEN,
            Self::Warning => ansi::YELLOW,
            Self::Error => ansi::RED,
            Self::Fatal => ansi::MAGENTA,
        }
    }

    /// Returns the lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Reports whether lines of this severity are dropped when the logger is quiet.
    #[must_use]
    pub const fn requires_verbose(self) -> bool {
        (self as u8) < (Self::Warning as u8)
    }

    /// Reports whether this severity terminates the process.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised severity: {input}")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError {
                input: input.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_ordered_by_urgency() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
        assert!(Severity::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn labels_are_padded_to_five_characters() {
        let labels: Vec<_> = Severity::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["DEBUG", " INFO", " WARN", "ERROR", "FATAL"]);
    }

    #[test]
    fn label_colors_match_palette() {
        assert_eq!(Severity::Debug.color(), "\x1b[34m");
        assert_eq!(Severity::Info.color(), "\x1b[32m");
        assert_eq!(Severity::Warning.color(), "\x1b[33m");
        assert_eq!(Severity::Error.color(), "\x1b[31m");
        assert_eq!(Severity::Fatal.color(), "\x1b[35m");
    }

    #[test]
    fn only_debug_and_info_require_verbose() {
        assert!(Severity::Debug.requires_verbose());
        assert!(Severity::Info.requires_verbose());
        assert!(!Severity::Warning.requires_verbose());
        assert!(!Severity::Error.requires_verbose());
        assert!(!Severity::Fatal.requires_verbose());
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("debug".parse::<Severity>(), Ok(Severity::Debug));
        assert_eq!("INFO".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(" warning ".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("fatal".parse::<Severity>(), Ok(Severity::Fatal));
    }

    #[test]
    fn parse_error_reports_input() {
        let error = "verbose".parse::<Severity>().unwrap_err();
        assert_eq!(error.input(), "verbose");
        assert_eq!(error.to_string(), "unrecognised severity: verbose");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }
}
