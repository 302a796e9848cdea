//! crates/logging/src/config.rs
//! Logger configuration: verbosity, color, and call-site reporting.

/// Frames skipped when resolving the call site of a log line.
pub const DEFAULT_CALLER_DEPTH: usize = 2;

/// Snapshot of the switches a [`Logger`](crate::Logger) consults on every call.
///
/// The default enables verbose output, hides call sites, and picks the color
/// setting from the operating system the binary was built for.
///
/// # Examples
///
/// ```
/// use logging::LoggerConfig;
///
/// let config = LoggerConfig::default()
///     .with_verbose(false)
///     .with_color_disabled(true)
///     .with_call_site(true);
///
/// assert!(!config.verbose);
/// assert!(config.color_disabled);
/// assert!(config.show_call_site);
/// assert_eq!(config.caller_depth, 2);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Emit debug and info lines. Warnings and above are always emitted.
    pub verbose: bool,
    /// Render lines without ANSI escapes.
    pub color_disabled: bool,
    /// Prefix each message with `[file:line function()]`.
    pub show_call_site: bool,
    /// Frames above the logging primitive at which the call site is resolved.
    pub caller_depth: usize,
}

impl LoggerConfig {
    /// Sets [`verbose`](Self::verbose).
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets [`color_disabled`](Self::color_disabled).
    #[must_use]
    pub const fn with_color_disabled(mut self, color_disabled: bool) -> Self {
        self.color_disabled = color_disabled;
        self
    }

    /// Sets [`show_call_site`](Self::show_call_site).
    #[must_use]
    pub const fn with_call_site(mut self, show_call_site: bool) -> Self {
        self.show_call_site = show_call_site;
        self
    }

    /// Sets [`caller_depth`](Self::caller_depth).
    #[must_use]
    pub const fn with_caller_depth(mut self, caller_depth: usize) -> Self {
        self.caller_depth = caller_depth;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            color_disabled: color_disabled_for(std::env::consts::OS),
            show_call_site: false,
            caller_depth: DEFAULT_CALLER_DEPTH,
        }
    }
}

/// Reports whether the named operating system lacks native ANSI color support.
///
/// `os` uses the identifiers of [`std::env::consts::OS`].
#[must_use]
pub fn color_disabled_for(os: &str) -> bool {
    os == "windows"
}
