//! crates/logging/src/logger.rs
//! The logger: filtering, call-site resolution, rendering, output, and fatal exit.

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::call_site::{CallSite, CallerResolver};
use crate::config::LoggerConfig;
use crate::levels::Severity;
use crate::printf::Template;
use crate::render::Line;
use crate::sink::LineSink;
use crate::stack_walker::StackWalker;
use crate::terminate::{FATAL_EXIT_CODE, ProcessExit, Terminator};
use crate::timestamp;

type BoxedWriter = Box<dyn Write + Send>;

/// Initial capacity of the per-call render buffer.
const RENDER_CAPACITY: usize = 256;

/// Where the call site of a line comes from.
pub(crate) enum Origin {
    /// Captured at macro expansion or supplied by a bridge.
    Captured(CallSite),
    /// Tracked by `#[track_caller]`, resolved through the [`CallerResolver`].
    Tracked(&'static Location<'static>),
    /// Not known; the segment is omitted.
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    Unknown,
}

/// Leveled line logger.
///
/// A logger renders each accepted call as one line, writes it to its output
/// (standard output unless configured otherwise) and, for
/// [`Severity::Fatal`], asks its [`Terminator`] to end the process with exit
/// code 1.
///
/// The four switches of [`LoggerConfig`] are stored as atomics and may be
/// flipped at any time from any thread. Writes are serialized by a mutex, so
/// lines from concurrent callers never interleave.
///
/// # Examples
///
/// ```
/// use logging::{ExitRecorder, Logger, LoggerConfig, Severity};
/// use std::sync::Arc;
///
/// let exits = Arc::new(ExitRecorder::new());
/// let logger = Logger::builder()
///     .config(LoggerConfig::default().with_color_disabled(true))
///     .writer(std::io::sink())
///     .terminator(Arc::clone(&exits))
///     .build();
///
/// logger.info(format_args!("value={}", 42));
/// logger.set_verbose(false);
/// assert!(!logger.enabled(Severity::Debug));
///
/// logger.fatal(format_args!("giving up"));
/// assert_eq!(exits.codes(), vec![1]);
/// ```
pub struct Logger {
    verbose: AtomicBool,
    color_disabled: AtomicBool,
    show_call_site: AtomicBool,
    caller_depth: AtomicUsize,
    sink: Mutex<LineSink<BoxedWriter>>,
    resolver: Box<dyn CallerResolver>,
    terminator: Box<dyn Terminator>,
}

impl Logger {
    /// Creates a logger writing to standard output with `config`.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Starts building a logger with custom output, resolver, or terminator.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Returns a snapshot of the current switches.
    #[must_use]
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            verbose: self.is_verbose(),
            color_disabled: self.color_disabled(),
            show_call_site: self.shows_call_site(),
            caller_depth: self.caller_depth(),
        }
    }

    /// Replaces all switches at once.
    pub fn apply(&self, config: LoggerConfig) {
        self.set_verbose(config.verbose);
        self.set_non_color(config.color_disabled);
        self.set_show_depth(config.show_call_site);
        self.set_caller_depth(config.caller_depth);
    }

    /// Enables or suppresses debug and info lines.
    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    /// Disables (`true`) or enables (`false`) ANSI colors.
    pub fn set_non_color(&self, color_disabled: bool) {
        self.color_disabled.store(color_disabled, Ordering::Relaxed);
    }

    /// Shows or hides the `[file:line function()]` segment.
    pub fn set_show_depth(&self, show_call_site: bool) {
        self.show_call_site.store(show_call_site, Ordering::Relaxed);
    }

    /// Sets how many frames above the logging primitive the call site is resolved.
    pub fn set_caller_depth(&self, caller_depth: usize) {
        self.caller_depth.store(caller_depth, Ordering::Relaxed);
    }

    /// Reports whether debug and info lines are emitted.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// Reports whether lines are rendered without colors.
    #[must_use]
    pub fn color_disabled(&self) -> bool {
        self.color_disabled.load(Ordering::Relaxed)
    }

    /// Reports whether the call-site segment is rendered.
    #[must_use]
    pub fn shows_call_site(&self) -> bool {
        self.show_call_site.load(Ordering::Relaxed)
    }

    /// Returns the configured caller depth.
    #[must_use]
    pub fn caller_depth(&self) -> usize {
        self.caller_depth.load(Ordering::Relaxed)
    }

    /// Reports whether a line of `severity` would be written.
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.is_verbose() || !severity.requires_verbose()
    }

    /// Logs a preformatted message; the call site is resolved from the caller.
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.emit(severity, Origin::Tracked(Location::caller()), &args);
    }

    /// Logs a message whose call site was captured by the caller.
    ///
    /// The logging macros use this with a site captured at expansion, which
    /// carries the enclosing function name.
    pub fn log_at(&self, severity: Severity, site: CallSite, args: fmt::Arguments<'_>) {
        self.emit(severity, Origin::Captured(site), &args);
    }

    /// Logs a runtime printf-style template (see [`Template`]).
    #[track_caller]
    pub fn logf(&self, severity: Severity, template: &str, args: &[&dyn fmt::Display]) {
        self.emit(
            severity,
            Origin::Tracked(Location::caller()),
            &Template::new(template, args),
        );
    }

    /// Logs at [`Severity::Debug`].
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    /// Logs at [`Severity::Info`].
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    /// Logs at [`Severity::Warning`].
    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    /// Logs at [`Severity::Error`].
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Logs at [`Severity::Fatal`], then terminates with exit code 1.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, args);
    }

    /// Flushes the output.
    pub fn flush(&self) -> io::Result<()> {
        self.lock_sink().flush()
    }

    pub(crate) fn emit(&self, severity: Severity, origin: Origin, message: &dyn fmt::Display) {
        if !self.enabled(severity) {
            return;
        }

        let call_site = if self.shows_call_site() {
            match origin {
                Origin::Captured(site) => Some(site),
                Origin::Tracked(location) => self.resolver.resolve(location, self.caller_depth()),
                Origin::Unknown => None,
            }
        } else {
            None
        };

        let timestamp = timestamp::now();
        let line = Line::new(severity, &timestamp, message)
            .call_site(call_site.as_ref())
            .colored(!self.color_disabled());

        // Rendered before locking: a message's `Display` may itself log.
        let mut rendered = String::with_capacity(RENDER_CAPACITY);
        if line.render_into(&mut rendered).is_ok() {
            let mut sink = self.lock_sink();
            // A closed or broken stdout must not turn a log call into a failure.
            let _ = sink.write_rendered(&rendered);
        }

        if severity.is_fatal() {
            self.terminator.terminate(FATAL_EXIT_CODE);
        }
    }

    fn lock_sink(&self) -> std::sync::MutexGuard<'_, LineSink<BoxedWriter>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`].
///
/// Unset parts default to standard output, [`StackWalker`], and
/// [`ProcessExit`].
#[derive(Default)]
pub struct LoggerBuilder {
    config: LoggerConfig,
    writer: Option<BoxedWriter>,
    resolver: Option<Box<dyn CallerResolver>>,
    terminator: Option<Box<dyn Terminator>>,
}

impl LoggerBuilder {
    /// Sets the initial switches.
    #[must_use]
    pub const fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sends lines to `writer` instead of standard output.
    #[must_use]
    pub fn writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Resolves call sites with `resolver`.
    #[must_use]
    pub fn resolver<R>(mut self, resolver: R) -> Self
    where
        R: CallerResolver + 'static,
    {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Uses `terminator` after fatal lines.
    #[must_use]
    pub fn terminator<T>(mut self, terminator: T) -> Self
    where
        T: Terminator + 'static,
    {
        self.terminator = Some(Box::new(terminator));
        self
    }

    /// Builds the logger.
    #[must_use]
    pub fn build(self) -> Logger {
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(io::stdout()) as BoxedWriter);
        Logger {
            verbose: AtomicBool::new(self.config.verbose),
            color_disabled: AtomicBool::new(self.config.color_disabled),
            show_call_site: AtomicBool::new(self.config.show_call_site),
            caller_depth: AtomicUsize::new(self.config.caller_depth),
            sink: Mutex::new(LineSink::new(writer)),
            resolver: self.resolver.unwrap_or_else(|| Box::new(StackWalker)),
            terminator: self.terminator.unwrap_or_else(|| Box::new(ProcessExit)),
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("writer", &self.writer.is_some())
            .field("resolver", &self.resolver.is_some())
            .field("terminator", &self.terminator.is_some())
            .finish()
    }
}
