//! crates/logging/src/shared.rs
//! The process-wide logger and free functions that forward to it.

use std::fmt;
use std::sync::OnceLock;

use crate::levels::Severity;
use crate::logger::Logger;

static SHARED: OnceLock<Logger> = OnceLock::new();

/// Error returned by [`install`].
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum InstallError {
    /// The shared logger was installed or first used before this call.
    #[error("the shared logger is already initialized")]
    AlreadyInitialized,
}

/// Returns the process-wide logger, creating it with defaults on first use.
///
/// The default writes to standard output with
/// [`LoggerConfig::default`](crate::LoggerConfig::default).
pub fn logger() -> &'static Logger {
    SHARED.get_or_init(Logger::default)
}

/// Installs `logger` as the process-wide logger.
///
/// Must run before anything logs through the shared logger; afterwards the
/// instance is fixed for the life of the process and only its switches can
/// change.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LoggerConfig};
///
/// let installed = logging::install(
///     Logger::builder()
///         .config(LoggerConfig::default().with_verbose(false))
///         .writer(std::io::sink())
///         .build(),
/// )
/// .expect("first installation");
/// assert!(!installed.is_verbose());
///
/// assert!(logging::install(Logger::default()).is_err());
/// ```
pub fn install(logger: Logger) -> Result<&'static Logger, InstallError> {
    SHARED
        .set(logger)
        .map_err(|_| InstallError::AlreadyInitialized)?;
    Ok(self::logger())
}

/// Enables or suppresses debug and info lines on the shared logger.
pub fn set_verbose(verbose: bool) {
    logger().set_verbose(verbose);
}

/// Disables (`true`) or enables (`false`) colors on the shared logger.
pub fn set_non_color(color_disabled: bool) {
    logger().set_non_color(color_disabled);
}

/// Shows or hides call sites on the shared logger.
pub fn set_show_depth(show_call_site: bool) {
    logger().set_show_depth(show_call_site);
}

/// Sets the caller depth of the shared logger.
pub fn set_caller_depth(caller_depth: usize) {
    logger().set_caller_depth(caller_depth);
}

/// Logs through the shared logger.
#[track_caller]
pub fn log(severity: Severity, args: fmt::Arguments<'_>) {
    logger().log(severity, args);
}

/// Logs a runtime printf-style template through the shared logger.
#[track_caller]
pub fn logf(severity: Severity, template: &str, args: &[&dyn fmt::Display]) {
    logger().logf(severity, template, args);
}

/// Logs at [`Severity::Debug`] through the shared logger.
#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) {
    logger().debug(args);
}

/// Logs at [`Severity::Info`] through the shared logger.
#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    logger().info(args);
}

/// Logs at [`Severity::Warning`] through the shared logger.
#[track_caller]
pub fn warn(args: fmt::Arguments<'_>) {
    logger().warn(args);
}

/// Logs at [`Severity::Error`] through the shared logger.
#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    logger().error(args);
}

/// Logs at [`Severity::Fatal`] through the shared logger, then exits with code 1.
#[track_caller]
pub fn fatal(args: fmt::Arguments<'_>) {
    logger().fatal(args);
}
