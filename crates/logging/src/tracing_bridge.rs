//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate to the Figo line format.
//!
//! [`FigoLayer`] is a tracing-subscriber layer that renders every event through
//! a [`Logger`], so code instrumented with the standard `tracing` macros prints
//! the same lines as code using this crate's macros.
//!
//! | tracing level    | severity              |
//! |------------------|-----------------------|
//! | `TRACE`, `DEBUG` | [`Severity::Debug`]   |
//! | `INFO`           | [`Severity::Info`]    |
//! | `WARN`           | [`Severity::Warning`] |
//! | `ERROR`          | [`Severity::Error`]   |
//!
//! Events never map to [`Severity::Fatal`]. Structured fields follow the
//! message as `key=value` pairs, and the event's file and line become the call
//! site (the function renders as `?()`).
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing();
//!
//! tracing::info!(peer = "10.0.0.7", "connected");
//! ```

use std::borrow::Borrow;
use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::call_site::CallSite;
use crate::levels::Severity;
use crate::logger::{Logger, Origin};

/// A tracing layer that writes events through a [`Logger`].
///
/// By default the layer targets the shared logger returned by
/// [`logger()`](crate::logger()); [`with_logger`](Self::with_logger) accepts any
/// owner of a logger, such as an `Arc<Logger>`.
#[derive(Clone, Debug)]
pub struct FigoLayer<L = &'static Logger> {
    logger: L,
}

impl FigoLayer {
    /// Creates a layer writing through the shared logger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            logger: crate::shared::logger(),
        }
    }
}

impl Default for FigoLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> FigoLayer<L>
where
    L: Borrow<Logger>,
{
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn with_logger(logger: L) -> Self {
        Self { logger }
    }

    fn logger(&self) -> &Logger {
        self.logger.borrow()
    }
}

/// Maps a tracing level to the severity it is rendered with.
#[must_use]
pub const fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Info,
        Level::DEBUG | Level::TRACE => Severity::Debug,
    }
}

impl<S, L> Layer<S> for FigoLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Borrow<Logger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = severity_for(metadata.level());
        let logger = self.logger();
        if !logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let origin = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => Origin::Captured(CallSite::new(file, line)),
            _ => Origin::Unknown,
        };
        logger.emit(severity, origin, &visitor);
    }
}

/// Collects the `message` field and the remaining fields of an event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

impl fmt::Display for MessageVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if !self.message.is_empty() && !self.fields.is_empty() {
            f.write_char(' ')?;
        }
        f.write_str(&self.fields)
    }
}

/// Installs a global tracing subscriber that writes through the shared logger.
///
/// # Panics
///
/// Panics if a global tracing subscriber is already set.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(FigoLayer::new()).init();
}

/// Installs a global tracing subscriber with `filter` applied before the
/// shared logger's own verbosity check.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::from_default_env());
/// ```
///
/// # Panics
///
/// Panics if a global tracing subscriber is already set.
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(FigoLayer::new())
        .init();
}
