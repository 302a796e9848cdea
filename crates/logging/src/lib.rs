#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled console logger. Every accepted call becomes exactly
//! one line on standard output:
//!
//! ```text
//! [Figo] 24-06-15 09:23:01 [ WARN] [worker.rs:42 spawn()] disk almost full
//! ```
//!
//! The line carries the `[Figo]` prefix, a `YY-MM-DD HH:MM:SS` local
//! timestamp, a fixed-width severity label, an optional call-site segment, and
//! the formatted message.
//!
//! # Design
//!
//! A [`Logger`] owns four switches ([`LoggerConfig`]) that may change at any
//! time, a serialized [`LineSink`] over its writer, a [`CallerResolver`] for
//! call sites (by default the stack-walking [`StackWalker`]), and a
//! [`Terminator`] invoked after [`Severity::Fatal`] lines.
//! The process-wide instance returned by [`logger()`] backs the free
//! functions and the macros; independent instances are built with
//! [`Logger::builder`].
//!
//! # Invariants
//!
//! - Debug and info lines are written only while verbose; warning, error and
//!   fatal lines always are.
//! - Only the timestamp and the severity label are ever colored.
//! - A fatal line is written and flushed before the process exits with code 1.
//! - Lines written concurrently never interleave.
//! - Messages are rendered before the sink is locked; logging from inside a
//!   message's `Display` is allowed.
//!
//! # Errors
//!
//! Logging calls never fail. Output errors are discarded so a closed standard
//! output cannot turn a diagnostic into a crash. Fallible operations are
//! limited to [`install`] ([`InstallError`]) and parsing a [`Severity`]
//! ([`ParseSeverityError`]).
//!
//! # Examples
//!
//! Log through an independent logger and inspect the output:
//!
//! ```
//! use logging::{Logger, LoggerConfig};
//! use std::io::Write;
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Clone, Default)]
//! struct Shared(Arc<Mutex<Vec<u8>>>);
//!
//! impl Write for Shared {
//!     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
//!         self.0.lock().unwrap().write(buf)
//!     }
//!     fn flush(&mut self) -> std::io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let output = Shared::default();
//! let logger = Logger::builder()
//!     .config(LoggerConfig::default().with_color_disabled(true).with_verbose(false))
//!     .writer(output.clone())
//!     .build();
//!
//! logging::info!(logger: logger, "hidden while quiet");
//! logging::warn!(logger: logger, "{} retries left", 2);
//!
//! let text = String::from_utf8(output.0.lock().unwrap().clone()).unwrap();
//! assert!(text.starts_with("[Figo] "));
//! assert!(text.ends_with(" [ WARN] 2 retries left\n"));
//! assert_eq!(text.lines().count(), 1);
//! ```
//!
//! # See also
//!
//! - [`Template`] for printf-style templates known only at runtime.
//! - `FigoLayer` (feature `tracing`) to route `tracing` events through a
//!   logger.

pub mod ansi;
mod call_site;
mod config;
mod levels;
mod logger;
mod macros;
mod printf;
mod render;
mod shared;
mod sink;
mod stack_walker;
mod terminate;
pub mod timestamp;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use call_site::{CallSite, CallerResolver, NoCallSite, TrackedCaller};
pub use config::{DEFAULT_CALLER_DEPTH, LoggerConfig, color_disabled_for};
pub use levels::{ParseSeverityError, Severity};
pub use logger::{Logger, LoggerBuilder};
pub use printf::{Template, sprintf};
pub use render::{Line, PREFIX};
pub use shared::{
    InstallError, debug, error, fatal, info, install, log, logf, logger, set_caller_depth,
    set_non_color, set_show_depth, set_verbose, warn,
};
pub use sink::LineSink;
pub use stack_walker::StackWalker;
pub use terminate::{ExitRecorder, FATAL_EXIT_CODE, ProcessExit, Terminator};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{FigoLayer, init_tracing, init_tracing_with_filter, severity_for};

#[doc(hidden)]
pub mod __private {
    pub use crate::call_site::short_function_name;
}
