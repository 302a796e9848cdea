//! crates/logging/src/macros.rs
//! Logging macros that capture the call site at expansion.
//!
//! Each macro expands `format_args!` at the call site and records the file,
//! line and enclosing function there, so call sites rendered through macros
//! always name the function. Every macro accepts an optional leading
//! `logger: <expr>,` to target a specific [`Logger`](crate::Logger) instead of
//! the shared one.

/// Expands to the name of the enclosing function.
///
/// Closures report the function that defines them.
///
/// # Example
/// ```
/// fn connect() -> &'static str {
///     logging::function_name!()
/// }
/// assert_eq!(connect(), "connect");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __figo_fn() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = __type_name_of(__figo_fn);
        $crate::__private::short_function_name(path.strip_suffix("::__figo_fn").unwrap_or(path))
    }};
}

/// Expands to the [`CallSite`](crate::CallSite) of the invocation.
///
/// # Example
/// ```
/// fn handler() -> logging::CallSite {
///     logging::call_site!()
/// }
/// let site = handler();
/// assert_eq!(site.function(), Some("handler"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::std::file!(), ::std::line!())
            .with_function($crate::function_name!())
    };
}

/// Logs at the given severity.
///
/// # Example
/// ```
/// use logging::{Logger, Severity};
///
/// let logger = Logger::builder().writer(std::io::sink()).build();
/// logging::log!(logger: logger, Severity::Warning, "retrying in {}s", 5);
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_at($severity, $crate::call_site!(), ::std::format_args!($($arg)+))
    };
    ($severity:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::logger(), $severity, $($arg)+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug); hidden unless verbose.
///
/// # Example
/// ```
/// logging::debug!("cache miss for {}", "key");
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Debug, $($arg)+)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info); hidden unless verbose.
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Info, $($arg)+)
    };
}

/// Logs at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Warning, $($arg)+)
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Error, $($arg)+)
    };
}

/// Logs at [`Severity::Fatal`](crate::Severity::Fatal), then ends the process
/// with exit code 1.
///
/// # Example
/// ```no_run
/// logging::fatal!("cannot open {}", "config.toml");
/// ```
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($arg)+)
    };
}
