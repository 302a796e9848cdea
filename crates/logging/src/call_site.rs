//! crates/logging/src/call_site.rs
//! Call-site capture and resolution.
//!
//! A [`CallSite`] names the file, line and function a log call came from. Sites
//! are either captured at macro expansion (see [`call_site!`](crate::call_site!))
//! or resolved at runtime by a [`CallerResolver`] from the location tracked by
//! `#[track_caller]`. The default resolver is
//! [`StackWalker`](crate::StackWalker).

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// File, line and enclosing function of a log call.
///
/// Only the base name of the file is kept.
///
/// # Examples
///
/// ```
/// use logging::CallSite;
///
/// let site = CallSite::new("src/engine/worker.rs", 42).with_function("spawn");
/// assert_eq!(site.file(), "worker.rs");
/// assert_eq!(site.to_string(), "[worker.rs:42 spawn()] ");
///
/// let anonymous = CallSite::new("main.rs", 7);
/// assert_eq!(anonymous.to_string(), "[main.rs:7 ?()] ");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallSite {
    file: Cow<'static, str>,
    line: u32,
    function: Option<Cow<'static, str>>,
}

impl CallSite {
    /// Creates a call site with an unknown function name.
    #[must_use]
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        let file = match file.into() {
            Cow::Borrowed(path) => Cow::Borrowed(base_name(path)),
            Cow::Owned(path) => Cow::Owned(base_name(&path).to_owned()),
        };
        Self {
            file,
            line,
            function: None,
        }
    }

    /// Creates a call site from a location tracked by `#[track_caller]`.
    #[must_use]
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file().to_owned(), location.line())
    }

    /// Attaches the enclosing function name.
    ///
    /// An empty name leaves the function unknown.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<Cow<'static, str>>) -> Self {
        let function = function.into();
        self.function = (!function.is_empty()).then_some(function);
        self
    }

    /// Returns the base name of the source file.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the enclosing function name, if known.
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }
}

impl fmt::Display for CallSite {
    /// Renders the `[file:line function()] ` segment, trailing space included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{} {}()] ",
            self.file,
            self.line,
            self.function().unwrap_or("?")
        )
    }
}

/// Resolves the call site of a log line at runtime.
///
/// `origin` is the location that entered the logger; every public logging entry
/// point is `#[track_caller]`, so it already points past the logger's own
/// layers. `skip_frames` carries the configured caller depth for resolvers that
/// walk the stack themselves. Returning `None` omits the call-site segment.
pub trait CallerResolver: Send + Sync {
    /// Resolves the call site, or `None` when it is unavailable.
    fn resolve(&self, origin: &'static Location<'static>, skip_frames: usize) -> Option<CallSite>;
}

/// Resolver backed by the `#[track_caller]` location alone.
///
/// File and line come from the tracked location; the function name is not
/// recoverable this way and renders as `?()`. The caller depth is ignored.
/// [`StackWalker`](crate::StackWalker) falls back to this resolver when the
/// stack carries no symbols.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackedCaller;

impl CallerResolver for TrackedCaller {
    fn resolve(&self, origin: &'static Location<'static>, _skip_frames: usize) -> Option<CallSite> {
        Some(CallSite::new(origin.file(), origin.line()))
    }
}

/// Resolver that never finds a call site.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCallSite;

impl CallerResolver for NoCallSite {
    fn resolve(&self, _origin: &'static Location<'static>, _skip_frames: usize) -> Option<CallSite> {
        None
    }
}

/// Strips the directory part of a path, accepting either separator.
fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Reduces a `type_name` path to the innermost named function.
///
/// Closure segments are skipped, so a macro expanded inside a closure still
/// reports the function that owns it.
#[doc(hidden)]
#[must_use]
pub fn short_function_name(path: &str) -> &str {
    let mut trimmed = path;
    while let Some(outer) = trimmed.strip_suffix("::{{closure}}") {
        trimmed = outer;
    }
    trimmed.rsplit("::").next().unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_file_base_name() {
        assert_eq!(CallSite::new("src/lib.rs", 1).file(), "lib.rs");
        assert_eq!(CallSite::new("/abs/path/main.rs", 1).file(), "main.rs");
        assert_eq!(CallSite::new(r"C:\work\src\win.rs", 1).file(), "win.rs");
        assert_eq!(CallSite::new("bare.rs", 1).file(), "bare.rs");
        assert_eq!(
            CallSite::new(String::from("owned/dir/owned.rs"), 1).file(),
            "owned.rs"
        );
    }

    #[test]
    fn renders_segment_with_function() {
        let site = CallSite::new("src/net.rs", 88).with_function("connect");
        assert_eq!(site.to_string(), "[net.rs:88 connect()] ");
    }

    #[test]
    fn unknown_function_renders_question_mark() {
        assert_eq!(CallSite::new("a.rs", 3).to_string(), "[a.rs:3 ?()] ");
        assert_eq!(
            CallSite::new("a.rs", 3).with_function("").to_string(),
            "[a.rs:3 ?()] "
        );
    }

    #[test]
    fn tracked_caller_uses_origin_location() {
        let origin = Location::caller();
        let site = TrackedCaller.resolve(origin, 2).expect("tracked site");
        assert_eq!(site.file(), "call_site.rs");
        assert_eq!(site.line(), origin.line());
        assert_eq!(site.function(), None);
        assert_eq!(CallSite::from_location(origin), site);
    }

    #[test]
    fn no_call_site_never_resolves() {
        assert_eq!(NoCallSite.resolve(Location::caller(), 0), None);
    }

    #[test]
    fn short_function_name_takes_last_segment() {
        assert_eq!(short_function_name("app::server::run"), "run");
        assert_eq!(short_function_name("main"), "main");
    }

    #[test]
    fn short_function_name_skips_closures() {
        assert_eq!(
            short_function_name("app::worker::spawn::{{closure}}::{{closure}}"),
            "spawn"
        );
    }

    #[test]
    fn macro_captures_enclosing_function() {
        let site = crate::call_site!();
        assert_eq!(site.file(), "call_site.rs");
        assert_eq!(site.function(), Some("macro_captures_enclosing_function"));
    }

    #[test]
    fn macro_inside_closure_reports_owner() {
        let capture = || crate::call_site!();
        assert_eq!(capture().function(), Some("macro_inside_closure_reports_owner"));
    }
}
