//! crates/logging/src/stack_walker.rs
//! Call-site resolution by walking the stack.

use std::panic::Location;
use std::path::Path;

use backtrace::{Backtrace, BacktraceFrame, BacktraceSymbol};

use crate::call_site::{CallSite, CallerResolver, TrackedCaller, short_function_name};
use crate::config::DEFAULT_CALLER_DEPTH;

/// Resolver that walks the stack to find the call site and its function.
///
/// The frame matching the `#[track_caller]` origin is the direct caller of
/// the logging API and corresponds to the default depth of 2. Each depth above
/// that moves one frame further out. Depths 0 and 1 would name the logger's own
/// frames, which are hidden; they resolve like the default.
///
/// When the stack carries no symbols for the origin (stripped binaries, no
/// debug info) the resolver falls back to [`TrackedCaller`]. A depth beyond
/// the outermost frame, or a frame without file and line, yields no site.
#[derive(Clone, Copy, Debug, Default)]
pub struct StackWalker;

impl CallerResolver for StackWalker {
    fn resolve(&self, origin: &'static Location<'static>, skip_frames: usize) -> Option<CallSite> {
        let trace = Backtrace::new();
        let symbols: Vec<&BacktraceSymbol> = trace
            .frames()
            .iter()
            .flat_map(BacktraceFrame::symbols)
            .collect();

        let Some(anchor) = symbols.iter().position(|symbol| is_origin(symbol, origin)) else {
            return TrackedCaller.resolve(origin, skip_frames);
        };

        let outward = skip_frames.saturating_sub(DEFAULT_CALLER_DEPTH);
        symbols
            .get(anchor.checked_add(outward)?)
            .and_then(|symbol| site_of(symbol))
    }
}

fn is_origin(symbol: &BacktraceSymbol, origin: &Location<'_>) -> bool {
    symbol.lineno() == Some(origin.line())
        && symbol
            .filename()
            .is_some_and(|file| file.ends_with(Path::new(origin.file())))
}

fn site_of(symbol: &BacktraceSymbol) -> Option<CallSite> {
    let file = symbol.filename()?.to_string_lossy().into_owned();
    let site = CallSite::new(file, symbol.lineno()?);
    let Some(name) = symbol.name() else {
        return Some(site);
    };
    let path = without_generic_args(&format!("{name:#}"));
    Some(site.with_function(short_function_name(&path).to_owned()))
}

/// Drops turbofish arguments (`run::<T>` becomes `run`) from a symbol path.
fn without_generic_args(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut depth = 0_usize;
    for ch in path.chars() {
        match ch {
            '<' if depth > 0 => depth += 1,
            '<' if out.ends_with("::") => {
                out.truncate(out.len() - 2);
                depth = 1;
            }
            '>' if depth > 0 => depth -= 1,
            _ if depth > 0 => {}
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    #[inline(never)]
    fn resolve_from_caller(depth: usize) -> Option<CallSite> {
        StackWalker.resolve(Location::caller(), depth)
    }

    #[inline(never)]
    fn relay(depth: usize) -> Option<CallSite> {
        resolve_from_caller(depth)
    }

    #[test]
    fn default_depth_names_calling_function() {
        let line = line!() + 1;
        let site = resolve_from_caller(DEFAULT_CALLER_DEPTH).expect("site resolved");
        assert_eq!(site.file(), "stack_walker.rs");
        assert_eq!(site.line(), line);
        assert_eq!(site.function(), Some("default_depth_names_calling_function"));
    }

    #[test]
    fn shallow_depths_resolve_like_default() {
        let mut sites = Vec::new();
        for depth in 0..=DEFAULT_CALLER_DEPTH {
            sites.push(resolve_from_caller(depth));
        }
        assert!(sites[0].is_some());
        assert!(sites.iter().all(|site| *site == sites[0]));
    }

    #[test]
    fn deeper_depth_moves_one_frame_out() {
        let direct = relay(DEFAULT_CALLER_DEPTH).expect("site resolved");
        assert_eq!(direct.function(), Some("relay"));

        let line = line!() + 1;
        let outer = relay(DEFAULT_CALLER_DEPTH + 1).expect("site resolved");
        assert_eq!(outer.file(), "stack_walker.rs");
        assert_eq!(outer.line(), line);
        assert_eq!(outer.function(), Some("deeper_depth_moves_one_frame_out"));
    }

    #[test]
    fn generic_arguments_are_dropped() {
        assert_eq!(
            without_generic_args("app::run_with::<std::env::Args, Vec<u8>>::{{closure}}"),
            "app::run_with::{{closure}}"
        );
        assert_eq!(without_generic_args("<app::Job as core::fmt::Display>::fmt"), "<app::Job as core::fmt::Display>::fmt");
        assert_eq!(without_generic_args("app::plain"), "app::plain");
    }

    #[test]
    fn depth_past_the_stack_yields_nothing() {
        assert_eq!(resolve_from_caller(usize::MAX), None);
    }
}
