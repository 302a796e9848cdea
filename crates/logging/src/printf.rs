//! crates/logging/src/printf.rs
//! printf-style substitution for templates only known at runtime.
//!
//! Compile-time templates go through `format_args!` via the crate macros.
//! Templates read from configuration, the command line or other programs use
//! [`Template`] instead, which substitutes arguments in order:
//!
//! | Verb  | Output                                  |
//! |-------|-----------------------------------------|
//! | `%s`  | argument via `Display`                  |
//! | `%d`  | argument via `Display`                  |
//! | `%v`  | argument via `Display`                  |
//! | `%q`  | argument via `Display`, double-quoted   |
//! | `%%`  | a literal `%`                           |
//!
//! Mismatches never fail; they are spelled out in the output instead:
//! `%!d(MISSING)` for a verb without argument, `%!(EXTRA a, b)` for unused
//! arguments, `%!(NOVERB)` for a trailing `%`, and `%!x(value)` for an unknown
//! verb.

use std::fmt::{self, Write as _};

/// A runtime template paired with its arguments, formatted lazily.
///
/// Nothing is rendered until the value is displayed, so a filtered log call
/// never pays for substitution.
///
/// # Examples
///
/// ```
/// use logging::Template;
///
/// let args: [&dyn std::fmt::Display; 2] = [&"disk", &93];
/// let template = Template::new("%s usage at %d%%", &args);
/// assert_eq!(template.to_string(), "disk usage at 93%");
/// ```
#[derive(Clone, Copy)]
pub struct Template<'a> {
    template: &'a str,
    args: &'a [&'a dyn fmt::Display],
}

impl<'a> Template<'a> {
    /// Pairs `template` with `args`.
    #[must_use]
    pub const fn new(template: &'a str, args: &'a [&'a dyn fmt::Display]) -> Self {
        Self { template, args }
    }
}

impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut args = self.args.iter();
        let mut rest = self.template;

        while let Some(percent) = rest.find('%') {
            f.write_str(&rest[..percent])?;
            let mut tail = rest[percent + 1..].chars();

            match tail.next() {
                None => f.write_str("%!(NOVERB)")?,
                Some('%') => f.write_char('%')?,
                Some(verb) => match args.next() {
                    Some(arg) => write_verb(f, verb, *arg)?,
                    None => write!(f, "%!{verb}(MISSING)")?,
                },
            }

            rest = tail.as_str();
        }
        f.write_str(rest)?;

        let mut extra = args.peekable();
        if extra.peek().is_some() {
            f.write_str("%!(EXTRA ")?;
            for (index, arg) in extra.enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_char(')')?;
        }

        Ok(())
    }
}

impl fmt::Debug for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("template", &self.template)
            .field("args", &self.args.len())
            .finish()
    }
}

fn write_verb(f: &mut fmt::Formatter<'_>, verb: char, arg: &dyn fmt::Display) -> fmt::Result {
    match verb {
        's' | 'd' | 'v' => write!(f, "{arg}"),
        'q' => write!(f, "{:?}", arg.to_string()),
        other => write!(f, "%!{other}({arg})"),
    }
}

/// Substitutes `args` into `template` and returns the result.
///
/// # Examples
///
/// ```
/// use logging::sprintf;
///
/// assert_eq!(sprintf("value=%d", &[&42]), "value=42");
/// assert_eq!(sprintf("%s and %s", &[&"one"]), "one and %!s(MISSING)");
/// ```
#[must_use]
pub fn sprintf(template: &str, args: &[&dyn fmt::Display]) -> String {
    Template::new(template, args).to_string()
}
