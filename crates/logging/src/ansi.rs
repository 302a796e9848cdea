//! ANSI escape sequences used when rendering colored lines.

/// Wraps the timestamp.
pub const CYAN: &str = "\x1b[36m";

/// Debug label.
pub const BLUE: &str = "\x1b[34m";

/// Info label.
pub const GREEN: &str = "\x1b[32m";

/// Warning label.
pub const YELLOW: &str = "\x1b[33m";

/// Error label.
pub const RED: &str = "\x1b[31m";

/// Fatal label.
pub const MAGENTA: &str = "\x1b[35m";

/// Resets terminal to default color. Always appended after colored text.
pub const RESET: &str = "\x1b[0m";

/// Introducer shared by every escape above.
pub const ESCAPE_INTRODUCER: &str = "\x1b[";
