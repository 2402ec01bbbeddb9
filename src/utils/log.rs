//! Terminal logging with colored module prefixes.
//!
//! The `log!` macro prints `[module] message` with a color keyed to the
//! module name. Long messages are truncated to the terminal width.
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "rendered {} pages", count);
//! ```

use colored::{ColoredString, Colorize};
use crossterm::terminal::size;
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120)) as usize
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// Print `[module] message`, truncated to the terminal width.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    // "[module] " occupies module.len() + 3 columns
    let max_msg_len = terminal_width().saturating_sub(module.len() + 3);
    let message = truncate_str(message, max_msg_len);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module name.
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module {
        "serve" => prefix.bright_blue().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to at most `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_short_string() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "你" is 3 bytes; truncating mid-character must back up
        assert_eq!(truncate_str("你好", 4), "你");
        assert_eq!(truncate_str("你好", 3), "你");
        assert_eq!(truncate_str("你好", 6), "你好");
        assert_eq!(truncate_str("a你b", 3), "a");
    }
}
