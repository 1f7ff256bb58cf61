//! Terminal size query.
//!
//! The widget layer needs the terminal width to lay out a bar. Where the
//! resolver found a working `stty`, the size comes from `stty size`. Otherwise
//! the console is asked directly, and when that fails too a fixed 80x20
//! terminal is assumed.

use crate::resolver::run_with_timeout;
use crate::strategy::RedrawConfig;

use std::time::Duration;
use tracing::debug;

/// Dimensions of a terminal, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    pub rows: u16,
    pub cols: u16,
}

impl TerminalSize {
    /// Size assumed when nothing can report the real one.
    pub const FALLBACK: TerminalSize = TerminalSize { rows: 20, cols: 80 };
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Parse the output of `stty size`.
///
/// The expected format is `"<rows> <cols>"`, optionally followed by a newline.
/// Zero dimensions are rejected.
///
/// ```rust
/// use clearline::utils::{parse_stty_size, TerminalSize};
///
/// assert_eq!(parse_stty_size("24 80\n"), Some(TerminalSize { rows: 24, cols: 80 }));
/// assert_eq!(parse_stty_size("garbage"), None);
/// ```
pub fn parse_stty_size(output: &str) -> Option<TerminalSize> {
    let mut fields = output.split_whitespace();
    let rows = fields.next()?.parse::<u16>().ok()?;
    let cols = fields.next()?.parse::<u16>().ok()?;
    if fields.next().is_some() || rows == 0 || cols == 0 {
        return None;
    }
    Some(TerminalSize { rows, cols })
}

/// Query the size of the terminal attached to the process.
///
/// `timeout` bounds the `stty size` invocation when it is used.
pub fn terminal_size(config: &RedrawConfig, timeout: Duration) -> TerminalSize {
    if config.supports_size_probe() {
        let args = ["size".to_string()];
        let size = run_with_timeout("stty", &args, timeout)
            .filter(|output| output.status.success())
            .and_then(|output| parse_stty_size(&String::from_utf8_lossy(&output.stdout)));
        if let Some(size) = size {
            return size;
        }
        debug!("stty size gave no usable answer, asking the console");
    }

    match console::Term::stderr().size_checked() {
        Some((rows, cols)) if rows > 0 && cols > 0 => TerminalSize { rows, cols },
        _ => {
            debug!("Terminal size unknown, assuming {:?}", TerminalSize::FALLBACK);
            TerminalSize::FALLBACK
        }
    }
}
