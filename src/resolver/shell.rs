//! Shell classification.
//!
//! The classifier is a pure function of the shell value and the multiplexer
//! override. The `SHELL` variable names the user's login shell, not the one a
//! program was actually started from (`zsh my_program` from a bash session
//! still reports bash), so this is a heuristic and cannot be more than that.
//!
//! # Examples
//!
//! ```rust
//! use clearline::resolver::{classify_shell, ShellKind};
//!
//! assert_eq!(classify_shell("/bin/bash", false), ShellKind::BashLike);
//! assert_eq!(classify_shell("/bin/sh", false), ShellKind::BashLike);
//! assert_eq!(classify_shell("/usr/local/bin/zsh", false), ShellKind::Other);
//! assert_eq!(classify_shell("/bin/bash", true), ShellKind::Other);
//! ```

use crate::strategy::RedrawStrategy;

/// Substrings that mark a shell as bash-like anywhere in its path.
pub const BASH_LIKE_FRAGMENTS: &[&str] = &["bash", "dash"];

/// Exact paths of the POSIX `sh`, which behaves like dash for our purposes.
pub const POSIX_SH_PATHS: &[&str] = &["/bin/sh", "/sbin/sh", "/usr/bin/sh", "/usr/sbin/sh"];

/// Coarse shell family, as far as line redrawing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellKind {
    /// bash, dash or POSIX sh: a carriage return redraws the line.
    BashLike,
    /// zsh, ksh, csh, tcsh, fish, unknown shells, and anything running under
    /// the override multiplexer.
    Other,
}

impl ShellKind {
    /// The redraw strategy used for this kind of shell.
    pub fn strategy(&self) -> RedrawStrategy {
        match self {
            ShellKind::BashLike => RedrawStrategy::CarriageReturn,
            ShellKind::Other => RedrawStrategy::CursorUpClear,
        }
    }
}

/// Classify a shell value.
///
/// `multiplexer_override` wins over the shell name.
pub fn classify_shell(shell: &str, multiplexer_override: bool) -> ShellKind {
    if multiplexer_override {
        return ShellKind::Other;
    }

    let shell = shell.trim();
    let bash_like = BASH_LIKE_FRAGMENTS
        .iter()
        .any(|fragment| shell.contains(fragment))
        || POSIX_SH_PATHS.contains(&shell);

    if bash_like {
        ShellKind::BashLike
    } else {
        ShellKind::Other
    }
}
