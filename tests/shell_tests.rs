//! Tests for the shell classifier.

use clearline::resolver::shell::{BASH_LIKE_FRAGMENTS, POSIX_SH_PATHS};
use clearline::resolver::{classify_shell, ShellKind};
use clearline::RedrawStrategy;

#[test]
fn test_bash_and_dash_anywhere_in_path() {
    for shell in [
        "/bin/bash",
        "/usr/local/bin/bash",
        "/opt/homebrew/bin/bash",
        "bash",
        "/bin/dash",
        "C:\\msys64\\usr\\bin\\bash.exe",
    ] {
        assert_eq!(classify_shell(shell, false), ShellKind::BashLike, "{shell}");
    }
}

#[test]
fn test_posix_sh_paths_are_bash_like() {
    for shell in POSIX_SH_PATHS {
        assert_eq!(classify_shell(shell, false), ShellKind::BashLike, "{shell}");
    }
}

#[test]
fn test_sh_elsewhere_is_not_bash_like() {
    for shell in ["sh", "/usr/local/bin/sh", "/bin/sh -l", "/bin/shell"] {
        assert_eq!(classify_shell(shell, false), ShellKind::Other, "{shell}");
    }
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(classify_shell("  /bin/sh\n", false), ShellKind::BashLike);
    assert_eq!(classify_shell("\t/usr/sbin/sh ", false), ShellKind::BashLike);
}

#[test]
fn test_non_bash_like_shells() {
    for shell in ["/bin/zsh", "/bin/ksh", "/bin/csh", "/bin/tcsh", "/usr/bin/fish", ""] {
        assert_eq!(classify_shell(shell, false), ShellKind::Other, "{shell}");
    }
}

#[test]
fn test_override_wins() {
    for shell in ["/bin/bash", "/bin/sh", "/bin/zsh", ""] {
        assert_eq!(classify_shell(shell, true), ShellKind::Other, "{shell}");
    }
}

#[test]
fn test_fragment_table() {
    assert_eq!(BASH_LIKE_FRAGMENTS, &["bash", "dash"]);
    assert_eq!(POSIX_SH_PATHS.len(), 4);
}

#[test]
fn test_kind_to_strategy() {
    assert_eq!(ShellKind::BashLike.strategy(), RedrawStrategy::CarriageReturn);
    assert_eq!(ShellKind::Other.strategy(), RedrawStrategy::CursorUpClear);
}
