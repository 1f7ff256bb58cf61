//! Redraw strategies and the resolved configuration.
//!
//! A [`RedrawConfig`] is the output of resolution. It is immutable: every field
//! is private and only exposed through accessors, so the prefix and suffix a
//! process starts with are the ones it ends with.

/// Escape character.
const ESC: char = '\x1b';

/// Move the cursor up one line, erase it, return to column zero.
pub const CURSOR_UP_CLEAR_PREFIX: &str = "\x1b[1A\x1b[K\r";

/// Reset to a known terminal mode, then start a new line.
pub const CURSOR_UP_CLEAR_SUFFIX: &str = "\x1b[1i\n";

/// Return to column zero.
pub const CARRIAGE_RETURN_PREFIX: &str = "\r";

/// A pair of control sequences emitted around each redraw of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedrawStrategy {
    /// Plain `"\r"`, enough for bash-like shells and the Windows console.
    CarriageReturn,
    /// Cursor-up-and-erase, for every other shell.
    ///
    /// Known to work with zsh. It is a best-effort guess for ksh, csh, tcsh
    /// and fish.
    CursorUpClear,
}

impl RedrawStrategy {
    /// Sequence emitted immediately before the line text.
    pub fn prefix(&self) -> &'static str {
        match self {
            RedrawStrategy::CarriageReturn => CARRIAGE_RETURN_PREFIX,
            RedrawStrategy::CursorUpClear => CURSOR_UP_CLEAR_PREFIX,
        }
    }

    /// Sequence emitted immediately after the line text.
    pub fn suffix(&self) -> &'static str {
        match self {
            RedrawStrategy::CarriageReturn => "",
            RedrawStrategy::CursorUpClear => CURSOR_UP_CLEAR_SUFFIX,
        }
    }

    /// Whether the suffix leaves the cursor on the line below the text.
    pub fn ends_with_newline(&self) -> bool {
        self.suffix().ends_with('\n')
    }
}

/// How the widget layer must talk to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedrawMode {
    /// Control sequences written to the output stream.
    Ansi,
    /// OS-native console calls, no escape sequences.
    NativeConsole,
}

/// The resolved, immutable redraw configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedrawConfig {
    strategy: RedrawStrategy,
    requires_native_console_calls: bool,
    supports_size_probe: bool,
}

impl RedrawConfig {
    /// Configuration for a native Windows console.
    pub(crate) fn native_console() -> Self {
        Self {
            strategy: RedrawStrategy::CarriageReturn,
            requires_native_console_calls: true,
            supports_size_probe: false,
        }
    }

    /// Configuration for an ANSI-capable terminal.
    pub(crate) fn ansi(strategy: RedrawStrategy, supports_size_probe: bool) -> Self {
        Self {
            strategy,
            requires_native_console_calls: false,
            supports_size_probe,
        }
    }

    /// Sequence to emit before rewriting the progress line.
    pub fn clear_prefix(&self) -> &'static str {
        self.strategy.prefix()
    }

    /// Sequence to emit after rewriting the progress line.
    pub fn clear_suffix(&self) -> &'static str {
        self.strategy.suffix()
    }

    /// Whether redraws must go through OS-native console calls.
    pub fn requires_native_console_calls(&self) -> bool {
        self.requires_native_console_calls
    }

    /// Whether `stty size` answered within the probe timeout.
    pub fn supports_size_probe(&self) -> bool {
        self.supports_size_probe
    }

    /// The (prefix, suffix) pair this configuration emits.
    pub fn strategy(&self) -> RedrawStrategy {
        self.strategy
    }

    /// ANSI sequences or native console calls.
    pub fn mode(&self) -> RedrawMode {
        if self.requires_native_console_calls {
            RedrawMode::NativeConsole
        } else {
            RedrawMode::Ansi
        }
    }

    /// Whether the prefix relies on escape sequences.
    pub fn uses_escape_sequences(&self) -> bool {
        self.clear_prefix().contains(ESC) || self.clear_suffix().contains(ESC)
    }
}
