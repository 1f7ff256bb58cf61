//! Environment inputs consumed by the resolver.
//!
//! An [`Environment`] is a plain snapshot: the operating system family, the
//! value of the shell variable and whether the multiplexer override is set.
//! Taking the snapshot is separate from resolving it, so tests can describe any
//! host without touching the real process environment.
//!
//! # Examples
//!
//! ```rust
//! use clearline::environment::{Environment, OsFamily};
//!
//! let env = Environment::new(OsFamily::Linux, "/usr/bin/zsh");
//! assert!(!env.multiplexer_override);
//!
//! assert_eq!(OsFamily::from_name("macos"), OsFamily::Darwin);
//! assert!(!OsFamily::from_name("android").is_supported());
//! ```

use std::fmt;

/// Default name of the variable identifying the user's shell.
pub const SHELL_VAR: &str = "SHELL";

/// Default name of the variable set by the Terminator terminal emulator.
///
/// Terminator does not cope with the carriage-return strategy even when the
/// shell is bash, so its presence forces the cursor-up strategy.
pub const MULTIPLEXER_VAR: &str = "TERMINATOR_UUID";

/// Operating system families the resolver knows about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Windows,
    Darwin,
    Linux,
    FreeBsd,
    NetBsd,
    OpenBsd,
    DragonFly,
    Solaris,
    Plan9,
    /// Any other platform, keeping the reported name for error messages.
    Unsupported(String),
}

impl OsFamily {
    /// Map a platform name to its family.
    ///
    /// Accepts the values of [`std::env::consts::OS`] as well as `darwin`.
    /// Matching is case-insensitive; unknown names become
    /// [`OsFamily::Unsupported`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "windows" => OsFamily::Windows,
            "macos" | "darwin" => OsFamily::Darwin,
            "linux" => OsFamily::Linux,
            "freebsd" => OsFamily::FreeBsd,
            "netbsd" => OsFamily::NetBsd,
            "openbsd" => OsFamily::OpenBsd,
            "dragonfly" => OsFamily::DragonFly,
            "solaris" => OsFamily::Solaris,
            "plan9" => OsFamily::Plan9,
            _ => OsFamily::Unsupported(name.to_string()),
        }
    }

    /// Family of the platform this binary was compiled for.
    pub fn current() -> Self {
        OsFamily::from_name(std::env::consts::OS)
    }

    /// Return `false` for [`OsFamily::Unsupported`].
    pub fn is_supported(&self) -> bool {
        !matches!(self, OsFamily::Unsupported(_))
    }

    /// Return `true` for every supported family other than Windows.
    pub fn is_posix(&self) -> bool {
        self.is_supported() && *self != OsFamily::Windows
    }

    /// Every supported POSIX family.
    pub fn posix_families() -> [OsFamily; 8] {
        [
            OsFamily::Darwin,
            OsFamily::Linux,
            OsFamily::FreeBsd,
            OsFamily::NetBsd,
            OsFamily::OpenBsd,
            OsFamily::DragonFly,
            OsFamily::Solaris,
            OsFamily::Plan9,
        ]
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Windows => "windows",
            OsFamily::Darwin => "darwin",
            OsFamily::Linux => "linux",
            OsFamily::FreeBsd => "freebsd",
            OsFamily::NetBsd => "netbsd",
            OsFamily::OpenBsd => "openbsd",
            OsFamily::DragonFly => "dragonfly",
            OsFamily::Solaris => "solaris",
            OsFamily::Plan9 => "plan9",
            OsFamily::Unsupported(name) => name,
        };
        f.write_str(name)
    }
}

/// Snapshot of the inputs the resolver looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Host operating system family.
    pub os: OsFamily,
    /// Value of the shell variable, empty when unset.
    pub shell: String,
    /// Whether the multiplexer variable is set to a non-empty value.
    pub multiplexer_override: bool,
}

impl Environment {
    /// Create an environment without the multiplexer override.
    pub fn new(os: OsFamily, shell: impl Into<String>) -> Self {
        Self {
            os,
            shell: shell.into(),
            multiplexer_override: false,
        }
    }

    /// Set the multiplexer override.
    pub fn with_multiplexer_override(mut self, multiplexer_override: bool) -> Self {
        self.multiplexer_override = multiplexer_override;
        self
    }

    /// Read the real process environment using the default variable names.
    pub fn from_process() -> Self {
        Self::from_process_vars(SHELL_VAR, MULTIPLEXER_VAR)
    }

    /// Read the real process environment using custom variable names.
    ///
    /// Variables that are unset or not valid unicode read as empty.
    pub fn from_process_vars(shell_var: &str, multiplexer_var: &str) -> Self {
        let shell = std::env::var(shell_var).unwrap_or_default();
        let multiplexer_override = std::env::var_os(multiplexer_var)
            .map(|value| !value.is_empty())
            .unwrap_or(false);

        Self {
            os: OsFamily::current(),
            shell,
            multiplexer_override,
        }
    }
}
