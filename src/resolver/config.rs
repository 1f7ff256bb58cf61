//! Configuration structures and defaults for the resolver.
//!
//! # Examples
//!
//! ```rust
//! use clearline::resolver::ResolverConfig;
//! use std::time::Duration;
//!
//! let config = ResolverConfig::default();
//! assert_eq!(config.shell_var, "SHELL");
//! assert_eq!(config.probe_timeout, Duration::from_millis(250));
//! ```

use crate::environment::{MULTIPLEXER_VAR, SHELL_VAR};
use std::time::Duration;

/// Default upper bound for the size probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(250);

/// Program run by the default size probe.
pub const DEFAULT_PROBE_PROGRAM: &str = "stty";

/// Arguments passed to [`DEFAULT_PROBE_PROGRAM`].
pub const DEFAULT_PROBE_ARGS: &[&str] = &["size"];

/// Configuration structure for the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Variable holding the user's shell.
    pub shell_var: String,
    /// Variable whose non-empty value forces the cursor-up strategy.
    pub multiplexer_var: String,
    /// Program used to probe the terminal size.
    pub probe_program: String,
    /// Arguments of the probe program.
    pub probe_args: Vec<String>,
    /// Upper bound on the probe's wall-clock duration.
    pub probe_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            shell_var: SHELL_VAR.into(),
            multiplexer_var: MULTIPLEXER_VAR.into(),
            probe_program: DEFAULT_PROBE_PROGRAM.into(),
            probe_args: DEFAULT_PROBE_ARGS.iter().map(|arg| arg.to_string()).collect(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}
