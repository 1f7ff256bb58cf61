//! Clearline decides how a terminal progress line is erased and redrawn.
//!
//! A plain `"\r"` is enough to rewrite a line under bash, dash and POSIX `sh`,
//! but not under every other shell, multiplexer or Windows console. Clearline
//! looks at the operating system family, the `SHELL` variable and a couple of
//! other hints once, and hands back an immutable [`RedrawConfig`] holding the
//! sequences to emit around each redraw.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clearline::Error;
//!
//! # fn main() -> Result<(), Error> {
//! let config = clearline::global()?;
//! for pct in (0..=100).step_by(25) {
//!     eprint!("{}{pct}%{}", config.clear_prefix(), config.clear_suffix());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`environment`] - Operating system families and the environment snapshot
//! - [`resolver`] - The `Resolver`, its builder, the shell classifier and the size probe
//! - [`strategy`] - Redraw strategies and the resolved `RedrawConfig`
//! - [`progress`] - Redraw primitives and an indicatif-based progress line
//! - [`utils`] - Terminal size query
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod environment;
pub mod error;
pub mod progress;
pub mod resolver;
pub mod strategy;
pub mod utils;

pub use environment::{Environment, OsFamily};
pub use error::{Error, Result};
pub use progress::{LineWriter, ProgressBarOpts, ProgressLine, RedrawTerm};
pub use resolver::{classify_shell, Resolver, ResolverBuilder, ShellKind, SizeProbe};
pub use strategy::{RedrawConfig, RedrawMode, RedrawStrategy};
pub use utils::{terminal_size, TerminalSize};

use std::sync::OnceLock;

static GLOBAL: OnceLock<RedrawConfig> = OnceLock::new();

/// Resolve the process environment with the default resolver, once.
///
/// The first successful call stores the configuration for the rest of the
/// process; later calls return it without looking at the environment again.
/// An unsupported operating system is returned as an error on every call.
pub fn global() -> Result<&'static RedrawConfig> {
    if let Some(config) = GLOBAL.get() {
        return Ok(config);
    }
    let config = Resolver::default().detect()?;
    Ok(GLOBAL.get_or_init(|| config))
}
