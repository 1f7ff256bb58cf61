//! Resolver module containing the line-redraw strategy selection.
//!
//! This module decides, once, how a progress line is erased and redrawn on
//! the current host. It is organized like this:
//!
//! - `resolver` - the [`Resolver`] walking the OS family and shell decisions
//! - `builder` - [`ResolverBuilder`] for configuring a resolver
//! - `config` - [`ResolverConfig`] and the defaults
//! - `shell` - the table-driven shell classifier
//! - `probe` - the bounded `stty size` probe
//!
//! # Examples
//!
//! ## Resolving the Current Process
//!
//! ```rust,no_run
//! use clearline::resolver::Resolver;
//!
//! # fn main() -> Result<(), clearline::Error> {
//! let config = Resolver::default().detect()?;
//! print!("{}50%{}", config.clear_prefix(), config.clear_suffix());
//! # Ok(())
//! # }
//! ```
//!
//! ## Resolving a Described Host
//!
//! ```rust
//! use clearline::environment::{Environment, OsFamily};
//! use clearline::resolver::Resolver;
//!
//! # fn main() -> Result<(), clearline::Error> {
//! let env = Environment::new(OsFamily::Linux, "/bin/bash");
//! let config = Resolver::default().resolve(&env)?;
//! assert_eq!(config.clear_prefix(), "\r");
//! assert_eq!(config.clear_suffix(), "");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod probe;
pub mod resolver;
pub mod shell;

pub use builder::ResolverBuilder;
pub use config::{ResolverConfig, DEFAULT_PROBE_TIMEOUT};
pub use probe::{run_with_timeout, CommandProbe, SizeProbe};
pub use resolver::Resolver;
pub use shell::{classify_shell, ShellKind};
