//! Builder pattern implementation for creating Resolver instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use clearline::resolver::ResolverBuilder;
//! use std::time::Duration;
//!
//! let resolver = ResolverBuilder::new()
//!     .probe_timeout(Duration::from_millis(100))
//!     .build();
//! ```
//!
//! ## Injecting a Probe
//!
//! ```rust
//! use clearline::environment::{Environment, OsFamily};
//! use clearline::resolver::ResolverBuilder;
//!
//! # fn main() -> Result<(), clearline::Error> {
//! let resolver = ResolverBuilder::new().size_probe(|| true).build();
//! let config = resolver.resolve(&Environment::new(OsFamily::Windows, "/usr/bin/bash"))?;
//! assert!(config.supports_size_probe());
//! # Ok(())
//! # }
//! ```

use super::{config::ResolverConfig, probe::SizeProbe, resolver::Resolver};

use std::time::Duration;

/// A builder used to create a [`Resolver`].
#[derive(Default)]
pub struct ResolverBuilder {
    config: ResolverConfig,
    probe: Option<Box<dyn SizeProbe>>,
}

impl ResolverBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ResolverBuilder::default()
    }

    /// Start from an existing configuration.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            config,
            probe: None,
        }
    }

    /// Set the variable read for the shell.
    pub fn shell_var(mut self, name: impl Into<String>) -> Self {
        self.config.shell_var = name.into();
        self
    }

    /// Set the variable whose presence forces the cursor-up strategy.
    pub fn multiplexer_var(mut self, name: impl Into<String>) -> Self {
        self.config.multiplexer_var = name.into();
        self
    }

    /// Set the command run by the default size probe.
    pub fn probe_command<I, S>(mut self, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.probe_program = program.into();
        self.config.probe_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the upper bound of the default size probe.
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.config.probe_timeout = timeout;
        self
    }

    /// Replace the default command probe.
    ///
    /// The probe command and timeout options are ignored once a custom probe
    /// is set.
    pub fn size_probe<P>(mut self, probe: P) -> Self
    where
        P: SizeProbe + 'static,
    {
        self.probe = Some(Box::new(probe));
        self
    }

    /// Create the [`Resolver`] with the specified options.
    pub fn build(self) -> Resolver {
        Resolver::new(self.config, self.probe)
    }
}
