//! Core resolver implementation.
//!
//! The [`Resolver`] turns an [`Environment`] into a [`RedrawConfig`]:
//!
//! 1. an unsupported operating system is an error;
//! 2. Windows without a shell variable is a native console;
//! 3. Windows with a shell variable is a POSIX emulation layer: the size probe
//!    runs, then the shell is classified like on any POSIX host;
//! 4. POSIX hosts pick a strategy from the shell classification.

use super::builder::ResolverBuilder;
use super::config::ResolverConfig;
use super::probe::{CommandProbe, SizeProbe};
use super::shell::classify_shell;
use crate::environment::{Environment, OsFamily};
use crate::error::{Error, Result};
use crate::strategy::RedrawConfig;

use tracing::{debug, warn};

/// Resolves the redraw strategy for an environment.
pub struct Resolver {
    config: ResolverConfig,
    probe: Box<dyn SizeProbe>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        ResolverBuilder::new().build()
    }
}

impl Resolver {
    pub(crate) fn new(config: ResolverConfig, probe: Option<Box<dyn SizeProbe>>) -> Self {
        let probe = probe.unwrap_or_else(|| {
            Box::new(
                CommandProbe::new(config.probe_program.clone(), config.probe_args.clone())
                    .timeout(config.probe_timeout),
            )
        });
        Self { config, probe }
    }

    /// Get a reference to the resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Snapshot the process environment and resolve it.
    pub fn detect(&self) -> Result<RedrawConfig> {
        let env =
            Environment::from_process_vars(&self.config.shell_var, &self.config.multiplexer_var);
        self.resolve(&env)
    }

    /// Resolve the redraw configuration for `env`.
    ///
    /// Fails only with [`Error::UnsupportedOs`].
    pub fn resolve(&self, env: &Environment) -> Result<RedrawConfig> {
        let mut supports_size_probe = false;

        match &env.os {
            OsFamily::Unsupported(name) => {
                warn!(os = %name, "No redraw strategy for this operating system");
                return Err(Error::UnsupportedOs(name.clone()));
            }
            OsFamily::Windows if env.shell.is_empty() => {
                debug!("No shell variable on windows, using native console calls");
                return Ok(RedrawConfig::native_console());
            }
            OsFamily::Windows => {
                // A shell variable on windows means a POSIX emulation layer.
                // Cygwin ships a working `stty`, git for windows and mintty don't.
                supports_size_probe = self.probe.probe();
                debug!(
                    shell = %env.shell,
                    supports_size_probe,
                    "POSIX emulation layer detected on windows"
                );
            }
            _ => {}
        }

        let kind = classify_shell(&env.shell, env.multiplexer_override);
        debug!(
            os = %env.os,
            shell = %env.shell,
            multiplexer_override = env.multiplexer_override,
            ?kind,
            "Resolved redraw strategy"
        );

        Ok(RedrawConfig::ansi(kind.strategy(), supports_size_probe))
    }
}
