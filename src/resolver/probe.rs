//! Bounded `stty size` probe.
//!
//! The probe is the only part of resolution that can block. It spawns one
//! child process and waits for it at most the configured timeout; on timeout
//! the child is killed and the probe reports failure.
//!
//! # Examples
//!
//! ```rust,no_run
//! use clearline::resolver::{CommandProbe, SizeProbe};
//! use std::time::Duration;
//!
//! let probe = CommandProbe::new("stty", ["size"]).timeout(Duration::from_millis(100));
//! if probe.probe() {
//!     println!("stty can report the terminal size");
//! }
//! ```

use super::config::{DEFAULT_PROBE_ARGS, DEFAULT_PROBE_PROGRAM, DEFAULT_PROBE_TIMEOUT};

use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Something that can tell whether the terminal size can be queried.
pub trait SizeProbe: Send + Sync {
    /// Return `true` when the size query succeeded.
    ///
    /// Implementations must return within a bounded time and must not fail
    /// otherwise than by returning `false`.
    fn probe(&self) -> bool;
}

impl<F> SizeProbe for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn probe(&self) -> bool {
        self()
    }
}

/// Runs an external command and succeeds if it exits with status zero.
#[derive(Debug, Clone)]
pub struct CommandProbe {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl Default for CommandProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_PROGRAM, DEFAULT_PROBE_ARGS.iter().copied())
    }
}

impl CommandProbe {
    /// Create a probe running `program` with `args` under the default timeout.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Set the upper bound on the probe's wall-clock duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Program run by the probe.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to [`CommandProbe::program`].
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Upper bound on the probe's wall-clock duration.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    /// Run the command and return its output, if it finished in time.
    pub fn output(&self) -> Option<Output> {
        run_with_timeout(&self.program, &self.args, self.timeout)
    }
}

impl SizeProbe for CommandProbe {
    fn probe(&self) -> bool {
        let ok = self
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);
        debug!(program = %self.program, ok, "Size probe finished");
        ok
    }
}

/// Run `program` with `args`, waiting at most `timeout`.
///
/// Standard input is inherited so that `stty` can see the terminal, standard
/// output is captured, standard error is discarded. Returns `None` if the
/// command cannot be spawned or does not finish in time; in the latter case the
/// child is killed.
pub fn run_with_timeout(program: &str, args: &[String], timeout: Duration) -> Option<Output> {
    // A runtime cannot be started from within another one.
    if tokio::runtime::Handle::try_current().is_ok() {
        return std::thread::scope(|scope| {
            scope
                .spawn(|| block_on_command(program, args, timeout))
                .join()
                .ok()
                .flatten()
        });
    }
    block_on_command(program, args, timeout)
}

fn block_on_command(program: &str, args: &[String], timeout: Duration) -> Option<Output> {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            debug!(error = %e, "Could not build the probe runtime");
            return None;
        }
    };

    runtime.block_on(async {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        match tokio::time::timeout(timeout, command.output()).await {
            Ok(Ok(output)) => Some(output),
            Ok(Err(e)) => {
                debug!(program, error = %e, "Probe command could not run");
                None
            }
            Err(_) => {
                debug!(
                    program,
                    timeout_ms = timeout.as_millis() as u64,
                    "Probe command timed out"
                );
                None
            }
        }
    })
}
