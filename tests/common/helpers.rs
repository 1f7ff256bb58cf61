#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use clearline::environment::{Environment, OsFamily};
use clearline::resolver::{Resolver, ResolverBuilder, SizeProbe};
use clearline::RedrawConfig;

// Common test constants
pub const BASH: &str = "/bin/bash";
pub const ZSH: &str = "/usr/local/bin/zsh";
pub const ESCAPE_PREFIX: &str = "\x1b[1A\x1b[K\r";
pub const ESCAPE_SUFFIX: &str = "\x1b[1i\n";

/// Install a tracing subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A writer whose bytes stay readable after it has been moved away.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("buffer lock")).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A size probe answering `answer` and counting its calls.
#[derive(Clone)]
pub struct CountingProbe {
    answer: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingProbe {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SizeProbe for CountingProbe {
    fn probe(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Creates a resolver whose probe always gives `answer`.
pub fn create_test_resolver(answer: bool) -> Resolver {
    ResolverBuilder::new()
        .size_probe(CountingProbe::new(answer))
        .build()
}

/// Resolve `shell` on `os`, panicking on unsupported hosts.
pub fn resolve(os: OsFamily, shell: &str) -> RedrawConfig {
    create_test_resolver(false)
        .resolve(&Environment::new(os, shell))
        .expect("supported host")
}

/// Configuration of a bash session on linux.
pub fn bash_config() -> RedrawConfig {
    resolve(OsFamily::Linux, BASH)
}

/// Configuration of a zsh session on linux.
pub fn zsh_config() -> RedrawConfig {
    resolve(OsFamily::Linux, ZSH)
}

/// Configuration of a native windows console.
pub fn native_config() -> RedrawConfig {
    resolve(OsFamily::Windows, "")
}

/// Asserts that `config` uses the carriage-return strategy.
pub fn assert_carriage_return(config: &RedrawConfig) {
    assert_eq!(config.clear_prefix(), "\r");
    assert_eq!(config.clear_suffix(), "");
}

/// Asserts that `config` uses the cursor-up strategy.
pub fn assert_escape_sequences(config: &RedrawConfig) {
    assert_eq!(config.clear_prefix(), ESCAPE_PREFIX);
    assert_eq!(config.clear_suffix(), ESCAPE_SUFFIX);
}
