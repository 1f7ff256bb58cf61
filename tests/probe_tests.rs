//! Tests for the bounded size probe.
//!
//! The command-based tests rely on `sleep`, `true` and `false`, so they only
//! run on unix hosts.

use clearline::resolver::{CommandProbe, SizeProbe, DEFAULT_PROBE_TIMEOUT};
use std::time::{Duration, Instant};

mod common;
use common::helpers::*;

#[test]
fn test_command_probe_default() {
    let probe = CommandProbe::default();
    assert_eq!(probe.program(), "stty");
    assert_eq!(probe.args(), &["size".to_string()]);
    assert_eq!(probe.timeout_duration(), DEFAULT_PROBE_TIMEOUT);
}

#[test]
fn test_missing_program_is_not_fatal() {
    init_tracing();
    let probe = CommandProbe::new("clearline-no-such-program", Vec::<String>::new());
    assert!(!probe.probe());
}

#[cfg(unix)]
#[test]
fn test_successful_command() {
    assert!(CommandProbe::new("true", Vec::<String>::new()).probe());
}

#[cfg(unix)]
#[test]
fn test_failing_command() {
    assert!(!CommandProbe::new("false", Vec::<String>::new()).probe());
}

#[cfg(unix)]
#[test]
fn test_hanging_command_times_out() {
    init_tracing();
    let probe = CommandProbe::new("sleep", ["5"]).timeout(Duration::from_millis(250));

    let start = Instant::now();
    let ok = probe.probe();
    let elapsed = start.elapsed();

    assert!(!ok);
    assert!(elapsed >= Duration::from_millis(250), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(2), "{elapsed:?}");
}

#[cfg(unix)]
#[test]
fn test_hanging_probe_degrades_resolution() {
    use clearline::environment::{Environment, OsFamily};
    use clearline::resolver::ResolverBuilder;

    let resolver = ResolverBuilder::new()
        .probe_command("sleep", ["5"])
        .probe_timeout(Duration::from_millis(250))
        .build();

    let start = Instant::now();
    let config = resolver
        .resolve(&Environment::new(OsFamily::Windows, BASH))
        .unwrap();

    assert!(!config.supports_size_probe());
    assert!(!config.requires_native_console_calls());
    assert_carriage_return(&config);
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[cfg(unix)]
#[test]
fn test_output_is_captured() {
    let output = CommandProbe::new("echo", ["24 80"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "24 80");
}

#[cfg(unix)]
#[tokio::test]
async fn test_probe_inside_runtime() {
    let probe = CommandProbe::new("true", Vec::<String>::new());
    assert!(probe.probe());
}
