//! Tests for the environment snapshot and OS families.

use clearline::environment::{Environment, OsFamily, MULTIPLEXER_VAR, SHELL_VAR};
use clearline::resolver::ResolverBuilder;
use clearline::{Error, RedrawStrategy};

#[test]
fn test_os_family_from_name() {
    let test_cases = [
        ("windows", OsFamily::Windows),
        ("macos", OsFamily::Darwin),
        ("darwin", OsFamily::Darwin),
        ("linux", OsFamily::Linux),
        ("Linux", OsFamily::Linux),
        ("freebsd", OsFamily::FreeBsd),
        ("netbsd", OsFamily::NetBsd),
        ("openbsd", OsFamily::OpenBsd),
        ("dragonfly", OsFamily::DragonFly),
        ("solaris", OsFamily::Solaris),
        ("plan9", OsFamily::Plan9),
    ];
    for (name, expected) in test_cases {
        assert_eq!(OsFamily::from_name(name), expected, "{name}");
        assert!(expected.is_supported());
    }
}

#[test]
fn test_unknown_families_are_unsupported() {
    for name in ["android", "ios", "illumos", "haiku", "", "wasi"] {
        let family = OsFamily::from_name(name);
        assert_eq!(family, OsFamily::Unsupported(name.to_string()));
        assert!(!family.is_supported());
        assert!(!family.is_posix());
        assert_eq!(family.to_string(), name);
    }
}

#[test]
fn test_posix_families() {
    let families = OsFamily::posix_families();
    assert!(families.iter().all(OsFamily::is_posix));
    assert!(!families.contains(&OsFamily::Windows));
    assert!(!OsFamily::Windows.is_posix());
}

#[test]
fn test_display_round_trips_through_from_name() {
    for family in OsFamily::posix_families() {
        assert_eq!(OsFamily::from_name(&family.to_string()), family);
    }
    assert_eq!(OsFamily::Windows.to_string(), "windows");
}

#[test]
fn test_current_matches_consts() {
    assert_eq!(OsFamily::current(), OsFamily::from_name(std::env::consts::OS));
}

#[test]
fn test_environment_builder() {
    let env = Environment::new(OsFamily::Linux, "/bin/zsh");
    assert_eq!(env.shell, "/bin/zsh");
    assert!(!env.multiplexer_override);
    assert!(env.with_multiplexer_override(true).multiplexer_override);
}

#[test]
fn test_default_variable_names() {
    assert_eq!(SHELL_VAR, "SHELL");
    assert_eq!(MULTIPLEXER_VAR, "TERMINATOR_UUID");
}

#[test]
fn test_unset_variables_read_empty() {
    let env =
        Environment::from_process_vars("CLEARLINE_TEST_NOPE_SHELL", "CLEARLINE_TEST_NOPE_MUX");
    assert_eq!(env.shell, "");
    assert!(!env.multiplexer_override);
    assert_eq!(env.os, OsFamily::current());
}

#[test]
fn test_multiplexer_override_needs_non_empty_value() {
    std::env::set_var("CLEARLINE_TEST_EMPTY_MUX", "");
    std::env::set_var("CLEARLINE_TEST_SET_MUX", "x");

    let empty =
        Environment::from_process_vars("CLEARLINE_TEST_NOPE_SHELL", "CLEARLINE_TEST_EMPTY_MUX");
    assert!(!empty.multiplexer_override);
    let set =
        Environment::from_process_vars("CLEARLINE_TEST_NOPE_SHELL", "CLEARLINE_TEST_SET_MUX");
    assert!(set.multiplexer_override);
}

#[test]
fn test_detect_honours_multiplexer_var() {
    std::env::set_var("CLEARLINE_TEST_DETECT_SHELL", "/bin/bash");
    std::env::set_var("CLEARLINE_TEST_DETECT_MUX", "x");

    let with_override = ResolverBuilder::new()
        .shell_var("CLEARLINE_TEST_DETECT_SHELL")
        .multiplexer_var("CLEARLINE_TEST_DETECT_MUX")
        .size_probe(|| false)
        .build();
    let without_override = ResolverBuilder::new()
        .shell_var("CLEARLINE_TEST_DETECT_SHELL")
        .multiplexer_var("CLEARLINE_TEST_NOPE_MUX")
        .size_probe(|| false)
        .build();

    match (with_override.detect(), without_override.detect()) {
        (Ok(forced), Ok(plain)) => {
            assert_eq!(forced.strategy(), RedrawStrategy::CursorUpClear);
            assert_eq!(plain.strategy(), RedrawStrategy::CarriageReturn);
        }
        // Hosts outside the supported families cannot resolve at all.
        (Err(Error::UnsupportedOs(_)), Err(Error::UnsupportedOs(_))) => {
            assert!(!OsFamily::current().is_supported());
        }
        (forced, plain) => panic!("mismatch: {forced:?} vs {plain:?}"),
    }
}
