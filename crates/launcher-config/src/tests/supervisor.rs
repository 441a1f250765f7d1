use crate::Config;
use crate::tests::{EnvGuard, isolated_env};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Supervisor
// =========================================================================

#[test]
#[serial]
fn given_restart_delay_over_max_when_validate_then_error() {
    // Given
    let _env = isolated_env();
    let _delay = EnvGuard::set("LAUNCHER_RESTART_DELAY_SECS", "3601");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_zero_restart_delay_when_validate_then_ok() {
    // Given
    let _env = isolated_env();
    let _delay = EnvGuard::set("LAUNCHER_RESTART_DELAY_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_arm_delay_over_max_when_validate_then_error() {
    // Given
    let _env = isolated_env();
    let _delay = EnvGuard::set("LAUNCHER_KEEP_ALIVE_ARM_DELAY_SECS", "7200");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_defaults_when_durations_then_ten_and_thirty_seconds() {
    let config = Config::default();

    assert_that!(config.supervisor.restart_delay(), eq(Duration::from_secs(10)));
    assert_that!(
        config.supervisor.keep_alive_arm_delay(),
        eq(Duration::from_secs(30))
    );
}
