use crate::Config;
use crate::tests::{EnvGuard, isolated_env};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Health endpoint
// =========================================================================

#[test]
#[serial]
fn given_privileged_health_port_when_validate_then_error() {
    // Given
    let _env = isolated_env();
    let _port = EnvGuard::set("LAUNCHER_HEALTH_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_health_port_zero_when_validate_then_ok() {
    // Given - port 0 means OS auto-assign
    let _env = isolated_env();
    let _port = EnvGuard::set("LAUNCHER_HEALTH_PORT", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_relative_health_path_when_validate_then_error() {
    // Given
    let _env = isolated_env();
    let _path = EnvGuard::set("LAUNCHER_HEALTH_PATH", "render-health");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_blank_service_name_when_validate_then_error() {
    // Given
    let _env = isolated_env();
    let _name = EnvGuard::set("LAUNCHER_SERVICE_NAME", "   ");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_defaults_when_bind_addr_then_all_interfaces() {
    let config = Config::default();

    assert_that!(config.health_endpoint.bind_addr(),
        eq("0.0.0.0:5679")
    );
}
