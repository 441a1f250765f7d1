use crate::LauncherError;

use std::io;
use std::path::PathBuf;

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};

#[test]
fn given_missing_executable_when_reporting_then_exit_one_with_install_hint() {
    // Given
    let error = LauncherError::ExecutableNotFound {
        path: PathBuf::from("/srv/node_modules/.bin/n8n"),
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
    };

    // Then
    assert_that!(error.exit_code(), eq(1));
    assert_that!(
        error.recovery_hint().to_string(),
        contains_substring("npm install n8n")
    );
    assert_that!(
        error.to_string(),
        contains_substring("/srv/node_modules/.bin/n8n")
    );
}

#[test]
fn given_bind_error_when_reporting_then_hint_names_port_variable() {
    let error = LauncherError::Bind {
        addr: String::from("0.0.0.0:5679"),
        source: io::Error::from(io::ErrorKind::AddrInUse),
        location: error_location::ErrorLocation::from(std::panic::Location::caller()),
    };

    assert_that!(error.exit_code(), eq(1));
    assert_that!(
        error.recovery_hint().to_string(),
        contains_substring("LAUNCHER_HEALTH_PORT")
    );
}

#[test]
fn given_io_error_when_converting_then_generic_hint() {
    let error = LauncherError::from(io::Error::other("disk gone"));

    assert_that!(error.to_string(), contains_substring("disk gone"));
    assert_that!(
        error.recovery_hint().to_string(),
        contains_substring("check the logs")
    );
}
