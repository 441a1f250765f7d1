use crate::LogLevel;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_names_when_parse_then_matching_filter() {
    let cases = [
        ("off", LevelFilter::Off),
        ("silent", LevelFilter::Off),
        ("ERROR", LevelFilter::Error),
        ("warning", LevelFilter::Warn),
        (" debug ", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ];

    for (input, expected) in cases {
        let level: LogLevel = input.parse().unwrap();
        assert_that!(level.0, eq(expected));
    }
}

#[test]
fn given_unknown_name_when_parse_then_info() {
    let level: LogLevel = "loud".parse().unwrap();

    assert_that!(level.0, eq(LevelFilter::Info));
}

#[test]
fn given_trace_when_as_n8n_level_then_debug() {
    assert_eq!(LogLevel(LevelFilter::Trace).as_n8n_level(), "debug");
    assert_eq!(LogLevel(LevelFilter::Off).as_n8n_level(), "silent");
}

#[test]
fn given_level_when_display_then_lowercase() {
    assert_that!(LogLevel(LevelFilter::Warn).to_string(), eq("warn"));
}
