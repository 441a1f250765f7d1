use crate::ChildEnvironment;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use launcher_config::{Config, LogLevel};
use log::LevelFilter;

fn get(env: &ChildEnvironment, key: &str) -> Option<String> {
    env.get(key).map(String::from)
}

#[test]
fn given_public_url_when_building_env_then_urls_point_to_it() {
    // Given
    let mut config = Config::default();
    config.n8n.public_url = Some(String::from("https://flow.up.railway.app"));

    // When
    let env = ChildEnvironment::from_config(&config);

    // Then
    for key in ["WEBHOOK_URL", "N8N_EDITOR_BASE_URL", "VUE_APP_URL_BASE_API"] {
        assert_that!(
            get(&env, key),
            some(eq(&String::from("https://flow.up.railway.app")))
        );
    }
}

#[test]
fn given_no_public_url_when_building_env_then_urls_fall_back_to_localhost() {
    let config = Config::default();

    let env = ChildEnvironment::from_config(&config);

    assert_that!(
        get(&env, "WEBHOOK_URL"),
        some(eq(&String::from("http://localhost:5678")))
    );
}

#[test]
fn given_defaults_when_building_env_then_n8n_settings_are_forwarded() {
    let config = Config::default();

    let env = ChildEnvironment::from_config(&config);

    assert_that!(get(&env, "N8N_HOST"), some(eq(&String::from("0.0.0.0"))));
    assert_that!(get(&env, "N8N_PORT"), some(eq(&String::from("5678"))));
    assert_that!(get(&env, "N8N_PROTOCOL"), some(eq(&String::from("https"))));
    assert_that!(
        get(&env, "GENERIC_TIMEZONE"),
        some(eq(&String::from("America/Sao_Paulo")))
    );
    assert_that!(get(&env, "NODE_ENV"), some(eq(&String::from("production"))));
    assert_that!(get(&env, "N8N_LOG_LEVEL"), some(eq(&String::from("info"))));
    assert_that!(
        get(&env, "N8N_BASIC_AUTH_ACTIVE"),
        some(eq(&String::from("false")))
    );
    assert_that!(
        get(&env, "N8N_DISABLE_PRODUCTION_MAIN_PROCESS"),
        some(eq(&String::from("false")))
    );
    assert_that!(
        get(&env, "N8N_SKIP_WEBHOOK_DEREGISTRATION_SHUTDOWN"),
        some(eq(&String::from("true")))
    );
}

#[test]
fn given_debug_level_when_building_env_then_n8n_gets_debug() {
    let mut config = Config::default();
    config.n8n.log_level = LogLevel(LevelFilter::Trace);

    let env = ChildEnvironment::from_config(&config);

    assert_that!(get(&env, "N8N_LOG_LEVEL"), some(eq(&String::from("debug"))));
}

#[test]
fn given_env_when_looking_up_unknown_key_then_none() {
    let env = ChildEnvironment::from_config(&Config::default());

    assert_that!(get(&env, "PATH"), none());
    assert_that!(env.len(), eq(12));
}
