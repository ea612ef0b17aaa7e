use nest_reader::config::Config;
use nest_reader::error::AppError;
use serial_test::serial;

const CREDENTIAL_VARS: [&str; 4] = ["PROJECT_ID", "CLIENT_ID", "CLIENT_SECRET", "REFRESH_TOKEN"];

fn set_all_credentials() {
    std::env::set_var("PROJECT_ID", "proj-1");
    std::env::set_var("CLIENT_ID", "client-1");
    std::env::set_var("CLIENT_SECRET", "secret-1");
    std::env::set_var("REFRESH_TOKEN", "refresh-1");
}

fn clear_all() {
    for var in CREDENTIAL_VARS {
        std::env::remove_var(var);
    }
    std::env::remove_var("NEST_OAUTH_URL");
    std::env::remove_var("NEST_SDM_URL");
}

#[test]
#[serial]
fn loads_credentials_and_default_endpoints() {
    clear_all();
    set_all_credentials();

    let config = Config::from_env().unwrap();

    assert_eq!(config.credentials.project_id, "proj-1");
    assert_eq!(config.credentials.refresh_token, "refresh-1");
    assert_eq!(
        config.endpoints.oauth_url,
        "https://www.googleapis.com/oauth2/v4/token"
    );
    assert_eq!(
        config.endpoints.sdm_url,
        "https://smartdevicemanagement.googleapis.com/v1"
    );

    clear_all();
}

#[test]
#[serial]
fn endpoint_env_vars_override_defaults() {
    clear_all();
    set_all_credentials();
    std::env::set_var("NEST_OAUTH_URL", "http://localhost:1234/token");
    std::env::set_var("NEST_SDM_URL", "http://localhost:1234");

    let config = Config::from_env().unwrap();

    assert_eq!(config.endpoints.oauth_url, "http://localhost:1234/token");
    assert_eq!(config.endpoints.sdm_url, "http://localhost:1234");

    clear_all();
}

#[test]
#[serial]
fn missing_credential_is_a_config_error() {
    clear_all();
    set_all_credentials();
    std::env::remove_var("REFRESH_TOKEN");

    let err = Config::from_env().unwrap_err();

    match err {
        AppError::Config(msg) => assert!(msg.contains("REFRESH_TOKEN"), "message was: {}", msg),
        other => panic!("expected Config error, got: {}", other),
    }

    clear_all();
}

#[test]
#[serial]
fn empty_credential_is_a_config_error() {
    clear_all();
    set_all_credentials();
    std::env::set_var("CLIENT_SECRET", "");

    let err = Config::from_env().unwrap_err();

    match err {
        AppError::Config(msg) => assert!(msg.contains("CLIENT_SECRET"), "message was: {}", msg),
        other => panic!("expected Config error, got: {}", other),
    }

    clear_all();
}
