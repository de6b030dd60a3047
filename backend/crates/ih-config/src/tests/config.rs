use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.server.host, eq(crate::DEFAULT_HOST));
    assert_that!(config.database.path, eq(crate::DEFAULT_DATABASE_FILENAME));
    assert_that!(config.auth.jwt_secret, none());
    assert_that!(config.auth.token_ttl_hours, eq(crate::DEFAULT_TOKEN_TTL_HOURS));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [server]
              port = 9000

              [database]
              path = "other.db"

              [auth]
              jwt_secret = "0123456789abcdef0123456789abcdef"
              token_ttl_hours = 8
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.database.path, eq("other.db"));
    assert_that!(config.auth.token_ttl_hours, eq(8));
    assert_that!(config.auth.jwt_secret, some(anything()));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [server]
              port = 9000
          "#,
    )
    .unwrap();
    let _port = EnvGuard::set("IH_SERVER_PORT", "9100");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = oops").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _secret = EnvGuard::set("IH_AUTH_JWT_SECRET", "0123456789abcdef0123456789abcdef");
    let _path = EnvGuard::set("IH_DATABASE_PATH", "/etc/issuehub.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _secret = EnvGuard::set("IH_AUTH_JWT_SECRET", "0123456789abcdef0123456789abcdef");
    let _path = EnvGuard::set("IH_DATABASE_PATH", "../issuehub.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_defaults_when_bind_addr_then_formats_host_and_port() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr(), eq("127.0.0.1:8000"));
}

#[test]
#[serial]
fn given_config_dir_when_database_path_then_joins_relative_path() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join(crate::DEFAULT_DATABASE_FILENAME)));
}
