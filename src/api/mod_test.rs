//! Tests for server configuration.

use super::Config;

#[test]
fn config_default_binds_all_interfaces() {
    let config = Config::default();
    assert_eq!(config.host.to_string(), "0.0.0.0");
    assert_eq!(config.port, 3000);
}
