use super::*;

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(config.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
}

#[test]
fn explicit_host_and_port() {
    let config = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_values(Some(""), Some("  ")).unwrap();
    assert_eq!(config.addr.port(), DEFAULT_PORT);
}

#[test]
fn invalid_port_is_reported_with_value() {
    let err = ServerConfig::from_values(None, Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_values(None, Some("70000")).is_err());
}

#[test]
fn invalid_host_is_rejected() {
    let err = ServerConfig::from_values(Some("not a host"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost(_)));
}
