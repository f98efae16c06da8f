use super::*;

// =============================================================================
// parse_backend_url
// =============================================================================

#[test]
fn backend_url_defaults_when_unset_or_blank() {
    assert_eq!(parse_backend_url(None).unwrap(), DEFAULT_BACKEND_URL);
    assert_eq!(parse_backend_url(Some("   ")).unwrap(), DEFAULT_BACKEND_URL);
}

#[test]
fn backend_url_trims_trailing_slashes() {
    assert_eq!(parse_backend_url(Some("https://api.example.test/v1//")).unwrap(), "https://api.example.test/v1");
}

#[test]
fn backend_url_requires_http_scheme() {
    let err = parse_backend_url(Some("ftp://example.test")).unwrap_err();
    assert!(err.to_string().contains("BACKEND_URL must start with"));
}

// =============================================================================
// env_parse: unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_unset_returns_default() {
    assert_eq!(env_parse("__TEST_LM_UNSET_5512__", 42_u16).unwrap(), 42);
}

#[test]
fn env_parse_reads_trimmed_value() {
    let key = "__TEST_LM_PORT_7731__";
    unsafe { std::env::set_var(key, " 8081 ") };
    assert_eq!(env_parse(key, 0_u16).unwrap(), 8081);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_blank_returns_default() {
    let key = "__TEST_LM_BLANK_7732__";
    unsafe { std::env::set_var(key, "") };
    assert_eq!(env_parse(key, 7_u64).unwrap(), 7);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_invalid_value_errors() {
    let key = "__TEST_LM_BAD_7733__";
    unsafe { std::env::set_var(key, "not-a-port") };
    let err = env_parse(key, 0_u16).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { value, .. } if value == "not-a-port"));
    unsafe { std::env::remove_var(key) };
}
