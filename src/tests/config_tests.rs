use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k: &str| map.get(k).cloned()
}

#[test]
fn defaults_point_at_local_dev_server() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url, "http://localhost:8000");
    assert_eq!(cfg.request_timeout_secs, None);
    assert_eq!(cfg.endpoint_url(), "http://localhost:8000/api/generate-questions");
}

#[test]
fn endpoint_url_tolerates_trailing_slash() {
    let cfg = ClientConfig {
        base_url: "https://prep.example.com/".into(),
        ..ClientConfig::default()
    };
    assert_eq!(cfg.endpoint_url(), "https://prep.example.com/api/generate-questions");
}

#[test]
fn partial_toml_keeps_defaults_for_missing_keys() {
    let cfg = parse_config("base_url = \"https://prep.example.com\"\nrequest_timeout_secs = 30\n")
        .expect("parse config");
    assert_eq!(cfg.base_url, "https://prep.example.com");
    assert_eq!(cfg.endpoint_path, DEFAULT_ENDPOINT_PATH);
    assert_eq!(cfg.request_timeout_secs, Some(30));
}

#[test]
fn invalid_toml_is_an_error() {
    assert!(parse_config("base_url = [").is_err());
}

#[test]
fn env_overrides_base_url_and_timeout() {
    let mut cfg = ClientConfig::default();
    cfg.apply_env(lookup(&[
        ("INTERVIEW_API_URL", " https://api.example.com "),
        ("INTERVIEW_API_TIMEOUT_SECS", "45"),
    ]));
    assert_eq!(cfg.base_url, "https://api.example.com");
    assert_eq!(cfg.request_timeout_secs, Some(45));
}

#[test]
fn bad_or_zero_timeout_env_is_handled() {
    let mut cfg = ClientConfig {
        request_timeout_secs: Some(10),
        ..ClientConfig::default()
    };
    cfg.apply_env(lookup(&[("INTERVIEW_API_TIMEOUT_SECS", "soon")]));
    assert_eq!(cfg.request_timeout_secs, Some(10));

    cfg.apply_env(lookup(&[("INTERVIEW_API_TIMEOUT_SECS", "0")]));
    assert_eq!(cfg.request_timeout_secs, None);
}

#[test]
fn empty_url_env_is_ignored() {
    let mut cfg = ClientConfig::default();
    cfg.apply_env(lookup(&[("INTERVIEW_API_URL", "  ")]));
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}
