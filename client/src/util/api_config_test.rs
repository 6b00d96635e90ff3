use super::*;

#[test]
fn unset_env_uses_default_backend() {
    assert_eq!(resolve_api_config(None), ApiConfig::default());
}

#[test]
fn configured_env_is_normalized() {
    let config = resolve_api_config(Some("https://rag.example.test/"));
    assert_eq!(config.base_url(), "https://rag.example.test");
}

#[test]
fn invalid_env_falls_back_to_default() {
    assert_eq!(resolve_api_config(Some("not a url")), ApiConfig::default());
}

#[test]
fn env_var_name_is_stable() {
    assert_eq!(API_BASE_ENV, "RAGMINI_API_BASE");
}
