use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_host_and_site_root() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("RAGMINI_SITE_ROOT", "/srv/ragmini/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/ragmini/site")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "  "), ("RAGMINI_SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn rejects_unparseable_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn rejects_out_of_range_port() {
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}
