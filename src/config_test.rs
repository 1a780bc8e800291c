use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = SiteConfig::from_lookup(vars(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.script_max_age_secs, DEFAULT_SCRIPT_MAX_AGE_SECS);
    assert!(cfg.static_dir.ends_with("static"));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = SiteConfig::from_lookup(vars(&[
        ("PORT", "8080"),
        ("STATIC_DIR", "/srv/docs"),
        ("THEME_SCRIPT_MAX_AGE_SECS", " 60 "),
    ]))
    .unwrap();
    assert_eq!(cfg, SiteConfig { port: 8080, static_dir: PathBuf::from("/srv/docs"), script_max_age_secs: 60 });
}

#[test]
fn from_lookup_blank_static_dir_uses_default() {
    let cfg = SiteConfig::from_lookup(vars(&[("STATIC_DIR", "  ")])).unwrap();
    assert!(cfg.static_dir.ends_with("static"));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = SiteConfig::from_lookup(vars(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", ref value } if value == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    assert!(SiteConfig::from_lookup(vars(&[("PORT", "70000")])).is_err());
}

#[test]
fn from_lookup_rejects_negative_max_age() {
    let err = SiteConfig::from_lookup(vars(&[("THEME_SCRIPT_MAX_AGE_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "THEME_SCRIPT_MAX_AGE_SECS", .. }));
}
