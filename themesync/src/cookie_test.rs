use super::*;

// =============================================================
// read_header
// =============================================================

#[test]
fn read_header_empty_is_absent() {
    assert_eq!(read_header(""), None);
    assert_eq!(read_header("   "), None);
}

#[test]
fn read_header_finds_entry_among_others() {
    let header = "_ga=GA1.2.3; wjjw_theme=dark; session=abc";
    assert_eq!(read_header(header), Some(ThemeMode::Dark));
}

#[test]
fn read_header_accepts_first_and_last_positions() {
    assert_eq!(read_header("wjjw_theme=light; other=1"), Some(ThemeMode::Light));
    assert_eq!(read_header("other=1;wjjw_theme=light"), Some(ThemeMode::Light));
}

#[test]
fn read_header_requires_exact_name() {
    assert_eq!(read_header("wjjw_theme2=dark"), None);
    assert_eq!(read_header("xwjjw_theme=dark"), None);
    assert_eq!(read_header("WJJW_THEME=dark"), None);
    assert_eq!(read_header("wjjw_theme2=dark; wjjw_theme=light"), Some(ThemeMode::Light));
}

#[test]
fn read_header_unknown_value_is_absent() {
    assert_eq!(read_header("wjjw_theme=auto"), None);
    assert_eq!(read_header("wjjw_theme="), None);
    assert_eq!(read_header("wjjw_theme=Dark"), None);
}

#[test]
fn read_header_percent_decodes_value() {
    assert_eq!(read_header("wjjw_theme=%64ark"), Some(ThemeMode::Dark));
    assert_eq!(read_header("wjjw_theme=l%69ght"), Some(ThemeMode::Light));
}

#[test]
fn read_header_bad_escape_is_absent() {
    assert_eq!(read_header("wjjw_theme=%ZZ"), None);
    assert_eq!(read_header("wjjw_theme=%FF"), None);
}

#[test]
fn read_header_uses_first_duplicate() {
    assert_eq!(read_header("wjjw_theme=dark; wjjw_theme=light"), Some(ThemeMode::Dark));
    assert_eq!(read_header("wjjw_theme=bogus; wjjw_theme=light"), None);
}

#[test]
fn read_header_ignores_entries_without_equals() {
    assert_eq!(read_header("flag; wjjw_theme=dark"), Some(ThemeMode::Dark));
}

#[test]
fn lookup_reports_unknown_mode() {
    let err = lookup("wjjw_theme=sepia").unwrap_err();
    assert!(matches!(err, CookieError::UnknownMode(ref v) if v == "sepia"));
    assert!(lookup("other=1").expect("lookup").is_none());
}

#[test]
fn read_header_ignores_whitespace_around_value() {
    assert_eq!(read_header("wjjw_theme= dark"), Some(ThemeMode::Dark));
    assert_eq!(read_header("wjjw_theme=light ; other=1"), Some(ThemeMode::Light));
    assert_eq!(read_header("wjjw_theme =dark"), None);
}

// =============================================================
// decode_value
// =============================================================

#[test]
fn decode_value_percent_decodes() {
    assert_eq!(decode_value("%64ark").expect("mode"), ThemeMode::Dark);
    assert_eq!(decode_value("light").expect("mode"), ThemeMode::Light);
}

#[test]
fn decode_value_lenient_escape_is_unknown_mode() {
    let err = decode_value("%ZZ").unwrap_err();
    assert!(matches!(err, CookieError::UnknownMode(ref v) if v == "%ZZ"));
}

#[test]
fn decode_value_invalid_utf8_is_decode_error() {
    assert!(matches!(decode_value("%E9"), Err(CookieError::Decode(_))));
}

// =============================================================
// encode
// =============================================================

#[test]
fn encode_round_trips_every_mode() {
    let scopes = [CookieScope::HostOnly, CookieScope::for_host("docs.williamjwhite.me", DEFAULT_APEX_DOMAIN)];
    for scope in &scopes {
        for mode in ThemeMode::ALL {
            assert_eq!(read_header(&encode(mode, scope)), Some(mode));
        }
    }
}

#[test]
fn encode_twice_reads_back_same_mode() {
    let scope = CookieScope::HostOnly;
    let first = encode(ThemeMode::Dark, &scope);
    let second = encode(ThemeMode::Dark, &scope);
    assert_eq!(first, second);
    assert_eq!(read_header(&second), Some(ThemeMode::Dark));
    assert_eq!(read_header(&second), Some(ThemeMode::Dark));
}

#[test]
fn encode_shared_scope_carries_domain_and_secure() {
    let scope = CookieScope::for_host("williamjwhite.me", DEFAULT_APEX_DOMAIN);
    let raw = encode(ThemeMode::Dark, &scope);
    assert!(raw.starts_with("wjjw_theme=dark"), "{raw}");
    assert!(raw.contains("Domain=williamjwhite.me"), "{raw}");
    assert!(raw.contains("Secure"), "{raw}");
    assert!(raw.contains("Path=/"), "{raw}");
    assert!(raw.contains("Max-Age=31536000"), "{raw}");
    assert!(raw.contains("SameSite=Lax"), "{raw}");
}

#[test]
fn encode_host_only_scope_omits_domain_and_secure() {
    let scope = CookieScope::for_host("localhost", DEFAULT_APEX_DOMAIN);
    let raw = encode(ThemeMode::Light, &scope);
    assert!(raw.starts_with("wjjw_theme=light"), "{raw}");
    assert!(!raw.contains("Domain="), "{raw}");
    assert!(!raw.contains("Secure"), "{raw}");
    assert!(raw.contains("Path=/"), "{raw}");
    assert!(raw.contains("Max-Age=31536000"), "{raw}");
    assert!(raw.contains("SameSite=Lax"), "{raw}");
}

#[test]
fn max_age_is_one_year() {
    assert_eq!(MAX_AGE_SECS, 31_536_000);
}

// =============================================================
// CookieScope
// =============================================================

#[test]
fn scope_apex_and_subdomains_are_shared() {
    for host in ["williamjwhite.me", "docs.williamjwhite.me", "www.williamjwhite.me", "Docs.WilliamJWhite.me", "docs.williamjwhite.me."] {
        let scope = CookieScope::for_host(host, DEFAULT_APEX_DOMAIN);
        assert_eq!(scope.domain(), Some("williamjwhite.me"), "{host}");
        assert!(scope.is_secure(), "{host}");
    }
}

#[test]
fn scope_other_hosts_are_host_only() {
    for host in ["localhost", "127.0.0.1", "evilwilliamjwhite.me", "williamjwhite.me.evil.com", "", "example.com"] {
        let scope = CookieScope::for_host(host, DEFAULT_APEX_DOMAIN);
        assert_eq!(scope, CookieScope::HostOnly, "{host}");
        assert!(!scope.is_secure());
        assert_eq!(scope.domain(), None);
    }
}

#[test]
fn scope_accepts_leading_dot_apex() {
    let scope = CookieScope::for_host("docs.example.com", ".example.com");
    assert_eq!(scope.domain(), Some("example.com"));
}

#[test]
fn scope_empty_apex_is_host_only() {
    assert_eq!(CookieScope::for_host("example.com", ""), CookieScope::HostOnly);
}
