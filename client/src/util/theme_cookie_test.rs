#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_is_absent_outside_browser() {
    assert_eq!(read(), None);
    assert_eq!(cookie_header(), None);
}

#[test]
fn write_is_noop_outside_browser() {
    write(ThemeMode::Dark);
    write(ThemeMode::Light);
    assert_eq!(read(), None);
}

#[test]
fn browser_cookies_delegate_to_module_functions() {
    let cookies = BrowserCookies;
    cookies.write(ThemeMode::Dark);
    assert_eq!(cookies.read(), None);
}
