use std::cell::Cell;

use super::*;

struct FlagAuth(Cell<bool>);

impl AuthSource for FlagAuth {
    fn is_authenticated(&self) -> bool {
        self.0.get()
    }
}

// =============================================================
// is_browser
// =============================================================

#[test]
fn is_browser_true_with_window() {
    assert!(is_browser(&StaticEnv::at("/")));
}

#[test]
fn is_browser_false_without_window() {
    assert!(!is_browser(&StaticEnv::default()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_env_reports_no_window_off_wasm() {
    assert!(!is_browser(&BrowserEnv));
    assert_eq!(BrowserEnv.pathname(), "");
}

// =============================================================
// is_logged
// =============================================================

#[test]
fn is_logged_mirrors_source_on_each_call() {
    let auth = FlagAuth(Cell::new(false));
    assert!(!is_logged(&auth));
    auth.0.set(true);
    assert!(is_logged(&auth));
    auth.0.set(false);
    assert!(!is_logged(&auth));
}

#[test]
fn is_logged_reads_auth_state_flag() {
    use crate::state::auth::AuthState;
    assert!(is_logged(&AuthState::resolved(true)));
    assert!(!is_logged(&AuthState::initializing()));
}

// =============================================================
// url_base: outside tenant routes
// =============================================================

#[test]
fn url_base_non_tenant_path_is_identity() {
    assert_eq!(url_base("/dashboard", "bar"), "bar");
    assert_eq!(url_base("/dashboard", "/bar"), "/bar");
    assert_eq!(url_base("/", ""), "");
    assert_eq!(url_base("", "x/y"), "x/y");
}

#[test]
fn url_base_requires_prefix_at_start() {
    assert_eq!(url_base("/app/br_abc", "bar"), "bar");
    assert_eq!(url_base("br_abc/foo", "bar"), "bar");
    assert_eq!(url_base("/BR_abc", "bar"), "bar");
    assert_eq!(url_base("/br", "bar"), "bar");
}

#[test]
fn url_base_identity_is_idempotent() {
    for input in ["", "/", "bar", "/bar/baz", "/br_nested", "?q=1"] {
        let once = url_base("/markets", input);
        assert_eq!(url_base("/markets", &once), once);
        assert_eq!(once, input);
    }
}

// =============================================================
// url_base: tenant routes
// =============================================================

#[test]
fn url_base_prefixes_relative_path_with_tenant() {
    assert_eq!(url_base("/br_abc/foo", "bar"), "/br_abc/bar");
}

#[test]
fn url_base_keeps_single_slash_for_absolute_path() {
    assert_eq!(url_base("/br_abc/foo", "/bar"), "/br_abc/bar");
    assert_eq!(url_base("/br_abc/foo/deep", "/dashboard/positions"), "/br_abc/dashboard/positions");
}

#[test]
fn url_base_empty_path_yields_tenant_root() {
    assert_eq!(url_base("/br_xyz", ""), "/br_xyz/");
}

#[test]
fn url_base_bare_tenant_segment() {
    assert_eq!(url_base("/br_x", "bar"), "/br_x/bar");
    assert_eq!(url_base("/br_x/", "bar"), "/br_x/bar");
}

#[test]
fn url_base_prefix_match_is_permissive() {
    assert_eq!(url_base("/br_", "bar"), "/br_/bar");
    assert_eq!(url_base("/br_y", "/"), "/br_y/");
}

#[test]
fn url_base_matches_segment_plus_normalized_path() {
    let pathname = "/br_deriv/trade/options";
    for input in ["", "a", "/a", "a/b", "/a/b/", "//a"] {
        let normalized = if input.starts_with('/') { input.to_owned() } else { format!("/{input}") };
        assert_eq!(url_base(pathname, input), format!("/br_deriv{normalized}"));
    }
}

// =============================================================
// get_url_base
// =============================================================

#[test]
fn get_url_base_reads_environment_location() {
    assert_eq!(get_url_base(&StaticEnv::at("/br_abc/foo"), "bar"), "/br_abc/bar");
    assert_eq!(get_url_base(&StaticEnv::at("/dashboard"), "bar"), "bar");
    assert_eq!(get_url_base(&StaticEnv::at("/br_xyz"), ""), "/br_xyz/");
}

#[test]
fn get_url_base_without_location_is_identity() {
    assert_eq!(get_url_base(&StaticEnv::default(), "/dashboard"), "/dashboard");
}

// =============================================================
// is_tenant_segment
// =============================================================

#[test]
fn is_tenant_segment_matches_url_base_prefix() {
    assert!(is_tenant_segment("br_abc"));
    assert!(is_tenant_segment("br_"));
    assert!(!is_tenant_segment("anything"));
    assert!(!is_tenant_segment("BR_abc"));
    assert!(!is_tenant_segment("dashboard"));
    assert!(!is_tenant_segment(""));
}

#[test]
fn is_tenant_segment_agrees_with_url_base() {
    for segment in ["br_abc", "br_", "bra", "markets", "xbr_"] {
        let pathname = format!("/{segment}/page");
        let prefixed = url_base(&pathname, "x") != "x";
        assert_eq!(is_tenant_segment(segment), prefixed, "{segment}");
    }
}
