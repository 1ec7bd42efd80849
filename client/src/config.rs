//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so auth
//! backend locations are baked in with `option_env!` and fall back to
//! same-origin defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_URL: &str = "/auth/login";
pub const DEFAULT_SESSION_ENDPOINT: &str = "/api/auth/session";
pub const DEFAULT_LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const DEFAULT_POST_LOGOUT_HREF: &str = "/";

/// Locations of the external authentication backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Page the browser is sent to when the user asks to log in.
    pub login_url: &'static str,
    /// Probed once at startup; any 2xx response means a live session.
    pub session_endpoint: &'static str,
    /// Receives a `POST` when the user logs out.
    pub logout_endpoint: &'static str,
    /// Where to land after logout. Tenant-prefixed before navigating.
    pub post_logout_href: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL,
            session_endpoint: DEFAULT_SESSION_ENDPOINT,
            logout_endpoint: DEFAULT_LOGOUT_ENDPOINT,
            post_logout_href: DEFAULT_POST_LOGOUT_HREF,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `OPTRADE_LOGIN_URL`
    /// - `OPTRADE_SESSION_ENDPOINT`
    /// - `OPTRADE_LOGOUT_ENDPOINT`
    /// - `OPTRADE_POST_LOGOUT_HREF`
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("OPTRADE_LOGIN_URL"),
            option_env!("OPTRADE_SESSION_ENDPOINT"),
            option_env!("OPTRADE_LOGOUT_ENDPOINT"),
            option_env!("OPTRADE_POST_LOGOUT_HREF"),
        )
    }

    fn from_overrides(
        login_url: Option<&'static str>,
        session_endpoint: Option<&'static str>,
        logout_endpoint: Option<&'static str>,
        post_logout_href: Option<&'static str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            login_url: non_blank(login_url).unwrap_or(defaults.login_url),
            session_endpoint: non_blank(session_endpoint).unwrap_or(defaults.session_endpoint),
            logout_endpoint: non_blank(logout_endpoint).unwrap_or(defaults.logout_endpoint),
            post_logout_href: non_blank(post_logout_href).unwrap_or(defaults.post_logout_href),
        }
    }
}

fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
