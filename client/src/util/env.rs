//! Execution-environment and tenant base-path helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links rendered under a tenant route (`/br_<code>/...`) must stay under
//! that tenant. Link builders resolve their targets through `url_base`,
//! which leaves paths untouched everywhere else.
//!
//! Browser globals are reached through `Environment` so the rules can be
//! exercised on the server and in unit tests.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use crate::state::auth::AuthSource;

/// Leading pattern of a tenant-scoped location path.
pub const TENANT_PREFIX: &str = "/br_";

/// Ambient facts about where the code is running.
pub trait Environment {
    /// Whether a `window` global exists.
    fn has_window(&self) -> bool;
    /// Path component of the current location. Empty when there is none.
    fn pathname(&self) -> String;
}

/// The real browser, via `web-sys`. Reports no window when compiled
/// without the `hydrate` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEnv;

impl Environment for BrowserEnv {
    fn has_window(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn pathname(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .map(|w| w.location().pathname().unwrap_or_default())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }
}

/// Fixed environment, for exercising the helpers without a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticEnv {
    pub window: bool,
    pub pathname: String,
}

impl StaticEnv {
    /// A browser-like environment located at `pathname`.
    pub fn at(pathname: &str) -> Self {
        Self { window: true, pathname: pathname.to_owned() }
    }
}

impl Environment for StaticEnv {
    fn has_window(&self) -> bool {
        self.window
    }

    fn pathname(&self) -> String {
        self.pathname.clone()
    }
}

/// True when running with a `window` global.
pub fn is_browser(env: &impl Environment) -> bool {
    env.has_window()
}

/// Current authenticated flag, read live from `auth`.
pub fn is_logged(auth: &impl AuthSource) -> bool {
    auth.is_authenticated()
}

/// True when `segment` (a single path segment, without slashes) names a
/// tenant, i.e. the first segment of a path matching `TENANT_PREFIX`.
pub fn is_tenant_segment(segment: &str) -> bool {
    segment.starts_with(&TENANT_PREFIX[1..])
}

/// Resolve `path` against the tenant segment of the environment's location.
pub fn get_url_base(env: &impl Environment, path: &str) -> String {
    url_base(&env.pathname(), path)
}

/// Tenant base-path rule.
///
/// When `pathname` starts with `/br_`, its first segment is kept and `path`
/// is appended with exactly one `/` between them. Any other `pathname`
/// returns `path` as given. Prefix matching is permissive: `/br_` alone
/// yields the segment `br_`.
pub fn url_base(pathname: &str, path: &str) -> String {
    if !pathname.starts_with(TENANT_PREFIX) {
        return path.to_owned();
    }
    let segment = pathname.split('/').nth(1).unwrap_or_default();
    if path.starts_with('/') {
        format!("/{segment}{path}")
    } else {
        format!("/{segment}/{path}")
    }
}
