//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header, pages, and the `is_logged` helper read this state. Only
//! `AuthStore` writes it; components receive a read-only signal and trigger
//! changes through `AuthActions`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::util::env::{BrowserEnv, is_browser};

/// Authentication flags observed by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    /// True until the startup session probe has answered.
    pub is_initializing: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::initializing()
    }
}

impl AuthState {
    pub const fn initializing() -> Self {
        Self { is_authenticated: false, is_initializing: true }
    }

    pub const fn resolved(authenticated: bool) -> Self {
        Self { is_authenticated: authenticated, is_initializing: false }
    }

    pub const fn signed_out() -> Self {
        Self::resolved(false)
    }
}

/// Read access to the authenticated flag.
pub trait AuthSource {
    fn is_authenticated(&self) -> bool;
}

impl AuthSource for AuthState {
    fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

/// Session transitions the UI may request. Completion is asynchronous and
/// lands back in the observed state; callers do not wait on it.
pub trait AuthActions {
    fn login(&self);
    fn logout(&self);
}

/// Owner of the shared `AuthState` signal, provided via context.
#[derive(Clone, Copy, Debug)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    config: ClientConfig,
}

impl AuthStore {
    pub fn new(config: ClientConfig) -> Self {
        Self { state: RwSignal::new(AuthState::default()), config }
    }

    /// Read-only view for components. Reading it inside a reactive closure
    /// subscribes that closure to auth changes.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Probe the auth backend once and settle the initial state.
    ///
    /// Outside a browser the state stays initializing, so server-rendered
    /// markup matches the first hydrated frame.
    pub fn initialize(&self) {
        if !is_browser(&BrowserEnv) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let store = *self;
            leptos::task::spawn_local(async move {
                let active = crate::net::api::fetch_session_active(store.config.session_endpoint).await;
                log::debug!("auth initialized: authenticated={active}");
                store.resolve(active);
            });
        }
    }

    pub fn resolve(&self, authenticated: bool) {
        self.state.set(AuthState::resolved(authenticated));
    }
}

impl AuthSource for AuthStore {
    fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated
    }
}

impl AuthActions for AuthStore {
    fn login(&self) {
        #[cfg(feature = "hydrate")]
        navigate_to(self.config.login_url);
    }

    fn logout(&self) {
        #[cfg(feature = "hydrate")]
        {
            let store = *self;
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::logout(store.config.logout_endpoint).await {
                    log::warn!("logout request failed: {e}");
                }
                store.state.set(AuthState::signed_out());
                let href = crate::util::env::get_url_base(&BrowserEnv, store.config.post_logout_href);
                navigate_to(&href);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        self.state.set(AuthState::signed_out());
    }
}

#[cfg(feature = "hydrate")]
fn navigate_to(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            log::warn!("navigation to {href} failed: {e:?}");
        }
    }
}
