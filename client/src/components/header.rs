//! Top navigation bar with home/dashboard links and the login/logout action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. It hides itself until the auth probe has
//! answered so a signed-in user never sees a "Log in" flash.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::{AuthActions, AuthState, AuthStore};
use crate::util::env::url_base;

pub const HOME_LABEL: &str = "Option Trading";
pub const DASHBOARD_LABEL: &str = "Dashboard";

/// A rendered anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
}

/// The single auth button shown on the right of the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderAction {
    LogIn,
    LogOut,
}

impl HeaderAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::LogIn => "Log in",
            Self::LogOut => "Log out",
        }
    }

    /// Forward the click to the auth collaborator.
    pub fn dispatch(self, auth: &impl AuthActions) {
        match self {
            Self::LogIn => auth.login(),
            Self::LogOut => auth.logout(),
        }
    }
}

/// Everything the header shows once auth has settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderNav {
    pub home: NavLink,
    pub dashboard: Option<NavLink>,
    pub action: HeaderAction,
}

/// Header contents for `state` at location `pathname`, or `None` while
/// auth is still initializing.
pub fn header_nav(state: &AuthState, pathname: &str) -> Option<HeaderNav> {
    if state.is_initializing {
        return None;
    }
    let home = NavLink { href: url_base(pathname, "/"), label: HOME_LABEL };
    let nav = if state.is_authenticated {
        HeaderNav {
            home,
            dashboard: Some(NavLink { href: url_base(pathname, "/dashboard"), label: DASHBOARD_LABEL }),
            action: HeaderAction::LogOut,
        }
    } else {
        HeaderNav { home, dashboard: None, action: HeaderAction::LogIn }
    };
    Some(nav)
}

/// Primary navigation header.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let pathname = use_location().pathname;
    let nav = Memo::new(move |_| header_nav(&auth.state().get(), &pathname.get()));

    move || {
        nav.get().map(move |nav| {
            let action = nav.action;
            view! {
                <nav class="header">
                    <div class="header__left">
                        <a href=nav.home.href class="header__logo">
                            <LogoMark/>
                            {nav.home.label}
                        </a>
                        {nav.dashboard.map(|link| {
                            view! {
                                <a href=link.href class="header__nav-link">
                                    {link.label}
                                </a>
                            }
                        })}
                    </div>
                    <button class="btn btn--primary header__auth" on:click=move |_| action.dispatch(&auth)>
                        {action.label()}
                    </button>
                </nav>
            }
        })
    }
}

#[component]
fn LogoMark() -> impl IntoView {
    view! {
        <svg class="header__logo-mark" width="30" height="30" viewBox="0 0 30 30" aria-hidden="true">
            <circle cx="15" cy="15" r="15" fill="currentColor"></circle>
        </svg>
    }
}
