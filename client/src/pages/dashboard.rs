//! Dashboard route for signed-in traders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable by URL even when signed out, so the page renders its own
//! sign-in prompt instead of redirecting.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::auth::{AuthActions, AuthState, AuthStore};
use crate::util::env::is_logged;

/// Which body the dashboard shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    /// Auth still initializing; render nothing.
    Pending,
    SignInPrompt,
    Overview,
}

pub fn dashboard_view(state: &AuthState) -> DashboardView {
    if state.is_initializing {
        DashboardView::Pending
    } else if is_logged(state) {
        DashboardView::Overview
    } else {
        DashboardView::SignInPrompt
    }
}

/// Dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let body = Memo::new(move |_| dashboard_view(&auth.state().get()));

    move || match body.get() {
        DashboardView::Pending => ().into_any(),
        DashboardView::SignInPrompt => view! {
            <section class="dashboard dashboard--guest">
                <h1>"Dashboard"</h1>
                <p>"Log in to see your balance and open contracts."</p>
                <button class="btn btn--primary" on:click=move |_| auth.login()>
                    "Log in"
                </button>
            </section>
        }
        .into_any(),
        DashboardView::Overview => view! {
            <section class="dashboard">
                <h1>"Dashboard"</h1>
                <p>"Your open contracts will appear here."</p>
            </section>
        }
        .into_any(),
    }
}
