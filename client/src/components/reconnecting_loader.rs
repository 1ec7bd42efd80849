//! Spinner shown while the live connection is being re-established.
//!
//! Purely decorative: no props, no state. The parent decides when it is
//! mounted.

#[cfg(test)]
#[path = "reconnecting_loader_test.rs"]
mod reconnecting_loader_test;

use leptos::prelude::*;

/// Static "Reconnecting..." indicator.
#[component]
pub fn ReconnectingLoader() -> impl IntoView {
    view! {
        <div class="reconnecting-loader" role="status" aria-live="polite">
            <div class="reconnecting-loader__spinner"></div>
            <div class="reconnecting-loader__text">
                <span>"Reconnecting"</span>
                <span class="reconnecting-loader__dots">
                    <span>"."</span>
                    <span>"."</span>
                    <span>"."</span>
                </span>
            </div>
        </div>
    }
}
