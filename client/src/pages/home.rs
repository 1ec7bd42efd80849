//! Public landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::env::url_base;

/// Landing page with an entry point into the dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    let pathname = use_location().pathname;
    let dashboard_href = move || url_base(&pathname.get(), "dashboard");

    view! {
        <section class="home">
            <h1>"Option Trading"</h1>
            <p class="home__lead">"Rise/fall, touch and digit contracts on synthetic and forex markets."</p>
            <a class="btn btn--primary" href=dashboard_href>
                "Go to dashboard"
            </a>
        </section>
    }
}
