//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_params_map,
};

use crate::components::{header::Header, reconnecting_loader::ReconnectingLoader};
use crate::config::ClientConfig;
use crate::pages::{dashboard::DashboardPage, home::HomePage};
use crate::state::{auth::AuthStore, connection::ConnectionStatus};
use crate::util::env::is_tenant_segment;

const NOT_FOUND: &str = "Page not found.";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store and connection status, mounts the header and the
/// reconnect indicator, and routes both plain and tenant-prefixed paths.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthStore::new(ClientConfig::from_build_env());
    auth.initialize();
    let connection = RwSignal::new(ConnectionStatus::default());

    provide_context(auth);
    provide_context(connection);

    view! {
        <Stylesheet id="leptos" href="/pkg/optrade.css"/>
        <Title text="Option Trading"/>

        <Router>
            <Header/>
            <Show when=move || connection.get().shows_reconnect_loader()>
                <ReconnectingLoader/>
            </Show>
            <main class="app-main">
                <AppRoutes/>
            </main>
        </Router>
    }
}

/// Plain and tenant-prefixed routes. Must be mounted inside a `Router`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| NOT_FOUND.into_view()>
            <Route path=StaticSegment("") view=HomePage/>
            <Route path=StaticSegment("dashboard") view=DashboardPage/>
            <Route
                path=ParamSegment("tenant")
                view=|| view! { <TenantScoped><HomePage/></TenantScoped> }
            />
            <Route
                path=(ParamSegment("tenant"), StaticSegment("dashboard"))
                view=|| view! { <TenantScoped><DashboardPage/></TenantScoped> }
            />
        </Routes>
    }
}

/// Renders `children` only when the `:tenant` param is a tenant segment;
/// any other leading segment falls through to the not-found text.
#[component]
fn TenantScoped(children: ChildrenFn) -> impl IntoView {
    let params = use_params_map();
    let is_tenant = move || params.with(|p| p.get("tenant").is_some_and(|t| is_tenant_segment(&t)));

    view! {
        <Show when=is_tenant fallback=|| NOT_FOUND>
            {children()}
        </Show>
    }
}
