#![cfg(feature = "ssr")]

use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use super::*;

fn render_loader() -> String {
    Owner::new().with(|| view! { <ReconnectingLoader/> }.to_html())
}

#[test]
fn loader_renders_spinner_label_and_three_dots() {
    let html = render_loader();
    assert!(html.contains("reconnecting-loader__spinner"), "{html}");
    assert!(html.contains("<span>Reconnecting</span>"), "{html}");
    assert_eq!(html.matches("<span>.</span>").count(), 3, "{html}");
}

#[test]
fn loader_markup_is_static() {
    assert_eq!(render_loader(), render_loader());
}
