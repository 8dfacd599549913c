//! Browser-only widgets mounted after hydration.
//!
//! `ClientOnly` flips a flag from an effect. Effects never run during SSR, so
//! the widgets are absent from server HTML and appear only once the app has
//! mounted in the browser.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::analytics_id;

/// Mounts [`Analytics`] and [`ScrollRestoration`] after the first client render.
#[component]
pub fn ClientOnly() -> impl IntoView {
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    view! {
        <Show when=move || mounted.get()>
            <Analytics/>
            <ScrollRestoration/>
        </Show>
    }
}

/// Loads the analytics tag when a measurement id is configured and logs
/// each client-side page view.
#[component]
pub fn Analytics() -> impl IntoView {
    let location = use_location();
    let id = analytics_id();

    Effect::new(move || {
        let path = location.pathname.get();
        if id.is_some() {
            leptos::logging::log!("page_view {path}");
        }
    });

    id.map(|id| {
        let src = format!("https://www.googletagmanager.com/gtag/js?id={id}");
        view! { <script defer=true src=src></script> }
    })
}

/// Scrolls back to the top whenever the path changes.
#[component]
pub fn ScrollRestoration() -> impl IntoView {
    let location = use_location();

    Effect::new(move |prev: Option<String>| {
        let path = location.pathname.get();
        if prev.is_some_and(|prev| prev != path) {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
        }
        path
    });
}
