//! Top navigation shared by every page.

use leptos::prelude::*;

use crate::config::AUTH_CONFIG;
use crate::net::types::Condition;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href=AUTH_CONFIG.routes.home>"Autos"</a>
            <nav class="site-header__nav">
                <a href=Condition::New.path()>"0km"</a>
                <a href=Condition::Used.path()>"Usados"</a>
                <a href=AUTH_CONFIG.routes.dashboard>"Admin"</a>
            </nav>
        </header>
    }
}
