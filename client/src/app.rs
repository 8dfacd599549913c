//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::client_only::ClientOnly;
use crate::components::site_header::SiteHeader;
use crate::net::types::Condition;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage, home::HomePage,
    vehicle_detail::VehicleDetailPage, vehicles::VehicleListPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::init_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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
/// Owns the auth state, resolves it from storage after mount, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    init_auth(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/autos.css"/>
        <Title text="Autos"/>

        <Router>
            <SiteHeader/>
            <main class="page">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("nuevos") view=|| view! { <VehicleListPage condition=Condition::New/> }/>
                    <Route
                        path=(StaticSegment("nuevos"), ParamSegment("id"))
                        view=|| view! { <VehicleDetailPage condition=Condition::New/> }
                    />
                    <Route path=StaticSegment("usados") view=|| view! { <VehicleListPage condition=Condition::Used/> }/>
                    <Route
                        path=(StaticSegment("usados"), ParamSegment("id"))
                        view=|| view! { <VehicleDetailPage condition=Condition::Used/> }
                    />
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                </Routes>
            </main>
            <ClientOnly/>
        </Router>
    }
}
