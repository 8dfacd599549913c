//! Landing page with a teaser of new stock.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::alert::{Alert, AlertVariant};
use crate::components::skeletons::HomeSkeleton;
use crate::components::vehicle_card::VehicleGrid;
use crate::net::api;
use crate::net::types::Condition;
use crate::util::admin_rows::to_admin_rows;

const FEATURED_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = LocalResource::new(|| api::fetch_vehicles(Condition::New));

    view! {
        <Title text="Autos | Inicio"/>
        <section class="home-hero">
            <h1>"Encontrá tu próximo auto"</h1>
            <div class="home-hero__actions">
                <a class="btn btn--primary" href=Condition::New.path()>"Ver 0km"</a>
                <a class="btn" href=Condition::Used.path()>"Ver usados"</a>
            </div>
        </section>
        <section class="home-featured">
            <h2>"Destacados"</h2>
            <Suspense fallback=move || view! { <HomeSkeleton/> }>
                {move || {
                    featured
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let rows: Vec<_> = to_admin_rows(&list).into_iter().take(FEATURED_COUNT).collect();
                                view! { <VehicleGrid rows=rows condition=Condition::New/> }.into_any()
                            }
                            Err(e) => {
                                view! { <Alert variant=AlertVariant::Warning>{e.user_message()}</Alert> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
