//! Public listing of new or used vehicles.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::alert::{Alert, AlertVariant};
use crate::components::skeletons::ListingSkeleton;
use crate::components::vehicle_card::VehicleGrid;
use crate::net::api;
use crate::net::types::Condition;
use crate::util::admin_rows::to_admin_rows;

#[component]
pub fn VehicleListPage(condition: Condition) -> impl IntoView {
    let vehicles = LocalResource::new(move || api::fetch_vehicles(condition));

    view! {
        <Title text=format!("{} | Autos", condition.title())/>
        <section class="listing-page">
            <h1>{condition.title()}</h1>
            <Suspense fallback=move || view! { <ListingSkeleton/> }>
                {move || {
                    vehicles
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! { <VehicleGrid rows=to_admin_rows(&list) condition=condition/> }.into_any()
                            }
                            Err(e) => {
                                view! { <Alert variant=AlertVariant::Error>{e.user_message()}</Alert> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
