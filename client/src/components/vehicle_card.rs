//! Card for one vehicle in a public listing.

use leptos::prelude::*;

use crate::net::types::Condition;
use crate::util::admin_rows::AdminRow;
use crate::util::format::{format_km, format_price};

#[component]
pub fn VehicleCard(row: AdminRow, condition: Condition) -> impl IntoView {
    let href = row.id.as_deref().map(|id| condition.detail_path(id));
    let title = row.title();
    let subtitle = match (row.anio.is_empty(), condition) {
        (true, _) => String::new(),
        (false, Condition::New) => row.anio.clone(),
        (false, Condition::Used) => format!("{} · {}", row.anio, format_km(row.kilometraje)),
    };
    let image = (!row.first_image_url.is_empty()).then(|| {
        let alt = title.clone();
        view! { <img class="vehicle-card__image" src=row.first_image_url.clone() alt=alt loading="lazy"/> }
    });

    view! {
        <a class="vehicle-card" href=href>
            {image}
            <div class="vehicle-card__body">
                <h3 class="vehicle-card__title">{title}</h3>
                <p class="vehicle-card__subtitle">{subtitle}</p>
                <p class="vehicle-card__price">{format_price(row.precio)}</p>
            </div>
        </a>
    }
}

/// Responsive grid of [`VehicleCard`]s with an empty-state message.
#[component]
pub fn VehicleGrid(rows: Vec<AdminRow>, condition: Condition) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="vehicle-grid__empty">"No hay vehículos disponibles por el momento."</p> }
            .into_any();
    }
    view! {
        <div class="vehicle-grid">
            {rows
                .into_iter()
                .map(|row| view! { <VehicleCard row=row condition=condition/> })
                .collect_view()}
        </div>
    }
    .into_any()
}
