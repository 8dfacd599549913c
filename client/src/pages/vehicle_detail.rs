//! Vehicle detail page: gallery plus the spec sheet.

#[cfg(test)]
#[path = "vehicle_detail_test.rs"]
mod vehicle_detail_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use serde_json::Value;

use crate::components::alert::{Alert, AlertVariant};
use crate::components::skeletons::DetailSkeleton;
use crate::net::api;
use crate::net::types::Condition;
use crate::util::admin_rows::{AdminRow, resolve_string, to_admin_row};
use crate::util::format::{format_km, format_price};
use crate::util::images::image_urls;

/// Optional spec-sheet rows: label and candidate keys.
const SPEC_FIELDS: [(&str, &[&str]); 4] = [
    ("Combustible", &["combustible", "fuel"]),
    ("Transmisión", &["transmision", "transmisión", "transmission"]),
    ("Color", &["color"]),
    ("Puertas", &["puertas", "doors"]),
];

/// Label/value pairs for the spec sheet, skipping blanks.
pub fn spec_sheet(row: &AdminRow, condition: Condition) -> Vec<(&'static str, String)> {
    let mut specs = Vec::new();
    if !row.anio.is_empty() {
        specs.push(("Año", row.anio.clone()));
    }
    if condition == Condition::Used {
        specs.push(("Kilometraje", format_km(row.kilometraje)));
    }
    for (label, keys) in SPEC_FIELDS {
        let value = resolve_string(&row.original, keys);
        if !value.is_empty() {
            specs.push((label, value));
        }
    }
    specs
}

#[component]
pub fn VehicleDetailPage(condition: Condition) -> impl IntoView {
    let params = use_params_map();
    let vehicle = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        api::fetch_vehicle(id)
    });

    view! {
        <section class="detail-page">
            <a class="detail-page__back" href=condition.path()>"← Volver"</a>
            <Suspense fallback=move || view! { <DetailSkeleton/> }>
                {move || {
                    vehicle
                        .get()
                        .map(|result| match result {
                            Ok(record) => view! { <VehicleDetail record=record condition=condition/> }.into_any(),
                            Err(e) => {
                                view! { <Alert variant=AlertVariant::Error>{e.user_message()}</Alert> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn VehicleDetail(record: Value, condition: Condition) -> impl IntoView {
    let row = to_admin_row(&record);
    let images = image_urls(&record);
    let description = resolve_string(&record, &["descripcion", "descripción", "description"]);
    let specs = spec_sheet(&row, condition);
    let title = row.title();

    view! {
        <Title text=format!("{title} | Autos")/>
        <article class="vehicle-detail">
            <Gallery images=images alt=title.clone()/>
            <div class="vehicle-detail__info">
                <h1>{title}</h1>
                <p class="vehicle-detail__price">{format_price(row.precio)}</p>
                <dl class="vehicle-detail__specs">
                    {specs
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view()}
                </dl>
                {(!description.is_empty())
                    .then(|| view! { <p class="vehicle-detail__description">{description}</p> })}
            </div>
        </article>
    }
}

#[component]
fn Gallery(images: Vec<String>, alt: String) -> impl IntoView {
    if images.is_empty() {
        return view! { <div class="gallery gallery--empty">"Sin fotos"</div> }.into_any();
    }
    let selected = RwSignal::new(0_usize);
    let main_images = images.clone();
    let main_src = move || main_images.get(selected.get()).cloned().unwrap_or_default();
    let thumbs = (images.len() > 1).then(|| {
        images
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, src)| {
                view! {
                    <button
                        type="button"
                        class="gallery__thumb"
                        class:gallery__thumb--active=move || selected.get() == i
                        on:click=move |_| selected.set(i)
                    >
                        <img src=src loading="lazy" alt=""/>
                    </button>
                }
            })
            .collect_view()
    });

    view! {
        <div class="gallery">
            <img class="gallery__main" src=main_src alt=alt/>
            {thumbs.map(|thumbs| view! { <div class="gallery__thumbs">{thumbs}</div> })}
        </div>
    }
    .into_any()
}
