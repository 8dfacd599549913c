//! Admin dashboard: the full vehicle list behind the auth guard.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::alert::{Alert, AlertVariant};
use crate::components::require_auth::RequireAuth;
use crate::components::skeletons::AdminSkeleton;
use crate::net::api::{self, ApiError};
use crate::state::auth::AuthState;
use crate::util::admin_rows::{AdminRow, to_admin_rows};
use crate::util::auth::{expire_session, sign_out};
use crate::util::format::{format_km, format_price};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <Title text="Dashboard | Admin"/>
        <RequireAuth>
            <AdminDashboard/>
        </RequireAuth>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notice = RwSignal::new(None::<(AlertVariant, String)>);

    let vehicles = LocalResource::new(move || {
        let session = auth.with(|state| state.session.clone());
        async move {
            match session {
                Some(session) => api::fetch_admin_vehicles(session).await,
                None => Err(ApiError::Status { status: 401, message: None }),
            }
        }
    });

    // A rejected token ends the session; the guard then redirects to login.
    Effect::new(move || {
        if vehicles.with(|result| matches!(result, Some(Err(e)) if e.is_unauthorized())) {
            expire_session(auth);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        let Some(session) = auth.with_untracked(|state| state.session.clone()) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_vehicle(session, id).await {
                Ok(()) => {
                    notice.set(Some((AlertVariant::Success, "Vehículo eliminado".to_owned())));
                    vehicles.refetch();
                }
                Err(e) => {
                    leptos::logging::warn!("delete failed: {e}");
                    if e.is_unauthorized() {
                        expire_session(auth);
                    }
                    notice.set(Some((AlertVariant::Error, e.user_message())));
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, id, vehicles);
        }
    });

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <h1>"Vehículos"</h1>
                <button class="btn" on:click=move |_| sign_out(auth)>
                    "Cerrar sesión"
                </button>
            </header>
            {move || {
                notice
                    .get()
                    .map(|(variant, message)| {
                        view! {
                            <Alert variant=variant on_dismiss=Callback::new(move |()| notice.set(None))>
                                {message}
                            </Alert>
                        }
                    })
            }}
            <Suspense fallback=move || view! { <AdminSkeleton/> }>
                {move || {
                    vehicles
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <AdminTable rows=to_admin_rows(&list) on_delete=on_delete/> }.into_any(),
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
fn AdminTable(rows: Vec<AdminRow>, on_delete: Callback<String>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="admin-table__empty">"Todavía no hay vehículos cargados."</p> }.into_any();
    }
    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th></th>
                    <th>"Vehículo"</th>
                    <th>"Año"</th>
                    <th>"Kilometraje"</th>
                    <th>"Precio"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! { <AdminVehicleRow row=row on_delete=on_delete/> })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
fn AdminVehicleRow(row: AdminRow, on_delete: Callback<String>) -> impl IntoView {
    let raw = serde_json::to_string_pretty(&row.original).unwrap_or_default();
    let thumbnail = (!row.first_image_url.is_empty())
        .then(|| view! { <img class="admin-table__thumb" src=row.first_image_url.clone() alt=""/> });
    let id = row.id.clone();
    let deletable = id.is_some();

    view! {
        <tr>
            <td>{thumbnail}</td>
            <td>
                <span class="admin-table__title">{row.title()}</span>
                <details class="admin-table__raw">
                    <summary>"Registro"</summary>
                    <pre>{raw}</pre>
                </details>
            </td>
            <td>{row.anio.clone()}</td>
            <td>{format_km(row.kilometraje)}</td>
            <td>{format_price(row.precio)}</td>
            <td>
                <button
                    class="btn btn--danger"
                    disabled=!deletable
                    on:click=move |_| {
                        if let Some(id) = id.clone() {
                            on_delete.run(id);
                        }
                    }
                >
                    "Eliminar"
                </button>
            </td>
        </tr>
    }
}
