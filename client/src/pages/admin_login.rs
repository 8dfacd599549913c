//! Admin login form.
//!
//! Input is validated locally first; per-field messages are rendered under
//! their inputs and only valid credentials are sent to the API.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertVariant};
use crate::state::auth::AuthState;
use crate::util::auth::{install_signed_in_redirect, use_auth};
use crate::validation::login::{LoginErrors, LoginInput, validate_login};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginErrors::default());
    let submit_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Covers both an existing session and a successful submit.
    install_signed_in_redirect(use_auth(), use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        submit_error.set(None);
        let input = LoginInput { username: username.get_untracked(), password: password.get_untracked() };
        let credentials = match validate_login(&input) {
            Ok(credentials) => {
                field_errors.set(LoginErrors::default());
                credentials
            }
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&credentials).await {
                Ok(session) => crate::util::auth::complete_login(auth, session),
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    submit_error.set(Some(e.login_message()));
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, auth);
            busy.set(false);
        }
    };

    view! {
        <Title text="Ingresar | Admin"/>
        <div class="login-page">
            <form class="login-card" on:submit=on_submit novalidate=true>
                <h1>"Panel de administración"</h1>
                {move || {
                    submit_error
                        .get()
                        .map(|message| {
                            view! {
                                <Alert
                                    variant=AlertVariant::Error
                                    on_dismiss=Callback::new(move |()| submit_error.set(None))
                                >
                                    {message}
                                </Alert>
                            }
                        })
                }}
                <label class="login-field">
                    "Usuario"
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || field_errors.get().username)/>
                </label>
                <label class="login-field">
                    "Contraseña"
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || field_errors.get().password)/>
                </label>
                <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|message| view! { <p class="login-field__error">{message}</p> })
}
