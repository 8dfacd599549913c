//! Dismissible status message.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

/// Visual style of an [`Alert`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "alert alert--info",
            Self::Success => "alert alert--success",
            Self::Warning => "alert alert--warning",
            Self::Error => "alert alert--error",
        }
    }

    /// Errors interrupt assistive tech; everything else is announced politely.
    pub fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Info | Self::Success | Self::Warning => "status",
        }
    }
}

/// Message box. Shows a close button only when `on_dismiss` is supplied.
#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional, into)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=variant.class() role=variant.role()>
            <div class="alert__body">{children()}</div>
            {on_dismiss.map(|on_dismiss| {
                view! {
                    <button
                        class="alert__dismiss"
                        type="button"
                        aria-label="Cerrar"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "×"
                    </button>
                }
            })}
        </div>
    }
}
