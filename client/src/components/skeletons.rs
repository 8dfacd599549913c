//! Route-level loading placeholders, used as `Suspense` fallbacks.
//!
//! Static markup only; the shapes mirror the layout each page settles into.

use leptos::prelude::*;

const LISTING_PLACEHOLDER_CARDS: usize = 6;
const ADMIN_PLACEHOLDER_ROWS: usize = 5;

#[component]
pub fn HomeSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--home" aria-busy="true">
            <div class="skeleton__hero"></div>
            <div class="skeleton__grid">
                {(0..3).map(|_| view! { <CardSkeleton/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ListingSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--listing" aria-busy="true">
            <div class="skeleton__line skeleton__line--title"></div>
            <div class="skeleton__grid">
                {(0..LISTING_PLACEHOLDER_CARDS).map(|_| view! { <CardSkeleton/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn DetailSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--detail" aria-busy="true">
            <div class="skeleton__gallery"></div>
            <div class="skeleton__specs">
                <div class="skeleton__line skeleton__line--title"></div>
                <div class="skeleton__line"></div>
                <div class="skeleton__line"></div>
                <div class="skeleton__line skeleton__line--short"></div>
            </div>
        </div>
    }
}

#[component]
pub fn AdminSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--admin" aria-busy="true">
            <div class="skeleton__line skeleton__line--title"></div>
            <div class="skeleton__table">
                {(0..ADMIN_PLACEHOLDER_ROWS)
                    .map(|_| view! { <div class="skeleton__row"></div> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton__card">
            <div class="skeleton__image"></div>
            <div class="skeleton__line"></div>
            <div class="skeleton__line skeleton__line--short"></div>
        </div>
    }
}
