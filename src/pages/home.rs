//! Landing page with the hero banner.

use leptos::prelude::*;

/// Home page; points the visitor at the catalog.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1 class="home-page__title">"Find your perfect rental car"</h1>
            <p class="home-page__subtitle">
                "Reliable and budget-friendly rentals for any journey"
            </p>
            <a class="btn btn--primary home-page__cta" href="/catalog">
                "View Catalog"
            </a>
        </section>
    }
}
