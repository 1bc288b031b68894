//! Favorites page backed by the persisted favorites store.

use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::state::favorites::FavoritesState;

/// Number of skeleton cards shown while persisted favorites load.
const SKELETON_CARDS: usize = 4;

/// Favorites page.
///
/// Rendering is hydration-gated: until the store has restored persisted
/// state the page shows neutral skeleton cards, so the first client render
/// matches the server output instead of flashing "no favorites yet".
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites_store = expect_context::<RwSignal<FavoritesState>>();

    view! {
        <section class="favorites-page">
            <h1 class="favorites-page__title">"Favorites"</h1>
            {move || {
                let state = favorites_store.get();
                if !state.hydrated {
                    view! {
                        <div class="card-grid">
                            {(0..SKELETON_CARDS)
                                .map(|_| view! { <div class="car-card car-card--skeleton"></div> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                } else if state.favorites.is_empty() {
                    view! {
                        <p class="favorites-page__empty">
                            "You have no favorite cars yet. Browse the catalog and tap the heart to save one."
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {state
                                .favorites
                                .into_iter()
                                .map(|c| view! { <CarCard car=c/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
