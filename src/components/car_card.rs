//! Car listing card with a hydration-gated favorite toggle.

#[cfg(test)]
#[path = "car_card_test.rs"]
mod car_card_test;

use leptos::prelude::*;

use crate::net::types::Car;
use crate::state::favorites::{self, FavoritesState};

/// Group digits for display, e.g. `5250` renders as `"5 250 km"`.
#[must_use]
pub fn format_mileage(mileage: u32) -> String {
    let digits = mileage.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i != 0 && remaining % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{grouped} km")
}

/// Tail segments of a rental office address (city, country); the street
/// part is dropped.
#[must_use]
pub fn location_parts(address: &str) -> Vec<String> {
    address
        .split(',')
        .map(str::trim)
        .skip(1)
        .map(ToOwned::to_owned)
        .collect()
}

/// A single car card for catalog and favorites grids.
///
/// The favorite button is hydration-gated: a neutral skeleton takes its
/// place until the store has restored persisted state, so the first client
/// render never shows a wrong active/inactive state.
#[component]
pub fn CarCard(car: Car) -> impl IntoView {
    let favorites_store = expect_context::<RwSignal<FavoritesState>>();

    let alt_text = format!("{} {}", car.make, car.model);
    let meta = {
        let mut parts = location_parts(&car.address);
        parts.push(car.rental_company.clone());
        parts.push(car.car_type.clone());
        parts.push(format_mileage(car.mileage));
        parts.join(" | ")
    };

    let card = car.clone();

    view! {
        <article class="car-card">
            <div class="car-card__media">
                <img class="car-card__img" src=car.img.clone() alt=alt_text/>
                {move || {
                    if favorites_store.with(|state| state.hydrated) {
                        let toggled = card.clone();
                        let id = card.id.clone();
                        view! {
                            <button
                                class="car-card__fav"
                                class:car-card__fav--active=move || {
                                    favorites_store.with(|state| state.is_favorite(&id))
                                }
                                on:click=move |_| {
                                    favorites::toggle_favorite(favorites_store, toggled.clone());
                                }
                                aria-label="Toggle favorite"
                            >
                                "\u{2665}"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! { <div class="car-card__fav car-card__fav--skeleton"></div> }
                            .into_any()
                    }
                }}
            </div>
            <div class="car-card__title-row">
                <h3 class="car-card__title">
                    {car.make.clone()} " "
                    <span class="car-card__model">{car.model.clone()}</span>
                    {format!(", {}", car.year)}
                </h3>
                <span class="car-card__price">{car.rental_price.clone()}</span>
            </div>
            <p class="car-card__meta">{meta}</p>
        </article>
    }
}
