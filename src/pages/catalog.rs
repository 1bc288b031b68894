//! Catalog page: filterable, paginated car listing.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures surface as an inline message and leave already-loaded
//! cards on screen; they never touch the favorites store.

use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::components::filter_bar::FilterBar;
use crate::net::types::Car;
use crate::state::filters::CarFilters;

/// Cars requested per `GET /cars` page.
pub const PAGE_SIZE: u32 = 12;

/// Catalog page with the filter bar, card grid, and Load More pagination.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let filters = RwSignal::new(CarFilters::default());
    let brands = RwSignal::new(Vec::<String>::new());
    let cars = RwSignal::new(Vec::<Car>::new());
    let page = RwSignal::new(1_u32);
    let total_pages = RwSignal::new(1_u32);
    let loading = RwSignal::new(false);
    let loaded = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load_page = move |requested: u32, append: bool| {
        #[cfg(feature = "hydrate")]
        {
            let active_filters = filters.get_untracked();
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_cars(&active_filters, requested, PAGE_SIZE).await {
                    Ok(batch) => {
                        page.set(batch.page);
                        total_pages.set(batch.total_pages);
                        if append {
                            cars.update(|list| list.extend(batch.cars));
                        } else {
                            cars.set(batch.cars);
                        }
                        loaded.set(true);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (requested, append);
        }
    };

    // First listing page and the brand select load once on the client.
    Effect::new(move || {
        load_page(1, false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_brands().await {
                Ok(list) => brands.set(list),
                Err(err) => log::warn!("brand list unavailable: {err}"),
            }
        });
    });

    let on_search = Callback::new(move |()| load_page(1, false));
    let has_more = move || page.get() < total_pages.get();

    view! {
        <section class="catalog-page">
            <FilterBar filters=filters brands=brands on_search=on_search/>

            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="catalog-page__error">{message}</p> })
            }}

            <div class="card-grid">
                {move || {
                    cars.get()
                        .into_iter()
                        .map(|c| view! { <CarCard car=c/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            {move || {
                (loading.get() && cars.with(Vec::is_empty))
                    .then(|| view! { <p class="catalog-page__loading">"Loading cars..."</p> })
            }}

            {move || {
                (loaded.get() && !loading.get() && cars.with(Vec::is_empty))
                    .then(|| {
                        view! { <p class="catalog-page__empty">"No cars match your filters."</p> }
                    })
            }}

            <Show when=move || has_more() && !loading.get()>
                <button
                    class="btn btn--secondary catalog-page__more"
                    on:click=move |_| load_page(page.get_untracked() + 1, true)
                >
                    "Load more"
                </button>
            </Show>
        </section>
    }
}
