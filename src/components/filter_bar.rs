//! Catalog filter controls: brand, price cap, and mileage bounds.

use leptos::prelude::*;

use crate::state::filters::CarFilters;

/// Hourly price caps offered by the price select.
pub const PRICE_OPTIONS: [u32; 6] = [30, 40, 50, 60, 70, 80];

/// Filter bar for the catalog page.
///
/// Edits `filters` in place; `on_search` asks the page to run a fresh query
/// from page one.
#[component]
pub fn FilterBar(
    filters: RwSignal<CarFilters>,
    brands: RwSignal<Vec<String>>,
    on_search: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="filter-bar"
            on:submit=move |ev| {
                ev.prevent_default();
                on_search.run(());
            }
        >
            <label class="filter-bar__field">
                "Car brand"
                <select
                    class="filter-bar__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.brand = (!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"Choose a brand"</option>
                    {move || {
                        brands
                            .get()
                            .into_iter()
                            .map(|brand| {
                                let value = brand.clone();
                                view! { <option value=value>{brand}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>

            <label class="filter-bar__field">
                "Price / 1 hour"
                <select
                    class="filter-bar__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.rental_price = (!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"Choose a price"</option>
                    {PRICE_OPTIONS
                        .iter()
                        .map(|price| {
                            view! { <option value=price.to_string()>{format!("To ${price}")}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="filter-bar__field">
                "Car mileage / km"
                <div class="filter-bar__range">
                    <input
                        class="filter-bar__input"
                        type="number"
                        placeholder="From"
                        on:input=move |ev| {
                            filters.update(|f| f.min_mileage = event_target_value(&ev).parse().ok());
                        }
                    />
                    <input
                        class="filter-bar__input"
                        type="number"
                        placeholder="To"
                        on:input=move |ev| {
                            filters.update(|f| f.max_mileage = event_target_value(&ev).parse().ok());
                        }
                    />
                </div>
            </label>

            <button class="btn btn--primary filter-bar__submit" type="submit">
                "Search"
            </button>
        </form>
    }
}
