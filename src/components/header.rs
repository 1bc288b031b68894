//! Site header with navigation and the favorites count badge.

use leptos::prelude::*;

use crate::state::favorites::FavoritesState;

/// Top navigation bar.
///
/// The favorites badge is hydration-gated: it shows a neutral placeholder
/// until persisted state has loaded, so the first client render matches the
/// server output.
#[component]
pub fn Header() -> impl IntoView {
    let favorites_store = expect_context::<RwSignal<FavoritesState>>();

    view! {
        <header class="site-header">
            <a class="site-header__logo" href="/">
                "Rental"<span class="site-header__logo-accent">"Car"</span>
            </a>
            <nav class="site-header__nav">
                <a href="/">"Home"</a>
                <a href="/catalog">"Catalog"</a>
                <a href="/favorites">
                    "Favorites"
                    <span class="site-header__badge">
                        {move || {
                            let state = favorites_store.get();
                            if state.hydrated {
                                state.count().to_string()
                            } else {
                                "...".to_owned()
                            }
                        }}
                    </span>
                </a>
            </nav>
        </header>
    }
}
