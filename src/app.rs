//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{catalog::CatalogPage, favorites::FavoritesPage, home::HomePage};
use crate::state::favorites::{self, FavoritesState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the favorites store context, starts its one-shot hydration, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let favorites_store = RwSignal::new(FavoritesState::default());
    provide_context(favorites_store);

    // One-shot restore of persisted favorites; no-op on the server.
    favorites::spawn_hydration(favorites_store);

    view! {
        <Stylesheet id="leptos" href="/pkg/rentalcar.css"/>
        <Title text="Car Rental"/>
        <Meta name="description" content="Find your perfect car"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("catalog") view=CatalogPage/>
                    <Route path=StaticSegment("favorites") view=FavoritesPage/>
                </Routes>
            </main>
        </Router>
    }
}
