//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    browse::BrowsePage, home::HomePage, my_rentals::MyRentalsPage, profile::ProfilePage,
    top_rentals::TopRentalsPage, wishlist::WishlistPage,
};
use crate::state::{auth::AuthState, toast::ToastState, ui::UiState};
use crate::util::wishlist_sync::new_shared_wishlist;

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
/// Provides session, UI chrome, toast, and wishlist contexts, resolves the
/// session once after hydration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);
    provide_context(new_shared_wishlist());

    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_session().await;
            auth.set(AuthState::resolved(user));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/marquee.css"/>
        <Title text="Marquee"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("browse") view=BrowsePage/>
                    <Route path=StaticSegment("top-rentals") view=TopRentalsPage/>
                    <Route path=StaticSegment("my-rentals") view=MyRentalsPage/>
                    <Route path=StaticSegment("wishlist") view=WishlistPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
