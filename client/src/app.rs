//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_bar::AuthBar;
use crate::config::ClientConfig;
use crate::pages::{marketplace::MarketplacePage, whiteboard::WhiteboardPage};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the client config and session state, starts the one-time session
/// check, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_document();
    let auth = RwSignal::new(AuthState::pending());

    provide_context(config.clone());
    provide_context(auth);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user(&config).await;
        match &user {
            Some(u) => log::info!("signed in as {}", u.name),
            None => log::debug!("no signed-in user"),
        }
        auth.update(|a| a.resolve(user));
    });
    #[cfg(not(feature = "csr"))]
    let _ = config;

    view! {
        <Title text="ServiceHub" />

        <Router>
            <AuthBar />
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MarketplacePage />
                <Route path=StaticSegment("whiteboard") view=WhiteboardPage />
            </Routes>
        </Router>
    }
}
