//! Top bar with navigation and the sign-in / sign-out control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visible on every route. Sign-in and sign-out are full-page redirects to the
//! auth provider, which sends the browser back to the current URL.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use crate::config::ClientConfig;
use crate::net::api::{login_url, logout_url};
use crate::state::auth::AuthState;
use crate::util::browser;

#[component]
pub fn AuthBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();

    let sign_in = {
        let config = config.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            browser::redirect(&login_url(&config, &browser::current_href()));
        }
    };
    let sign_out = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        browser::redirect(&logout_url(&config, &browser::current_href()));
    };

    let session = move || {
        let state = auth.get();
        if state.loading {
            return view! { <span class="auth-bar__status">"Checking sign-in…"</span> }.into_any();
        }
        match state.greeting() {
            Some(greeting) => view! {
                <span class="auth-bar__greeting">{greeting}</span>
                <a href="#" class="btn auth-bar__sign-out" on:click=sign_out.clone()>
                    "Sign out"
                </a>
            }
            .into_any(),
            None => view! {
                <a href="#" class="btn btn--primary auth-bar__sign-in" on:click=sign_in.clone()>
                    "Sign in"
                </a>
            }
            .into_any(),
        }
    };

    view! {
        <header class="auth-bar">
            <A href="/" attr:class="auth-bar__brand">"ServiceHub"</A>
            <nav class="auth-bar__nav">
                <A href="/">"Professionals"</A>
                <A href="/whiteboard">"Whiteboard"</A>
            </nav>
            <span class="auth-bar__spacer"></span>
            {session}
        </header>
    }
}
