//! Marketplace page: browse professionals and book one.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `MarketplaceState` signal for the route. The list is fetched once
//! on mount; bookings are submitted from the modal and their outcome is shown
//! in a blocking alert, after which the modal closes whatever happened.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::booking_modal::BookingModal;
use crate::components::professional_card::{CardModel, professional_cards};
use crate::components::professional_detail::ProfessionalDetail;
use crate::components::professional_list::ProfessionalList;
use crate::config::ClientConfig;
use crate::net::api::login_url;
use crate::net::types::{Professional, RecordId};
use crate::state::auth::AuthState;
use crate::state::booking::BookingForm;
use crate::state::marketplace::{BookNowOutcome, MarketplaceState, View};
use crate::util::browser;

/// Owned projection of `View` that only changes when the screen does.
#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Loading,
    Error(String),
    List(Vec<CardModel>),
    Detail(Professional),
}

impl From<View<'_>> for Screen {
    fn from(view: View<'_>) -> Self {
        match view {
            View::Loading => Self::Loading,
            View::Error(message) => Self::Error(message.to_owned()),
            View::List(list) => Self::List(professional_cards(list)),
            View::Detail { professional, .. } => Self::Detail(professional.clone()),
        }
    }
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let market = RwSignal::new(MarketplaceState::default());
    let screen = Memo::new(move |_| market.with(|m| Screen::from(m.view())));

    #[cfg(feature = "csr")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_professionals(&config).await;
            market.update(|m| m.on_loaded(result));
        });
    }

    let on_select = Callback::new(move |id: RecordId| {
        market.update(|m| {
            m.select(&id);
        });
    });
    let on_back = Callback::new(move |()| market.update(MarketplaceState::back));
    let on_cancel = Callback::new(move |()| market.update(MarketplaceState::cancel));

    let on_book_now = {
        let config = config.clone();
        Callback::new(move |()| {
            let user = auth.get_untracked().user;
            let login = login_url(&config, &browser::current_href());
            let outcome = market.try_update(|m| m.book_now(user.as_ref(), &login));
            if let Some(BookNowOutcome::RedirectToLogin(url)) = outcome {
                log::info!("sign-in required to book");
                browser::redirect(&url);
            }
        })
    };

    let on_confirm = Callback::new(move |form: BookingForm| {
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        let Some(request) =
            market.with_untracked(|m| m.selected_professional().map(|p| form.into_request(p, &user)))
        else {
            return;
        };
        if !market.try_update(MarketplaceState::begin_submit).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_booking(&config, &request).await;
                match &result {
                    Ok(_) => log::info!("booking created for professional {}", request.professional_id),
                    Err(e) => log::warn!("booking failed: {e}"),
                }
                browser::alert(&crate::state::booking::booking_outcome_message(&result));
                market.update(MarketplaceState::finish_submit);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            market.update(MarketplaceState::finish_submit);
        }
    });

    let submitting = Signal::derive(move || market.with(|m| m.submitting));
    let modal_open = move || market.with(|m| m.modal_open);

    view! {
        <main class="marketplace">
            {move || match screen.get() {
                Screen::Loading => view! { <p class="marketplace__loading">"Loading professionals…"</p> }.into_any(),
                Screen::Error(message) => {
                    view! {
                        <div class="marketplace__error" role="alert">
                            <h2>"Something went wrong"</h2>
                            <p>{message}</p>
                        </div>
                    }
                        .into_any()
                }
                Screen::List(cards) => view! { <ProfessionalList cards=cards on_select=on_select /> }.into_any(),
                Screen::Detail(professional) => {
                    let name = professional.full_name();
                    view! {
                        <ProfessionalDetail professional=professional on_back=on_back on_book_now=on_book_now />
                        <Show when=modal_open>
                            <BookingModal
                                professional_name=name.clone()
                                submitting=submitting
                                on_confirm=on_confirm
                                on_cancel=on_cancel
                            />
                        </Show>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}
