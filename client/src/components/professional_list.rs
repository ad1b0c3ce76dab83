//! Marketplace grid of professional cards.

use leptos::prelude::*;

use crate::components::professional_card::{CardModel, ProfessionalCard};
use crate::net::types::RecordId;

/// One card per record, keyed by record id.
#[component]
pub fn ProfessionalList(cards: Vec<CardModel>, #[prop(into)] on_select: Callback<RecordId>) -> impl IntoView {
    let empty = cards.is_empty();
    view! {
        <section class="pro-list">
            <Show when=move || empty>
                <p class="pro-list__empty">"No professionals are available right now."</p>
            </Show>
            <div class="pro-list__grid">
                <For
                    each=move || cards.clone()
                    key=|card| card.id.clone()
                    children=move |card| view! { <ProfessionalCard card=card on_select=on_select /> }
                />
            </div>
        </section>
    }
}
