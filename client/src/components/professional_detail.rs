//! Detail view for the selected professional.

use leptos::prelude::*;

use crate::components::professional_card::{Avatar, CardModel};
use crate::net::types::Professional;

#[component]
pub fn ProfessionalDetail(
    professional: Professional,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_book_now: Callback<()>,
) -> impl IntoView {
    let card = CardModel::from(&professional);
    view! {
        <article class="pro-detail">
            <button class="btn pro-detail__back" on:click=move |_| on_back.run(())>
                "← Back to list"
            </button>
            <div class="pro-detail__header">
                <Avatar picture_url=card.picture_url initials=card.initials alt=card.name.clone() />
                <div>
                    <h2 class="pro-detail__name">{card.name}</h2>
                    <p class="pro-detail__service">{card.service_type}</p>
                </div>
            </div>
            <dl class="pro-detail__facts">
                <dt>"Rating"</dt>
                <dd>{card.rating}</dd>
                <dt>"Status"</dt>
                <dd class:pro-detail__verified=card.verified>{card.verified_label}</dd>
            </dl>
            <button class="btn btn--primary pro-detail__book" on:click=move |_| on_book_now.run(())>
                "Book Now"
            </button>
        </article>
    }
}
