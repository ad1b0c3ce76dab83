//! One professional in the marketplace grid.
//!
//! `professional_cards` maps records to display-ready models so the list
//! renderer holds no formatting logic.

#[cfg(test)]
#[path = "professional_card_test.rs"]
mod professional_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{Professional, RecordId};
use crate::util::format::{format_rating, initials, verification_label};

/// Display-ready projection of a [`Professional`].
#[derive(Clone, Debug, PartialEq)]
pub struct CardModel {
    /// Record id; also the key for keyed list rendering.
    pub id: RecordId,
    pub name: String,
    pub service_type: String,
    pub rating: String,
    pub verified: bool,
    pub verified_label: &'static str,
    pub picture_url: Option<String>,
    /// Placeholder text when there is no picture.
    pub initials: String,
}

impl From<&Professional> for CardModel {
    fn from(p: &Professional) -> Self {
        Self {
            id: p.id.clone(),
            name: p.full_name(),
            service_type: p.service_type.clone(),
            rating: format_rating(p.rating),
            verified: p.is_verified,
            verified_label: verification_label(p.is_verified),
            picture_url: p.profile_picture_url.clone().filter(|u| !u.trim().is_empty()),
            initials: initials(&p.first_name, &p.last_name),
        }
    }
}

/// One card per record, in backend order.
#[must_use]
pub fn professional_cards(professionals: &[Professional]) -> Vec<CardModel> {
    professionals.iter().map(CardModel::from).collect()
}

/// Avatar image, or initials when there is no picture.
#[component]
pub fn Avatar(picture_url: Option<String>, initials: String, #[prop(into)] alt: String) -> impl IntoView {
    match picture_url {
        Some(src) => view! { <img class="avatar" src=src alt=alt /> }.into_any(),
        None => view! { <div class="avatar avatar--initials" aria-label=alt>{initials}</div> }.into_any(),
    }
}

/// Clickable summary card.
#[component]
pub fn ProfessionalCard(card: CardModel, #[prop(into)] on_select: Callback<RecordId>) -> impl IntoView {
    let id = card.id.clone();
    view! {
        <button class="pro-card" on:click=move |_| on_select.run(id.clone())>
            <Avatar picture_url=card.picture_url initials=card.initials alt=card.name.clone() />
            <div class="pro-card__body">
                <span class="pro-card__name">{card.name}</span>
                <span class="pro-card__service">{card.service_type}</span>
                <span class="pro-card__rating">"★ " {card.rating}</span>
                <span class="pro-card__badge" class:pro-card__badge--verified=card.verified>
                    {card.verified_label}
                </span>
            </div>
        </button>
    }
}
