//! Marketplace view state: the list, the selected professional, and the
//! booking modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<MarketplaceState>` drives the marketplace page. Fetch
//! completion and user actions call the transition methods below; renderers
//! read `view()` and never mutate.
//!
//! DESIGN
//! ======
//! ```text
//! Loading ──loaded──▶ Listing ──select──▶ Detail ──book_now──▶ Detail + modal
//!    └──failed──▶ Error          ◀──back──┘        ◀──cancel / submit──┘
//! ```
//! Selection is stored as an id, not an index, so a reload that reorders the
//! list cannot silently switch the selected professional. Going back keeps
//! the loaded list untouched. There is no terminal state.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use crate::error::ApiError;
use crate::net::types::{Professional, RecordId, User};

/// Load phase of the professionals list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Loading,
    Listing,
    /// Initial load failed; carries the user-facing message.
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketplaceState {
    pub phase: Phase,
    pub professionals: Vec<Professional>,
    pub selected: Option<RecordId>,
    pub modal_open: bool,
    /// A booking request is in flight.
    pub submitting: bool,
}

/// What the page should render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    List(&'a [Professional]),
    Detail { professional: &'a Professional, modal_open: bool },
}

/// Result of pressing "Book Now".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookNowOutcome {
    ModalOpened,
    /// No signed-in user; the browser should go to this login URL.
    RedirectToLogin(String),
    /// Nothing selected or the modal is already open.
    Ignored,
}

impl MarketplaceState {
    /// Apply the result of the initial professionals fetch.
    pub fn on_loaded(&mut self, result: Result<Vec<Professional>, ApiError>) {
        match result {
            Ok(list) => {
                log::info!("loaded {} professionals", list.len());
                self.professionals = list;
                self.phase = Phase::Listing;
            }
            Err(e) => {
                log::error!("professionals load failed: {e}");
                self.professionals.clear();
                self.phase = Phase::Error(e.user_message());
            }
        }
        self.selected = None;
        self.modal_open = false;
    }

    /// Show the detail view for `id`. Returns `false` if the list is not
    /// showing or has no such record.
    pub fn select(&mut self, id: &RecordId) -> bool {
        if self.phase != Phase::Listing || !self.professionals.iter().any(|p| &p.id == id) {
            return false;
        }
        self.selected = Some(id.clone());
        self.modal_open = false;
        true
    }

    /// Return to the list.
    pub fn back(&mut self) {
        if self.submitting {
            return;
        }
        self.selected = None;
        self.modal_open = false;
    }

    /// Open the booking modal for the selected professional if `user` is
    /// signed in; otherwise ask for a redirect to `login_url`.
    pub fn book_now(&mut self, user: Option<&User>, login_url: &str) -> BookNowOutcome {
        if self.selected_professional().is_none() || self.modal_open {
            return BookNowOutcome::Ignored;
        }
        if user.is_none() {
            return BookNowOutcome::RedirectToLogin(login_url.to_owned());
        }
        self.modal_open = true;
        BookNowOutcome::ModalOpened
    }

    /// Close the modal without submitting.
    pub fn cancel(&mut self) {
        if !self.submitting {
            self.modal_open = false;
        }
    }

    /// Mark a submission as started. Returns `false` if the modal is not
    /// open or a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if !self.modal_open || self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// End a submission. The modal closes whatever the outcome; the detail
    /// view stays.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
        self.modal_open = false;
    }

    #[must_use]
    pub fn selected_professional(&self) -> Option<&Professional> {
        if self.phase != Phase::Listing {
            return None;
        }
        let id = self.selected.as_ref()?;
        self.professionals.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn view(&self) -> View<'_> {
        match &self.phase {
            Phase::Loading => View::Loading,
            Phase::Error(message) => View::Error(message),
            Phase::Listing => match self.selected_professional() {
                Some(professional) => View::Detail { professional, modal_open: self.modal_open },
                None => View::List(&self.professionals),
            },
        }
    }
}
