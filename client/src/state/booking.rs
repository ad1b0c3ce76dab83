//! Booking form model and outcome text.
//!
//! The modal owns a `BookingForm`; `submission` decides whether pressing
//! confirm sends it. The submission result is turned into the text of the blocking
//! notification by `booking_outcome_message`.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::error::ApiError;
use crate::net::types::{BookingConfirmation, BookingRequest, Professional, User};

/// Reasons the form cannot be submitted yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter the service address.")]
    MissingAddress,
    #[error("Please choose a date and time.")]
    MissingDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub address: String,
    /// Value of a `datetime-local` input, e.g. `2026-10-20T14:30`.
    pub date_time: String,
}

impl BookingForm {
    /// Check that both fields are filled in.
    ///
    /// # Errors
    ///
    /// The first empty (after trimming) field.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.address.trim().is_empty() {
            return Err(FormError::MissingAddress);
        }
        if self.date_time.trim().is_empty() {
            return Err(FormError::MissingDateTime);
        }
        Ok(())
    }

    /// Build the request body for `professional`, booked by `user`.
    #[must_use]
    pub fn into_request(&self, professional: &Professional, user: &User) -> BookingRequest {
        BookingRequest {
            professional_id: professional.id.clone(),
            address: self.address.trim().to_owned(),
            booking_date_time: self.date_time.trim().to_owned(),
            service_type: professional.service_type.clone(),
            customer_id: user.id.clone(),
        }
    }
}

/// What pressing "Confirm booking" should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Hand the form to the confirm handler.
    Submit(BookingForm),
    /// Show the problem inline; nothing is sent.
    Invalid(FormError),
    /// A request is already in flight.
    Busy,
}

/// Decide whether `form` may be submitted.
#[must_use]
pub fn submission(form: BookingForm, submitting: bool) -> Submission {
    if submitting {
        return Submission::Busy;
    }
    match form.validate() {
        Ok(()) => Submission::Submit(form),
        Err(e) => Submission::Invalid(e),
    }
}

/// Text for the notification shown after a submission attempt.
#[must_use]
pub fn booking_outcome_message(result: &Result<BookingConfirmation, ApiError>) -> String {
    match result {
        Ok(confirmation) => match (&confirmation.message, &confirmation.booking_id) {
            (Some(message), _) if !message.trim().is_empty() => message.trim().to_owned(),
            (_, Some(id)) => format!("Booking confirmed (reference {id})."),
            _ => "Booking confirmed!".to_owned(),
        },
        Err(e) => format!("Booking failed: {}", e.user_message()),
    }
}
