use super::*;
use crate::net::types::RecordId;

fn plumber() -> Professional {
    Professional {
        id: RecordId::Number(7),
        first_name: "Ana".to_owned(),
        last_name: "Lopez".to_owned(),
        service_type: "Plumbing".to_owned(),
        rating: None,
        is_verified: false,
        profile_picture_url: None,
    }
}

fn form(address: &str, date_time: &str) -> BookingForm {
    BookingForm { address: address.to_owned(), date_time: date_time.to_owned() }
}

// =============================================================
// validate
// =============================================================

#[test]
fn complete_form_is_valid() {
    assert_eq!(form("1 Main St", "2026-10-20T14:30").validate(), Ok(()));
}

#[test]
fn blank_fields_are_rejected() {
    assert_eq!(form("", "2026-10-20T14:30").validate(), Err(FormError::MissingAddress));
    assert_eq!(form("   ", "2026-10-20T14:30").validate(), Err(FormError::MissingAddress));
    assert_eq!(form("1 Main St", " ").validate(), Err(FormError::MissingDateTime));
    assert_eq!(form("", "").validate(), Err(FormError::MissingAddress));
}

// =============================================================
// submission
// =============================================================

#[test]
fn submission_sends_only_complete_idle_forms() {
    let ok = form("12 Elm St", "2026-10-20T14:30");
    assert_eq!(submission(ok.clone(), false), Submission::Submit(ok.clone()));
    assert_eq!(submission(ok, true), Submission::Busy);
}

#[test]
fn submission_with_empty_field_never_submits() {
    assert_eq!(submission(form("", "2026-10-20T14:30"), false), Submission::Invalid(FormError::MissingAddress));
    assert_eq!(submission(form("12 Elm St", "  "), false), Submission::Invalid(FormError::MissingDateTime));
}

// =============================================================
// into_request
// =============================================================

#[test]
fn request_takes_customer_from_user_and_service_from_professional() {
    let user = User { id: "sid-42".to_owned(), name: "Sam".to_owned() };
    let req = form("  1 Main St ", "2026-10-20T14:30").into_request(&plumber(), &user);
    assert_eq!(
        req,
        BookingRequest {
            professional_id: RecordId::Number(7),
            address: "1 Main St".to_owned(),
            booking_date_time: "2026-10-20T14:30".to_owned(),
            service_type: "Plumbing".to_owned(),
            customer_id: "sid-42".to_owned(),
        }
    );
}

// =============================================================
// booking_outcome_message
// =============================================================

#[test]
fn outcome_prefers_backend_message() {
    let ok = Ok(BookingConfirmation { booking_id: Some(RecordId::Number(3)), message: Some("See you Tuesday".to_owned()) });
    assert_eq!(booking_outcome_message(&ok), "See you Tuesday");
}

#[test]
fn outcome_falls_back_to_reference_then_generic() {
    let with_id = Ok(BookingConfirmation { booking_id: Some(RecordId::Number(3)), message: None });
    assert_eq!(booking_outcome_message(&with_id), "Booking confirmed (reference 3).");
    assert_eq!(booking_outcome_message(&Ok(BookingConfirmation::default())), "Booking confirmed!");
}

#[test]
fn outcome_names_failure_reason() {
    let err = Err(ApiError::Validation("That slot is taken".to_owned()));
    assert_eq!(booking_outcome_message(&err), "Booking failed: That slot is taken");
}
