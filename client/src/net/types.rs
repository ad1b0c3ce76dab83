//! Wire DTOs for the REST API and the auth provider.
//!
//! DESIGN
//! ======
//! Field names mirror the backend exactly: professionals arrive in PascalCase,
//! booking bodies go out in camelCase, and the session endpoint uses
//! snake_case. Keeping the renames here lets the rest of the client use plain
//! Rust names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Record identifier as issued by the backend, numeric or textual.
///
/// Sent back verbatim so a numeric id stays numeric on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A service professional as listed by `GET /api/professionals`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Professional {
    #[serde(rename = "ProfessionalID")]
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub service_type: String,
    /// Average rating on a 0–5 scale; absent for unrated professionals.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "bool_from_flag")]
    pub is_verified: bool,
    #[serde(rename = "ProfilePictureURL", default)]
    pub profile_picture_url: Option<String>,
}

impl Professional {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}

/// Body for `POST /api/bookings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub professional_id: RecordId,
    pub address: String,
    /// Local date-time as entered, e.g. `2026-10-20T14:30`.
    pub booking_date_time: String,
    pub service_type: String,
    pub customer_id: String,
}

/// Success body for `POST /api/bookings`. Every field is optional because
/// the client only reports the outcome.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    #[serde(default, alias = "BookingID")]
    pub booking_id: Option<RecordId>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned by the API on rejection.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// One claim from the auth provider's session document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub typ: String,
    pub val: String,
}

/// One entry of the `GET /.auth/me` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    pub user_id: String,
    #[serde(default)]
    pub user_claims: Vec<Claim>,
}

/// Claim types that carry a display name, checked in claim order.
pub const NAME_CLAIMS: [&str; 2] = ["name", "preferred_username"];

/// The signed-in customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque session identifier; used as the booking's customer id.
    pub id: String,
    pub name: String,
}

impl User {
    /// Resolve the user from a session document. The display name is the
    /// first non-empty `name`/`preferred_username` claim, else the raw id.
    #[must_use]
    pub fn from_session(entries: &[SessionEntry]) -> Option<Self> {
        let entry = entries.first()?;
        if entry.user_id.trim().is_empty() {
            return None;
        }
        let name = entry
            .user_claims
            .iter()
            .find(|c| NAME_CLAIMS.contains(&c.typ.as_str()) && !c.val.trim().is_empty())
            .map_or_else(|| entry.user_id.clone(), |c| c.val.clone());
        Some(Self { id: entry.user_id.clone(), name })
    }
}

fn bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
        Null(()),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Number(n) => n != 0,
        Flag::Null(()) => false,
    })
}
