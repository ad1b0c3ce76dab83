//! Display formatting for professional cards and detail views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Rating to one decimal place, or `"N/A"` when absent or zero.
#[must_use]
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r.is_finite() && r > 0.0 => format!("{r:.1}"),
        _ => "N/A".to_owned(),
    }
}

/// Up to two uppercase initials for the picture placeholder.
#[must_use]
pub fn initials(first_name: &str, last_name: &str) -> String {
    [first_name, last_name]
        .iter()
        .filter_map(|part| part.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Badge text for the verification flag.
#[must_use]
pub fn verification_label(is_verified: bool) -> &'static str {
    if is_verified { "Verified" } else { "Not verified" }
}
