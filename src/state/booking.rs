//! Booking form state: cost computation and client-side validation.
//!
//! DESIGN
//! ======
//! The legacy page kept the selected guide in module-level globals and
//! read the nightly price off `window`; here the booking view owns an
//! explicit [`BookingContext`] seeded by the navigation source, with a
//! fixed default price when none was provided. Validation is pure and
//! takes today's date as a parameter so it stays unit-testable.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use crate::util::date::is_strictly_before;

/// Fallback nightly price when the booking context carries none.
pub const DEFAULT_PRICE_PER_DAY: u32 = 2000;

/// Guide selection carried into the booking view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingContext {
    pub guide_name: Option<String>,
    pub price_per_day: Option<u32>,
}

/// Raw booking form values as entered (selects and inputs are strings
/// until validation).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub tourist_name: String,
    pub phone: String,
    pub email: String,
    pub native_place: String,
    pub arrival_date: String,
    pub days_to_stay: String,
    pub group_size: String,
    pub tour_type: String,
    pub additional_requirements: String,
}

/// Per-field outcome of one validation pass; drives the valid/invalid
/// markers on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingValidation {
    pub tourist_name: bool,
    pub phone: bool,
    pub native_place: bool,
    pub arrival_date: bool,
    pub days_to_stay: bool,
}

impl BookingValidation {
    pub fn all_valid(self) -> bool {
        self.tourist_name && self.phone && self.native_place && self.arrival_date && self.days_to_stay
    }
}

/// Strip everything but digits from a phone value.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// A phone number is valid when exactly 10 digits remain after
/// stripping separators.
pub fn phone_is_valid(raw: &str) -> bool {
    normalize_phone(raw).len() == 10
}

/// Validate the form against the required-field, phone, and
/// arrival-date rules. `today` is the current local calendar date in
/// ISO form; an arrival on `today` itself is acceptable.
pub fn validate(form: &BookingForm, today: &str) -> BookingValidation {
    let arrival = form.arrival_date.trim();
    BookingValidation {
        tourist_name: !form.tourist_name.trim().is_empty(),
        phone: phone_is_valid(&form.phone),
        native_place: !form.native_place.trim().is_empty(),
        arrival_date: !arrival.is_empty() && !is_strictly_before(arrival, today),
        days_to_stay: !form.days_to_stay.trim().is_empty(),
    }
}

/// Parse a days/group-size selector value, defaulting to 1 when absent
/// or non-numeric.
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|n| *n >= 1).unwrap_or(1)
}

/// Total tour cost: days × nightly price. Group size is tracked for
/// display only and deliberately does not enter the total.
pub fn compute_total(days_raw: &str, price_per_day: Option<u32>) -> u32 {
    parse_count(days_raw) * price_per_day.unwrap_or(DEFAULT_PRICE_PER_DAY)
}

/// Rupee display with thousands separators (`6000` → `₹6,000`).
pub fn format_total(total: u32) -> String {
    let digits = total.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}

/// `"1 day"` / `"3 days"` summary label.
pub fn days_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_owned()
    } else {
        format!("{days} days")
    }
}

/// `"1 person"` / `"4 persons"` summary label.
pub fn group_label(group_size: u32) -> String {
    if group_size == 1 {
        "1 person".to_owned()
    } else {
        format!("{group_size} persons")
    }
}

/// Confirmation prompt shown after validation passes, before the form
/// is actually posted.
pub fn booking_confirm_message(guide_name: Option<&str>) -> String {
    format!(
        "Are you sure you want to book {} for your tour?",
        guide_name.unwrap_or("this guide")
    )
}
