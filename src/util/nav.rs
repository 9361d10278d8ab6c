//! Full-page navigation into the legacy server-rendered routes.
//!
//! DESIGN
//! ======
//! Login, the tourist dashboard, and booking-status updates stay plain
//! navigations: the legacy server answers them with rendered pages, not
//! JSON. URL builders are pure so they can be unit-tested; the actual
//! location change is hydrate-only.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::bookings::BookingStatus;
use crate::state::session::UserType;

/// Legacy login page for a user role. Admins sign in through the
/// tourist entry for now; the backend has no dedicated admin login page.
pub fn login_url(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Guide => "/login/guide",
        UserType::Tourist | UserType::Admin => "/login/tourist",
    }
}

/// Legacy tourist dashboard (guide browsing and booking history).
pub const TOURIST_DASHBOARD_URL: &str = "/tourist_dashboard";

/// Booking-status update route; the server redirects back to the
/// dashboard after applying the change.
pub fn update_booking_status_url(booking_id: i64, status: BookingStatus) -> String {
    format!("/update_booking_status/{booking_id}/{}", status.as_str())
}

/// Per-status confirmation wording for booking-status changes.
pub fn status_confirm_message(status: BookingStatus) -> String {
    match status {
        BookingStatus::Confirmed => "Are you sure you want to confirm this tour booking?".to_owned(),
        BookingStatus::Cancelled => "Are you sure you want to cancel this booking?".to_owned(),
        BookingStatus::Completed => "Mark this tour as completed?".to_owned(),
        other => format!("Are you sure you want to mark this booking {}?", other.as_str()),
    }
}

/// Navigate the whole document to `url`. No-op outside the browser.
pub fn go_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
