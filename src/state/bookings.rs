//! Incoming booking-request rows for the guide dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The legacy backend renders a guide's booking requests into the page
//! rather than exposing a JSON feed, so these rows are seeded into the
//! shell by the host document. The client owns search filtering and the
//! confirm-then-navigate status flow.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use serde::{Deserialize, Serialize};

/// Lifecycle of a booking request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Wire value, also used in the status-update URL.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Display label for the status column.
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

/// One booking request as seen by the guide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRow {
    pub id: i64,
    pub tourist_name: String,
    pub phone: String,
    pub arrival_date: String,
    pub days_to_stay: u32,
    #[serde(default)]
    pub group_size: Option<u32>,
    #[serde(default)]
    pub status: BookingStatus,
}

impl BookingRow {
    /// Searchable cell values, matching what the table displays.
    pub fn search_cells(&self) -> [String; 5] {
        [
            self.tourist_name.clone(),
            self.phone.clone(),
            self.arrival_date.clone(),
            self.days_to_stay.to_string(),
            self.status.label().to_owned(),
        ]
    }
}

/// Booking-request table state: seeded rows plus the live search filter.
#[derive(Clone, Debug, Default)]
pub struct BookingsState {
    pub items: Vec<BookingRow>,
    pub filter: String,
}
