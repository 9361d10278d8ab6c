//! Owned-content list state for the guide dashboard.
//!
//! DESIGN
//! ======
//! The client holds no persistent copy of the list: every render
//! re-fetches the authoritative rows, so this state is only the latest
//! fetch outcome plus its loading flag.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::net::types::ContentRecord;

/// Latest owned-content fetch outcome.
///
/// `error` holds the inline message for a failed load; a successful
/// load clears it. Rows keep the server's ordering.
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub items: Vec<ContentRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ContentState {
    /// True when a successful load returned no rows (empty-state view).
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
