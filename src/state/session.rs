//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The legacy scripting consulted an ambient `session` global; here the
//! identity is an explicit context value seeded by the host document,
//! consulted by gates like the contact-guide action.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Role of the signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Tourist,
    Guide,
    Admin,
}

/// Identity of the signed-in user, when any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub user_type: UserType,
}

/// Session state provided via context; `user: None` means anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

/// What the contact-guide action should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Anonymous: prompt to log in and send to the tourist login page.
    RedirectToLogin,
    /// Tourist: proceed to the dashboard to find and book the guide.
    ProceedToDashboard,
    /// Guides/admins cannot book guides; inform only.
    NotATourist,
}

/// Gate the contact-guide action on the session identity.
pub fn contact_guide_outcome(session: &SessionState) -> ContactOutcome {
    match &session.user {
        None => ContactOutcome::RedirectToLogin,
        Some(user) if user.user_type == UserType::Tourist => ContactOutcome::ProceedToDashboard,
        Some(_) => ContactOutcome::NotATourist,
    }
}
