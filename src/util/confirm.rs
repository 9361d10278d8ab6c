//! Blocking yes/no confirmation prompt.
//!
//! Destructive and outward-facing actions (delete, booking submission,
//! status changes) gate on the browser's modal `confirm`, which
//! suspends script execution until the user answers. Outside the
//! browser the prompt cannot be shown, so the answer is "no".

/// Ask the user to confirm `message`; `false` when declined or when no
/// browser window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
