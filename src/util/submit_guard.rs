//! Double-submit guard for form controls.
//!
//! Submitting flips a shared busy flag that disables the control and
//! swaps its label for a busy indicator. A fixed 10-second safety timer
//! re-enables the control regardless of what happened to the request,
//! so a hung navigation never locks the form permanently.

use leptos::prelude::*;

/// How long a control may stay locked before the safety release fires.
pub const SUBMIT_SAFETY_SECS: u64 = 10;

/// Lock the control and arm the safety release.
pub fn engage(busy: RwSignal<bool>) {
    busy.set(true);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(SUBMIT_SAFETY_SECS)).await;
            if busy.get_untracked() {
                busy.set(false);
            }
        });
    }
}

/// Unlock the control explicitly (validation failed, confirm declined,
/// request completed).
pub fn release(busy: RwSignal<bool>) {
    busy.set(false);
}
