//! Booking form page for a selected guide.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form posts to the legacy `/book_guide` endpoint as a plain
//! navigation. Validation markers, the cost summary, the confirmation
//! gate, and the double-submit guard all run client-side before that
//! post is allowed. The guide's name and nightly price ride in on the
//! [`BookingContext`] seeded by the navigation source, with a fixed
//! default price when absent.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::toast_stack::notify;
use crate::state::booking::{
    BookingContext, BookingForm, BookingValidation, DEFAULT_PRICE_PER_DAY, booking_confirm_message,
    compute_total, days_label, format_total, group_label, parse_count, validate,
};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::confirm::confirm;
use crate::util::date::today_iso;
use crate::util::submit_guard;

/// Single aggregate notification for a failed validation pass, most
/// specific complaint first.
fn validation_toast_message(form: &BookingForm, validation: BookingValidation) -> &'static str {
    let missing_required = form.tourist_name.trim().is_empty()
        || form.phone.trim().is_empty()
        || form.native_place.trim().is_empty()
        || form.arrival_date.trim().is_empty()
        || form.days_to_stay.trim().is_empty();
    if missing_required {
        "Please fill in all required fields"
    } else if !validation.phone {
        "Please enter a valid 10-digit phone number"
    } else if !validation.arrival_date {
        "Arrival date cannot be in the past"
    } else {
        "Please correct the highlighted fields"
    }
}

/// Booking form page.
#[component]
pub fn BookingPage() -> impl IntoView {
    let ctx = expect_context::<RwSignal<BookingContext>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let guide_id = move || params.read().get("id").unwrap_or_default();

    let form = RwSignal::new(BookingForm::default());
    let validation = RwSignal::new(None::<BookingValidation>);
    let busy = RwSignal::new(false);
    let form_ref = NodeRef::<leptos::html::Form>::new();

    // Recomputed on every days change and once at mount.
    let total = Memo::new(move |_| {
        form.with(|f| compute_total(&f.days_to_stay, ctx.get().price_per_day))
    });
    let price_per_day = move || ctx.get().price_per_day.unwrap_or(DEFAULT_PRICE_PER_DAY);
    let guide_name = move || {
        ctx.get()
            .guide_name
            .unwrap_or_else(|| "Your selected guide".to_owned())
    };

    let field_valid = move |pick: fn(BookingValidation) -> bool| {
        validation.get().is_some_and(pick)
    };
    let field_invalid = move |pick: fn(BookingValidation) -> bool| {
        validation.get().is_some_and(move |v| !pick(v))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        submit_guard::engage(busy);

        let today = today_iso().unwrap_or_default();
        let outcome = form.with_untracked(|f| validate(f, &today));
        validation.set(Some(outcome));
        if !outcome.all_valid() {
            let message = form.with_untracked(|f| validation_toast_message(f, outcome));
            notify(toasts, message, ToastKind::Error);
            submit_guard::release(busy);
            return;
        }

        let name = ctx.with_untracked(|c| c.guide_name.clone());
        if confirm(&booking_confirm_message(name.as_deref())) {
            // Real navigation: the legacy server renders the result.
            #[cfg(feature = "hydrate")]
            if let Some(form_el) = form_ref.get_untracked() {
                let _ = form_el.submit();
            }
        } else {
            submit_guard::release(busy);
        }
    };

    view! {
        <div class="booking-page">
            <header class="booking-page__header">
                <h1>"Book " {guide_name}</h1>
                <p class="booking-page__price">
                    {move || format_total(price_per_day())} "/day"
                </p>
            </header>

            <form
                class="booking-form"
                method="post"
                action="/book_guide"
                node_ref=form_ref
                on:submit=on_submit
            >
                <input type="hidden" name="guide_id" value=guide_id/>

                <label class="booking-form__label">
                    "Your Name *"
                    <input
                        class="booking-form__input"
                        class:is-invalid=move || field_invalid(|v| v.tourist_name)
                        class:is-valid=move || field_valid(|v| v.tourist_name)
                        type="text"
                        name="tourist_name"
                        required
                        prop:value=move || form.get().tourist_name
                        on:input=move |ev| form.update(|f| f.tourist_name = event_target_value(&ev))
                    />
                </label>

                <label class="booking-form__label">
                    "Phone *"
                    <input
                        class="booking-form__input"
                        class:is-invalid=move || field_invalid(|v| v.phone)
                        class:is-valid=move || field_valid(|v| v.phone)
                        type="tel"
                        name="phone"
                        required
                        placeholder="10-digit mobile number"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </label>

                <label class="booking-form__label">
                    "Email"
                    <input
                        class="booking-form__input"
                        type="email"
                        name="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>

                <label class="booking-form__label">
                    "Native Place *"
                    <input
                        class="booking-form__input"
                        class:is-invalid=move || field_invalid(|v| v.native_place)
                        class:is-valid=move || field_valid(|v| v.native_place)
                        type="text"
                        name="native_place"
                        required
                        prop:value=move || form.get().native_place
                        on:input=move |ev| form.update(|f| f.native_place = event_target_value(&ev))
                    />
                </label>

                <label class="booking-form__label">
                    "Arrival Date *"
                    <input
                        class="booking-form__input"
                        class:is-invalid=move || field_invalid(|v| v.arrival_date)
                        class:is-valid=move || field_valid(|v| v.arrival_date)
                        type="date"
                        name="arrival_date"
                        required
                        min=move || today_iso().unwrap_or_default()
                        prop:value=move || form.get().arrival_date
                        on:input=move |ev| form.update(|f| f.arrival_date = event_target_value(&ev))
                    />
                </label>

                <label class="booking-form__label">
                    "Days to Stay *"
                    <select
                        class="booking-form__input"
                        class:is-invalid=move || field_invalid(|v| v.days_to_stay)
                        class:is-valid=move || field_valid(|v| v.days_to_stay)
                        name="days_to_stay"
                        required
                        on:change=move |ev| form.update(|f| f.days_to_stay = event_target_value(&ev))
                    >
                        <option value="">"Select days"</option>
                        {(1..=10_u32)
                            .map(|d| view! { <option value=d.to_string()>{days_label(d)}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="booking-form__label">
                    "Group Size"
                    <select
                        class="booking-form__input"
                        name="group_size"
                        on:change=move |ev| form.update(|f| f.group_size = event_target_value(&ev))
                    >
                        {(1..=10_u32)
                            .map(|n| view! { <option value=n.to_string()>{group_label(n)}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="booking-form__label">
                    "Tour Type"
                    <input
                        class="booking-form__input"
                        type="text"
                        name="tour_type"
                        placeholder="Wildlife, temples, waterfalls..."
                        prop:value=move || form.get().tour_type
                        on:input=move |ev| form.update(|f| f.tour_type = event_target_value(&ev))
                    />
                </label>

                <label class="booking-form__label">
                    "Additional Requirements"
                    <textarea
                        class="booking-form__input booking-form__textarea"
                        name="additional_requirements"
                        prop:value=move || form.get().additional_requirements
                        on:input=move |ev| {
                            form.update(|f| f.additional_requirements = event_target_value(&ev))
                        }
                    ></textarea>
                </label>

                <aside class="booking-form__summary">
                    <span>{move || form.with(|f| days_label(parse_count(&f.days_to_stay)))}</span>
                    <span>{move || form.with(|f| group_label(parse_count(&f.group_size)))}</span>
                    <span class="booking-form__total">
                        "Total: " {move || format_total(total.get())}
                    </span>
                </aside>

                <button
                    class="btn btn--primary booking-form__submit"
                    type="submit"
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Processing..." } else { "Send Booking Request" }}
                </button>
            </form>
        </div>
    }
}
