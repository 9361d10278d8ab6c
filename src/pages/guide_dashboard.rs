//! Guide dashboard: owned-content management and booking requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the guide's landing route. The content tab re-fetches the
//! authoritative list on entry and after every successful mutation;
//! the edit modal runs the [`EditSession`] state machine; deletion is
//! gated behind a blocking confirmation. The bookings tab filters the
//! seeded request rows and hands status changes to the legacy
//! navigation flow.

#[cfg(test)]
#[path = "guide_dashboard_test.rs"]
mod guide_dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::content_card::ContentCard;
use crate::components::toast_stack::notify;
use crate::net::api::ApiError;
use crate::net::types::Category;
use crate::state::bookings::{BookingRow, BookingStatus, BookingsState};
use crate::state::content::ContentState;
use crate::state::editor::EditSession;
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::confirm::confirm;
use crate::util::nav::{go_to, status_confirm_message, update_booking_status_url};
use crate::util::table_filter::row_matches;
use crate::util::text::static_asset_url;

const DELETE_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this content? This action cannot be undone.";

/// Dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DashboardTab {
    #[default]
    Content,
    Bookings,
}

/// Inline message for a failed list or edit fetch.
fn load_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport => "Error loading content. Please try again.".to_owned(),
        ApiError::Rejected(_) => {
            format!("Failed to load content: {}", err.message("Unknown error"))
        }
    }
}

/// Toast message for a failed update submission.
fn update_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport => "Error updating content. Please try again.".to_owned(),
        ApiError::Rejected(_) => {
            format!("Failed to update content: {}", err.message("Unknown error"))
        }
    }
}

/// Toast message for a failed deletion.
fn delete_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport => "Error deleting content. Please try again.".to_owned(),
        ApiError::Rejected(_) => {
            format!("Failed to delete content: {}", err.message("Unknown error"))
        }
    }
}

/// Status changes a guide may apply to a booking in its current state,
/// with the control labels.
fn status_actions(status: BookingStatus) -> &'static [(BookingStatus, &'static str)] {
    match status {
        BookingStatus::Pending => &[
            (BookingStatus::Confirmed, "Confirm"),
            (BookingStatus::Cancelled, "Cancel"),
        ],
        BookingStatus::Confirmed => &[
            (BookingStatus::Completed, "Complete"),
            (BookingStatus::Cancelled, "Cancel"),
        ],
        BookingStatus::Completed | BookingStatus::Cancelled => &[],
    }
}

/// Guide dashboard page with Content and Bookings tabs.
#[component]
pub fn GuideDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let content = expect_context::<RwSignal<ContentState>>();
    let bookings = expect_context::<RwSignal<BookingsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let tab = RwSignal::new(DashboardTab::default());
    let edit_session = RwSignal::new(EditSession::default());
    let deleting = RwSignal::new(None::<i64>);

    let reload = move || {
        content.update(|s| {
            s.loading = true;
            s.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_content().await {
                Ok(items) => content.update(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                }),
                Err(err) => content.update(|s| {
                    s.loading = false;
                    s.error = Some(load_failure_message(&err));
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        content.update(|s| s.loading = false);
    };

    // Fetch the list once on entry; reloads happen after mutations.
    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() {
            return;
        }
        requested_list.set(true);
        reload();
    });

    let on_edit = Callback::new(move |id: i64| {
        let mut started = false;
        edit_session.update(|s| started = s.begin(id));
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_content_for_edit(id).await {
                Ok(record) => edit_session.update(|s| {
                    s.populate(&record);
                }),
                Err(err) => edit_session.update(|s| {
                    s.fail(load_failure_message(&err));
                }),
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        if deleting.get_untracked().is_some() {
            return;
        }
        if !confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }
        deleting.set(Some(id));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_content(id).await {
                Ok(()) => {
                    notify(toasts, "Content deleted successfully!", ToastKind::Success);
                    reload();
                }
                Err(err) => notify(toasts, delete_failure_message(&err), ToastKind::Error),
            }
            deleting.set(None);
        });
    });

    let on_saved = Callback::new(move |()| reload());

    let self_name = move || {
        session
            .get()
            .user
            .map_or_else(|| "Guide".to_owned(), |user| user.username)
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Guide Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{self_name}</span>
            </header>

            <nav class="dashboard-page__tabs">
                <button
                    class="tab"
                    class:tab--active=move || tab.get() == DashboardTab::Content
                    on:click=move |_| tab.set(DashboardTab::Content)
                >
                    "My Content"
                </button>
                <button
                    class="tab"
                    class:tab--active=move || tab.get() == DashboardTab::Bookings
                    on:click=move |_| tab.set(DashboardTab::Bookings)
                >
                    "Booking Requests"
                </button>
            </nav>

            <Show
                when=move || tab.get() == DashboardTab::Content
                fallback=move || view! { <BookingsPanel bookings=bookings/> }
            >
                <div class="content-panel">
                    <Show when=move || content.get().error.is_some()>
                        <div class="alert alert--danger">
                            {move || content.get().error.unwrap_or_default()}
                        </div>
                    </Show>
                    <Show
                        when=move || !content.get().loading
                        fallback=move || {
                            view! {
                                <div class="content-panel__loading">
                                    <span class="spinner" aria-hidden="true"></span>
                                    <p>"Loading your content..."</p>
                                </div>
                            }
                        }
                    >
                        <Show
                            when=move || !content.get().is_empty()
                            fallback=move || {
                                view! {
                                    <div class="content-panel__empty">
                                        <i class="fas fa-images content-panel__empty-icon" aria-hidden="true"></i>
                                        <h3>"No Content Yet"</h3>
                                        <p>"Share your first tourism content to get started!"</p>
                                        <a class="btn btn--primary" href="/guide_dashboard#content-panel">
                                            "Add Content"
                                        </a>
                                    </div>
                                }
                            }
                        >
                            <div class="content-grid">
                                {move || {
                                    content
                                        .get()
                                        .items
                                        .into_iter()
                                        .map(|record| {
                                            view! {
                                                <ContentCard
                                                    record=record
                                                    on_edit=on_edit
                                                    on_delete=on_delete
                                                    deleting=deleting
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>
            </Show>

            <Show when=move || edit_session.with(EditSession::is_open)>
                <EditContentModal session=edit_session on_saved=on_saved/>
            </Show>
        </div>
    }
}

/// Modal dialog running one edit session.
#[component]
fn EditContentModal(session: RwSignal<EditSession>, on_saved: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let loading = move || matches!(session.get(), EditSession::Loading { .. });
    let submitting = move || session.with(EditSession::is_submitting);
    let error_message = Memo::new(move |_| match session.get() {
        EditSession::Error { message } => Some(message),
        _ => None,
    });
    // Stable across Populated <-> Submitting so a rejected submit keeps
    // the user's edits in the live form instead of re-rendering it.
    let form_snapshot = Memo::new(move |_| session.with(|s| s.form().cloned()));

    let on_close = Callback::new(move |()| session.update(EditSession::close));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(EditSession::is_submitting) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(target) = ev.target() else {
                return;
            };
            let Ok(form_el) = target.dyn_into::<web_sys::HtmlFormElement>() else {
                return;
            };
            let Ok(form_data) = web_sys::FormData::new_with_form(&form_el) else {
                return;
            };
            let Some(id) = session.with_untracked(|s| s.form().map(|f| f.id)) else {
                return;
            };
            session.update(|s| {
                s.submit();
            });
            leptos::task::spawn_local(async move {
                match crate::net::api::update_content(id, form_data).await {
                    Ok(()) => {
                        session.update(|s| {
                            s.submit_accepted();
                        });
                        notify(toasts, "Content updated successfully!", ToastKind::Success);
                        on_saved.run(());
                    }
                    Err(err) => {
                        session.update(|s| {
                            s.submit_rejected();
                        });
                        notify(toasts, update_failure_message(&err), ToastKind::Error);
                    }
                }
            });
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Content"</h2>

                <Show when=loading>
                    <div class="dialog__loading">
                        <span class="spinner" aria-hidden="true"></span>
                        <p>"Loading content details..."</p>
                    </div>
                </Show>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--danger">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                {move || {
                    form_snapshot
                        .get()
                        .map(|form| {
                            view! {
                                <form class="edit-form" on:submit=on_submit>
                                    <label class="edit-form__label">
                                        "Category"
                                        <select class="edit-form__input" name="upload_type" required>
                                            {Category::SELECTABLE
                                                .iter()
                                                .map(|category| {
                                                    view! {
                                                        <option
                                                            value=category.as_str()
                                                            selected={*category == form.category}
                                                        >
                                                            {category.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                    <label class="edit-form__label">
                                        "Title"
                                        <input
                                            class="edit-form__input"
                                            type="text"
                                            name="title"
                                            required
                                            value=form.title.clone()
                                        />
                                    </label>
                                    <label class="edit-form__label">
                                        "Description"
                                        <textarea
                                            class="edit-form__input edit-form__textarea"
                                            name="description"
                                            required
                                            prop:value=form.description.clone()
                                        ></textarea>
                                    </label>
                                    <label class="edit-form__label">
                                        "Location"
                                        <input
                                            class="edit-form__input"
                                            type="text"
                                            name="location"
                                            value=form.location.clone()
                                        />
                                    </label>
                                    <div class="edit-form__preview">
                                        {match form.current_image.as_deref() {
                                            Some(path) => view! {
                                                <>
                                                    <p class="edit-form__preview-label">"Current Image:"</p>
                                                    <img
                                                        class="edit-form__preview-image"
                                                        src=static_asset_url(path)
                                                        alt="Current image"
                                                    />
                                                </>
                                            }
                                                .into_any(),
                                            None => view! {
                                                <p class="edit-form__preview-label edit-form__preview-label--muted">
                                                    "No image uploaded"
                                                </p>
                                            }
                                                .into_any(),
                                        }}
                                    </div>
                                    <label class="edit-form__label">
                                        "Replace Image (optional)"
                                        <input
                                            class="edit-form__input"
                                            type="file"
                                            name="image"
                                            accept="image/*"
                                        />
                                    </label>
                                    <div class="dialog__actions">
                                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                                            "Cancel"
                                        </button>
                                        <button class="btn btn--primary" type="submit" disabled=submitting>
                                            {move || if submitting() { "Updating..." } else { "Save Changes" }}
                                        </button>
                                    </div>
                                </form>
                            }
                        })
                }}
            </div>
        </div>
    }
}

/// Booking-request table with live search and status actions.
#[component]
fn BookingsPanel(bookings: RwSignal<BookingsState>) -> impl IntoView {
    view! {
        <div class="bookings-panel">
            <input
                class="bookings-panel__search"
                type="text"
                placeholder="Search bookings..."
                prop:value=move || bookings.get().filter
                on:input=move |ev| bookings.update(|s| s.filter = event_target_value(&ev))
            />
            <Show
                when=move || !bookings.get().items.is_empty()
                fallback=move || view! { <p class="bookings-panel__empty">"No booking requests yet."</p> }
            >
                <table class="bookings-table">
                    <thead>
                        <tr>
                            <th>"Tourist"</th>
                            <th>"Phone"</th>
                            <th>"Arrival"</th>
                            <th>"Days"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = bookings.get();
                            state
                                .items
                                .iter()
                                .filter(|row| row_matches(&state.filter, &row.search_cells()))
                                .cloned()
                                .map(|row| view! { <BookingRowView row=row/> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

/// One booking-request row; status buttons confirm, then navigate into
/// the legacy status-update route.
#[component]
fn BookingRowView(row: BookingRow) -> impl IntoView {
    let id = row.id;
    let actions = status_actions(row.status)
        .iter()
        .map(|&(next, label)| {
            view! {
                <button
                    class="btn btn--small"
                    on:click=move |_| {
                        if confirm(&status_confirm_message(next)) {
                            go_to(&update_booking_status_url(id, next));
                        }
                    }
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr>
            <td>{row.tourist_name}</td>
            <td>{row.phone}</td>
            <td>{row.arrival_date}</td>
            <td>{row.days_to_stay}</td>
            <td>
                <span class=format!("status status--{}", row.status.as_str())>
                    {row.status.label()}
                </span>
            </td>
            <td class="bookings-table__actions">{actions}</td>
        </tr>
    }
}
