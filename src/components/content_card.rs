//! Card component for one content row on the guide dashboard.
//!
//! DESIGN
//! ======
//! A pure function of the record it is given: image or category-icon
//! placeholder, category badge, truncated description, optional
//! location, formatted upload date, and edit/delete controls bound to
//! the record id. All network work stays with the page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::ContentRecord;
use crate::util::date::display_date;
use crate::util::text::{static_asset_url, truncate_description};

/// One content row rendered as a card.
///
/// `deleting` carries the id of the row whose delete request is in
/// flight, so exactly that card's delete control is disabled.
#[component]
pub fn ContentCard(
    record: ContentRecord,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
    deleting: RwSignal<Option<i64>>,
) -> impl IntoView {
    let id = record.id;
    let category = record.category;
    let delete_busy = move || deleting.get() == Some(id);

    let media = match record.image_path.as_deref() {
        Some(path) => view! {
            <div class="content-card__media">
                <img
                    class="content-card__image"
                    src=static_asset_url(path)
                    alt=record.title.clone()
                />
                <span class=format!("content-card__badge {}", category.badge_class())>
                    {category.label()}
                </span>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="content-card__media content-card__media--placeholder">
                <i class=format!("fas {} content-card__icon", category.icon_class()) aria-hidden="true"></i>
                <span class=format!("content-card__badge {}", category.badge_class())>
                    {category.label()}
                </span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="content-card">
            {media}
            <div class="content-card__body">
                <h3 class="content-card__title">{record.title.clone()}</h3>
                <p class="content-card__description">{truncate_description(&record.description)}</p>
                {record
                    .location
                    .clone()
                    .map(|location| view! { <span class="content-card__location">{location}</span> })}
                <span class="content-card__date">{display_date(&record.upload_date)}</span>
            </div>
            <div class="content-card__actions">
                <button class="btn btn--outline" on:click=move |_| on_edit.run(id)>
                    "Edit"
                </button>
                <button
                    class="btn btn--danger-outline"
                    disabled=delete_busy
                    on:click=move |_| on_delete.run(id)
                >
                    {move || if delete_busy() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </div>
    }
}
