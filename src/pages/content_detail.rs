//! Public read-only viewer for one content item.
//!
//! Fetches `GET /content/{id}` on entry. Failures surface as a
//! transient toast rather than an inline panel, and the contact action
//! is gated on the explicit session context.

#[cfg(test)]
#[path = "content_detail_test.rs"]
mod content_detail_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::toast_stack::notify;
use crate::net::api::ApiError;
use crate::net::types::ContentDetail;
use crate::state::session::{ContactOutcome, SessionState, UserType, contact_guide_outcome};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::date::display_date;
use crate::util::nav::{TOURIST_DASHBOARD_URL, go_to, login_url};
use crate::util::text::static_asset_url;

/// Toast message for a failed detail fetch.
fn detail_failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Transport => "Error loading content",
        ApiError::Rejected(_) => "Failed to load content details",
    }
}

/// Public content viewer page.
#[component]
pub fn ContentDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();

    let detail = RwSignal::new(None::<ContentDetail>);
    let loading = RwSignal::new(true);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        let Some(id) = params.get_untracked().get("id").and_then(|raw| raw.parse::<i64>().ok())
        else {
            loading.set(false);
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_content_detail(id).await {
                Ok(found) => detail.set(Some(found)),
                Err(err) => notify(toasts, detail_failure_message(&err), ToastKind::Error),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let on_contact = move |_| match contact_guide_outcome(&session.get_untracked()) {
        ContactOutcome::RedirectToLogin => {
            notify(toasts, "Please login to contact guides", ToastKind::Warning);
            go_to(login_url(UserType::Tourist));
        }
        ContactOutcome::ProceedToDashboard => go_to(TOURIST_DASHBOARD_URL),
        ContactOutcome::NotATourist => {
            notify(toasts, "Only tourists can book guides", ToastKind::Info);
        }
    };

    view! {
        <div class="detail-page">
            <Show
                when=move || !loading.get()
                fallback=move || {
                    view! {
                        <div class="detail-page__loading">
                            <span class="spinner" aria-hidden="true"></span>
                        </div>
                    }
                }
            >
                {move || {
                    detail
                        .get()
                        .map_or_else(
                            || view! { <p class="detail-page__missing">"Content not found."</p> }.into_any(),
                            |content| {
                                let category = content.category;
                                view! {
                                    <article class="detail-panel">
                                        {content
                                            .image_path
                                            .as_deref()
                                            .map(|path| {
                                                view! {
                                                    <img
                                                        class="detail-panel__image"
                                                        src=static_asset_url(path)
                                                        alt=content.title.clone()
                                                    />
                                                }
                                            })}
                                        <div class="detail-panel__body">
                                            <span class=format!("detail-panel__badge {}", category.badge_class())>
                                                {category.label()}
                                            </span>
                                            {content
                                                .location
                                                .clone()
                                                .map(|location| {
                                                    view! {
                                                        <span class="detail-panel__location">{location}</span>
                                                    }
                                                })}
                                            <h1 class="detail-panel__title">{content.title.clone()}</h1>
                                            <h2>"Description"</h2>
                                            <p class="detail-panel__description">{content.description.clone()}</p>
                                            <div class="detail-panel__guide">
                                                <div>
                                                    <h3>{content.guide_name.clone()}</h3>
                                                    <span class="detail-panel__guide-role">
                                                        "Professional Local Guide"
                                                    </span>
                                                    <span class="detail-panel__guide-date">
                                                        "Shared on " {display_date(&content.upload_date)}
                                                    </span>
                                                </div>
                                                <button class="btn btn--primary" on:click=on_contact>
                                                    "Contact Guide"
                                                </button>
                                            </div>
                                        </div>
                                    </article>
                                }
                                    .into_any()
                            },
                        )
                }}
            </Show>
        </div>
    }
}
