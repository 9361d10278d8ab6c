//! Landing page with role-specific entry points.
//!
//! Login and the tourist dashboard are legacy server-rendered routes,
//! so the buttons here are full-page navigations rather than router
//! links.

use leptos::prelude::*;

use crate::state::session::UserType;
use crate::util::nav::{TOURIST_DASHBOARD_URL, go_to, login_url};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Yatra"</h1>
                <p class="hero__tagline">
                    "Discover waterfalls, temples, and wildlife with local guides."
                </p>
                <div class="hero__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| go_to(login_url(UserType::Tourist))
                    >
                        "Explore as Tourist"
                    </button>
                    <button
                        class="btn btn--outline"
                        on:click=move |_| go_to(login_url(UserType::Guide))
                    >
                        "Guide Login"
                    </button>
                </div>
                <a class="hero__browse" href=TOURIST_DASHBOARD_URL>
                    "Browse available guides"
                </a>
            </section>
        </div>
    }
}
