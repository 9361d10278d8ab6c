//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    booking::BookingPage, content_detail::ContentDetailPage,
    guide_dashboard::GuideDashboardPage, home::HomePage,
};
use crate::state::{
    booking::BookingContext, bookings::BookingsState, content::ContentState,
    session::SessionState, toast::ToastState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// The session identity, booking context, and booking-request rows are
/// seeded by the host document; content state starts empty and is
/// fetched by the dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let content = RwSignal::new(ContentState::default());
    let bookings = RwSignal::new(BookingsState::default());
    let booking_ctx = RwSignal::new(BookingContext::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(content);
    provide_context(bookings);
    provide_context(booking_ctx);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/yatra.css"/>
        <Title text="Yatra"/>

        <ToastStack/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("guide") view=GuideDashboardPage/>
                <Route path=(StaticSegment("content"), ParamSegment("id")) view=ContentDetailPage/>
                <Route path=(StaticSegment("book"), ParamSegment("id")) view=BookingPage/>
            </Routes>
        </Router>
    }
}
