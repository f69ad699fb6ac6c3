use payloads::{APIClient, EventId};
use yew::prelude::*;
use yew_router::prelude::*;

mod logs;
mod preview_urls;
mod state;

pub mod components;
pub mod contexts;
pub mod hooks;
pub mod pages;
pub mod utils;

pub use preview_urls::ObjectUrlFactory;
pub use state::State;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{EditEventPage, EventDetailPage, EventsPage, NotFoundPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    // Photos may be hosted elsewhere; default to the backend origin.
    let media_address = option_env!("MEDIA_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| address.clone());

    APIClient {
        address,
        media_address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                    <Switch<Route> render={switch} />
                </div>
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/events")]
    Events,
    #[at("/events/:id")]
    EventDetail { id: EventId },
    #[at("/events/:id/edit")]
    EditEvent { id: EventId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Events => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <EventsPage />
            </main>
        },
        Route::EventDetail { id } => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <EventDetailPage event_id={id} />
            </main>
        },
        Route::EditEvent { id } => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <EditEventPage event_id={id} />
            </main>
        },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <NotFoundPage />
            </main>
        },
    }
}
