use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_events;
use crate::utils::time::format_event_time;

#[function_component]
pub fn EventsPage() -> Html {
    let events_hook = use_events();

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Events"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Browse upcoming events"}
                </p>
            </div>

            if events_hook.is_loading {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"Loading events..."}</p>
                </div>
            } else if let Some(error) = &events_hook.error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                </div>
            } else if let Some(event_list) = events_hook.data.as_ref() {
                if event_list.is_empty() {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"No events yet."}
                        </p>
                    </div>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {event_list.iter().map(|event| {
                            html! {
                                <div key={event.id.to_string()} class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
                                    <div class="space-y-4">
                                        <div>
                                            <h3 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                                                {&event.title}
                                            </h3>
                                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                {if event.online {
                                                    "Online".to_string()
                                                } else {
                                                    event.location.clone()
                                                }}
                                            </p>
                                        </div>

                                        <div class="text-sm text-neutral-600 dark:text-neutral-400">
                                            <p>{"Starts: "}{format_event_time(&event.start)}</p>
                                        </div>

                                        <div class="pt-2">
                                            <Link<Route>
                                                to={Route::EventDetail { id: event.id }}
                                                classes="block w-full bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 rounded-md text-sm font-medium transition-colors text-center"
                                            >
                                                {"View Details"}
                                            </Link<Route>>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()}
                    </div>
                }
            }
        </div>
    }
}
