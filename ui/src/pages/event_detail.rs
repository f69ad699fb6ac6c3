use payloads::EventId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::get_api_client;
use crate::hooks::use_event;
use crate::utils::time::format_event_time;

#[derive(Properties, PartialEq)]
pub struct EventDetailPageProps {
    pub event_id: EventId,
}

#[function_component]
pub fn EventDetailPage(props: &EventDetailPageProps) -> Html {
    let event_hook = use_event(props.event_id);

    event_hook.render("event", |maybe_event, _is_loading, _error| {
        let Some(event) = maybe_event else {
            return html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"This event does not exist or was removed."}
                    </p>
                    <Link<Route>
                        to={Route::Events}
                        classes="inline-block mt-4 text-sm font-medium underline"
                    >
                        {"Back to events"}
                    </Link<Route>>
                </div>
            };
        };

        let api_client = get_api_client();

        html! {
            <div class="space-y-8">
                <div class="flex justify-between items-start">
                    <div>
                        <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                            {&event.title}
                        </h1>
                        <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                            {if event.online {
                                "Online event".to_string()
                            } else {
                                event.location.clone()
                            }}
                        </p>
                    </div>
                    <Link<Route>
                        to={Route::EditEvent { id: event.id }}
                        classes="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                    >
                        {"Edit Event"}
                    </Link<Route>>
                </div>

                <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-4">
                    <p class="text-neutral-700 dark:text-neutral-300 whitespace-pre-wrap">
                        {&event.description}
                    </p>
                    <div class="text-sm text-neutral-600 dark:text-neutral-400 space-y-1">
                        <p>{"Starts: "}{format_event_time(&event.start)}</p>
                        <p>{"Ends: "}{format_event_time(&event.end)}</p>
                        <p>{"Visibility: "}{event.visibility.as_str()}</p>
                        <p>{"Max attendees: "}{event.max_attendees}</p>
                    </div>
                </div>

                if !event.photos.is_empty() {
                    <div class="flex flex-wrap gap-2">
                        {for event.photos.iter().map(|path| {
                            let url = api_client.event_photo_url(path);
                            html! {
                                <img
                                    key={path.clone()}
                                    src={url}
                                    alt="Event photo"
                                    class="w-48 h-32 object-cover rounded border border-neutral-300 dark:border-neutral-600"
                                />
                            }
                        })}
                    </div>
                }
            </div>
        }
    })
}
