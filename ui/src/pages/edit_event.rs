use std::cell::RefCell;
use std::rc::Rc;

use event_session::{EditSession, FieldEdit, SessionStatus};
use payloads::{EventId, Visibility, requests, responses};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{ConfirmationModal, EventPhotoPicker};
use crate::contexts::toast::use_toast;
use crate::hooks::{FetchState, use_event, use_push_route};
use crate::utils::time::{format_datetime_local, parse_datetime_local};
use crate::{ObjectUrlFactory, Route, State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct EditEventPageProps {
    pub event_id: EventId,
}

/// Loads the event, then hands off to the form. A definitive "not found"
/// answer redirects to the listing instead of rendering a dead editor.
#[function_component]
pub fn EditEventPage(props: &EditEventPageProps) -> Html {
    let event_hook = use_event(props.event_id);
    let push_route = use_push_route();
    let toast = use_toast();

    {
        let is_missing =
            matches!(event_hook.data, FetchState::Fetched(None));
        let push_route = push_route.clone();
        let toast = toast.clone();
        use_effect_with(is_missing, move |missing| {
            if *missing {
                toast.error("This event does not exist or was removed.");
                push_route.emit(Route::Events);
            }
        });
    }

    match &event_hook.data {
        FetchState::Fetched(Some(event)) => html! {
            <EditEventForm event={event.clone()} />
        },
        // Redirecting; render nothing while the effect runs
        FetchState::Fetched(None) => html! {},
        FetchState::NotFetched => {
            if let Some(error) = &event_hook.error {
                html! {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {format!("Error loading event: {}", error)}
                        </p>
                    </div>
                }
            } else {
                html! {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"Loading event..."}
                        </p>
                    </div>
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
struct FormProps {
    pub event: responses::Event,
}

type Session = Rc<RefCell<EditSession<ObjectUrlFactory>>>;

#[function_component]
fn EditEventForm(props: &FormProps) -> Html {
    // The session lives in a ref, not component state: preview URLs must be
    // revoked exactly once however the component unmounts, and dropping the
    // RefCell on unmount guarantees that.
    let session: Session = {
        let event = props.event.clone();
        use_mut_ref(move || {
            let client = get_api_client();
            let mut session =
                EditSession::new(ObjectUrlFactory, client.media_address);
            session.load_succeeded(event);
            session
        })
    };
    let redraw = use_force_update();

    let (_, dispatch) = use_store::<State>();
    let push_route = use_push_route();
    let toast = use_toast();

    // Delete-in-flight is page concern, not session state: the session
    // stays in DeleteConfirmPending so the modal remains up until the
    // outcome is known.
    let is_deleting = use_state(|| false);
    let validation_error = use_state(|| None::<&'static str>);

    let apply_edit = {
        let session = session.clone();
        let redraw = redraw.clone();
        let validation_error = validation_error.clone();
        Callback::from(move |edit: FieldEdit| {
            session.borrow_mut().edit(edit);
            validation_error.set(None);
            redraw.force_update();
        })
    };

    let on_title_change = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply_edit.emit(FieldEdit::Title(input.value()));
        })
    };

    let on_description_change = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            apply_edit.emit(FieldEdit::Description(input.value()));
        })
    };

    let on_start_change = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(datetime) = parse_datetime_local(&input.value()) {
                apply_edit.emit(FieldEdit::Start(datetime));
            }
        })
    };

    let on_end_change = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(datetime) = parse_datetime_local(&input.value()) {
                apply_edit.emit(FieldEdit::End(datetime));
            }
        })
    };

    let on_location_change = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply_edit.emit(FieldEdit::Location(input.value()));
        })
    };

    // Checkbox state crosses the boundary as a bool here; the on-the-wire
    // "true"/"false" coercion happens in the payload, never in the view.
    let on_online_change = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply_edit.emit(FieldEdit::Online(input.checked()));
        })
    };

    let on_visibility_change = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(visibility) =
                Visibility::from_form_value(&select.value())
            {
                apply_edit.emit(FieldEdit::Visibility(visibility));
            }
        })
    };

    let on_max_attendees_change = {
        let apply_edit = apply_edit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                apply_edit.emit(FieldEdit::MaxAttendees(value));
            }
        })
    };

    let on_photos_selected = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |files: Vec<requests::PhotoUpload>| {
            session.borrow_mut().select_files(files);
            redraw.force_update();
        })
    };

    let on_submit = {
        let session = session.clone();
        let redraw = redraw.clone();
        let validation_error = validation_error.clone();
        let dispatch = dispatch.clone();
        let push_route = push_route.clone();
        let event_id = props.event.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(details) = session.borrow().update_request() else {
                return;
            };
            let validation = requests::validate_event(&details);
            if let Some(message) = validation.error_message() {
                validation_error.set(Some(message));
                return;
            }
            validation_error.set(None);
            if !session.borrow_mut().begin_submit() {
                return;
            }
            redraw.force_update();

            let session = session.clone();
            let redraw = redraw.clone();
            let dispatch = dispatch.clone();
            let push_route = push_route.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = get_api_client();
                match client.update_event(&event_id, &details).await {
                    Ok(updated) => {
                        dispatch.reduce_mut(|s| s.invalidate_events());
                        push_route
                            .emit(Route::EventDetail { id: updated.id });
                    }
                    Err(e) => {
                        tracing::error!("event update failed: {e}");
                        session.borrow_mut().submit_failed(e.to_string());
                        redraw.force_update();
                    }
                }
            });
        })
    };

    let on_delete_click = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            session.borrow_mut().request_delete();
            redraw.force_update();
        })
    };

    let on_delete_cancel = {
        let session = session.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            session.borrow_mut().cancel_delete();
            redraw.force_update();
        })
    };

    let on_delete_confirm = {
        let session = session.clone();
        let redraw = redraw.clone();
        let is_deleting = is_deleting.clone();
        let dispatch = dispatch.clone();
        let push_route = push_route.clone();
        let toast = toast.clone();
        let event_id = props.event.id;

        Callback::from(move |_| {
            if !session.borrow_mut().confirm_delete() {
                return;
            }
            is_deleting.set(true);

            let session = session.clone();
            let redraw = redraw.clone();
            let is_deleting = is_deleting.clone();
            let dispatch = dispatch.clone();
            let push_route = push_route.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = get_api_client();
                match client.delete_event(&event_id).await {
                    Ok(()) => {
                        session.borrow_mut().delete_succeeded();
                        dispatch.reduce_mut(|s| s.invalidate_events());
                        toast.success("Event deleted.");
                        push_route.emit(Route::Events);
                    }
                    Err(e) => {
                        tracing::error!("event delete failed: {e}");
                        session.borrow_mut().delete_failed(e.to_string());
                        is_deleting.set(false);
                        redraw.force_update();
                    }
                }
            });
        })
    };

    // Snapshot the session for rendering; the borrow must not outlive this
    // block since every callback above takes a fresh one.
    let (status, pending, previews) = {
        let session = session.borrow();
        let Some(pending) = session.pending().cloned() else {
            return html! {};
        };
        (session.status().clone(), pending, session.previews().to_vec())
    };

    let is_submitting = status == SessionStatus::Submitting;
    let show_delete_modal = status == SessionStatus::DeleteConfirmPending;
    let controls_disabled = is_submitting || *is_deleting;

    let inline_error = (*validation_error)
        .map(String::from)
        .or_else(|| match &status {
            SessionStatus::Error(reason) => Some(reason.clone()),
            _ => None,
        });

    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md \
                       bg-white dark:bg-neutral-700 \
                       text-neutral-900 dark:text-neutral-100 \
                       focus:outline-none focus:ring-2 focus:ring-neutral-500";
    let label_class = "block text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 mb-1";

    html! {
        <div class="max-w-2xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Edit Event"}
            </h1>

            <form onsubmit={on_submit} class="space-y-6">
                <div>
                    <label class={label_class} for="title">{"Title"}</label>
                    <input
                        id="title"
                        type="text"
                        class={input_class}
                        value={pending.title.clone()}
                        onchange={on_title_change}
                        disabled={controls_disabled}
                    />
                </div>

                <div>
                    <label class={label_class} for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        rows="5"
                        class={input_class}
                        value={pending.description.clone()}
                        onchange={on_description_change}
                        disabled={controls_disabled}
                    />
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class={label_class} for="start">{"Starts"}</label>
                        <input
                            id="start"
                            type="datetime-local"
                            class={input_class}
                            value={format_datetime_local(&pending.start)}
                            onchange={on_start_change}
                            disabled={controls_disabled}
                        />
                    </div>
                    <div>
                        <label class={label_class} for="end">{"Ends"}</label>
                        <input
                            id="end"
                            type="datetime-local"
                            class={input_class}
                            value={format_datetime_local(&pending.end)}
                            onchange={on_end_change}
                            disabled={controls_disabled}
                        />
                    </div>
                </div>

                <div>
                    <label class={label_class} for="location">{"Location"}</label>
                    <input
                        id="location"
                        type="text"
                        class={input_class}
                        value={pending.location.clone()}
                        onchange={on_location_change}
                        disabled={controls_disabled}
                    />
                </div>

                <div class="flex items-center gap-2">
                    <input
                        id="online"
                        type="checkbox"
                        checked={pending.online}
                        onchange={on_online_change}
                        disabled={controls_disabled}
                        class="h-4 w-4 rounded border-neutral-300"
                    />
                    <label class="text-sm text-neutral-700 dark:text-neutral-300" for="online">
                        {"This is an online event"}
                    </label>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class={label_class} for="visibility">{"Visibility"}</label>
                        <select
                            id="visibility"
                            class={input_class}
                            onchange={on_visibility_change}
                            disabled={controls_disabled}
                        >
                            {for Visibility::ALL.iter().map(|option| html! {
                                <option
                                    value={option.as_str()}
                                    selected={*option == pending.visibility}
                                >
                                    {option.as_str()}
                                </option>
                            })}
                        </select>
                    </div>
                    <div>
                        <label class={label_class} for="max-attendees">{"Max attendees"}</label>
                        <input
                            id="max-attendees"
                            type="number"
                            min={requests::MAX_ATTENDEES_MIN.to_string()}
                            max={requests::MAX_ATTENDEES_MAX.to_string()}
                            class={input_class}
                            value={pending.max_attendees.to_string()}
                            onchange={on_max_attendees_change}
                            disabled={controls_disabled}
                        />
                    </div>
                </div>

                <EventPhotoPicker
                    previews={previews}
                    on_select={on_photos_selected}
                    disabled={controls_disabled}
                />

                if let Some(error) = &inline_error {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    </div>
                }

                <div class="flex justify-between items-center pt-2">
                    <button
                        type="button"
                        onclick={on_delete_click}
                        disabled={controls_disabled}
                        class="px-4 py-2 text-sm font-medium text-red-700 \
                               dark:text-red-400 border border-red-300 \
                               dark:border-red-800 rounded-md \
                               hover:bg-red-50 dark:hover:bg-red-900/20 \
                               disabled:opacity-50 disabled:cursor-not-allowed \
                               transition-colors"
                    >
                        {"Delete Event"}
                    </button>
                    <button
                        type="submit"
                        disabled={controls_disabled}
                        class="bg-neutral-900 hover:bg-neutral-800 \
                               dark:bg-neutral-100 dark:text-neutral-900 \
                               dark:hover:bg-neutral-200 text-white px-4 py-2 \
                               rounded-md text-sm font-medium \
                               disabled:opacity-50 disabled:cursor-not-allowed \
                               transition-colors"
                    >
                        {if is_submitting { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>

            if show_delete_modal {
                <ConfirmationModal
                    title="Delete Event"
                    message="The event and its photos will be permanently removed."
                    confirm_text="Delete Event"
                    on_confirm={on_delete_confirm}
                    on_close={on_delete_cancel}
                    is_loading={*is_deleting}
                />
            }
        </div>
    }
}
