use payloads::{EventId, responses};
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_fetch},
};

/// Hook to load a single event by ID.
///
/// `Fetched(None)` means the server answered and the event does not
/// exist; callers use that to redirect rather than show an error.
#[hook]
pub fn use_event(
    event_id: EventId,
) -> FetchHookReturn<Option<responses::Event>> {
    use_fetch(event_id, move || async move {
        let api_client = get_api_client();
        api_client
            .get_event(&event_id)
            .await
            .map_err(|e| e.to_string())
    })
}
