use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, use_fetch_with_cache},
};

/// Hook to manage the event list with lazy loading and global state caching
#[hook]
pub fn use_events() -> FetchHookReturn<Vec<responses::Event>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();
    let fetch_dispatch = dispatch.clone();

    use_fetch_with_cache(
        (),
        move || get_cached_state.get_events().as_ref().cloned(),
        move || !should_fetch_state.has_events_loaded(),
        move || {
            let dispatch = fetch_dispatch.clone();
            async move {
                let api_client = get_api_client();
                let events = api_client
                    .get_events()
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| {
                    s.set_events(events.clone());
                });
                Ok(events)
            }
        },
    )
}
