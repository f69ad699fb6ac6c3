use payloads::responses;
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Events listing (managed by use_events) ===
    pub events: FetchState<Vec<responses::Event>>,
}

impl State {
    pub fn has_events_loaded(&self) -> bool {
        self.events.is_fetched()
    }

    pub fn get_events(&self) -> &FetchState<Vec<responses::Event>> {
        &self.events
    }

    pub fn set_events(&mut self, events: Vec<responses::Event>) {
        self.events = FetchState::Fetched(events);
    }

    /// Drops the cached listing so the next visit refetches it. Called
    /// after an update or delete changes what the listing would show.
    pub fn invalidate_events(&mut self) {
        self.events = FetchState::NotFetched;
    }
}
