pub mod use_event;
pub mod use_events;
pub mod use_fetch;
pub mod use_push_route;

pub use use_event::use_event;
pub use use_events::use_events;
pub use use_fetch::{FetchHookReturn, use_fetch, use_fetch_with_cache};
pub use use_push_route::use_push_route;

/// Distinguishes "never fetched" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(value) => Some(value),
            FetchState::NotFetched => None,
        }
    }
}
