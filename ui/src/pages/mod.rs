pub mod edit_event;
pub mod event_detail;
pub mod events;
pub mod not_found;

pub use edit_event::EditEventPage;
pub use event_detail::EventDetailPage;
pub use events::EventsPage;
pub use not_found::NotFoundPage;
