use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::Visibility;

pub const TITLE_MAX_LEN: usize = 255;
pub const LOCATION_MAX_LEN: usize = 255;
pub const MAX_ATTENDEES_MIN: u32 = 1;
pub const MAX_ATTENDEES_MAX: u32 = 100;

/// Strftime format for event times on the wire and in
/// `<input type="datetime-local">` values. Minute granularity.
pub const EVENT_TIME_FMT: &str = "%Y-%m-%dT%H:%M";

/// A locally selected image, already read to bytes at the input boundary.
///
/// Selection order is meaningful: photos are uploaded (and previewed) in
/// the order the user picked them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Full update payload for an event. Every editable field is carried as a
/// primitive; `photos` is omitted from the request entirely when `None` so
/// the backend retains the existing photo set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub title: String,
    pub description: String,
    pub start: DateTime,
    pub end: DateTime,
    pub location: String,
    pub online: bool,
    pub visibility: Visibility,
    pub max_attendees: u32,
    pub photos: Option<Vec<PhotoUpload>>,
}

impl UpdateEvent {
    /// Text fields of the multipart body, in wire order.
    ///
    /// `online` is always present as canonical `"true"`/`"false"` — the
    /// checkbox presence/absence quirk never reaches the wire.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("start", self.start.strftime(EVENT_TIME_FMT).to_string()),
            ("end", self.end.strftime(EVENT_TIME_FMT).to_string()),
            ("location", self.location.clone()),
            ("online", if self.online { "true" } else { "false" }.into()),
            ("visibility", self.visibility.to_string()),
            ("maxAttendees", self.max_attendees.to_string()),
        ]
    }
}

/// Validation result for an event update, checked at the input boundary
/// before the payload is handed to the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidation {
    Valid,
    TitleRequired,
    TitleTooLong,
    LocationRequired,
    LocationTooLong,
    EndBeforeStart,
    MaxAttendeesOutOfRange,
}

impl EventValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TitleRequired => Some("Title is required"),
            Self::TitleTooLong => {
                Some("Title must be at most 255 characters")
            }
            Self::LocationRequired => Some("Location is required"),
            Self::LocationTooLong => {
                Some("Location must be at most 255 characters")
            }
            Self::EndBeforeStart => {
                Some("End time must not be before the start time")
            }
            Self::MaxAttendeesOutOfRange => {
                Some("Max attendance must be between 1 and 100")
            }
        }
    }
}

/// Validate an event update payload.
///
/// Rules:
/// - title and location non-empty (and within length limits)
/// - end ≥ start
/// - max attendees in [1, 100]
pub fn validate_event(details: &UpdateEvent) -> EventValidation {
    if details.title.trim().is_empty() {
        return EventValidation::TitleRequired;
    }
    if details.title.len() > TITLE_MAX_LEN {
        return EventValidation::TitleTooLong;
    }
    if details.location.trim().is_empty() {
        return EventValidation::LocationRequired;
    }
    if details.location.len() > LOCATION_MAX_LEN {
        return EventValidation::LocationTooLong;
    }
    if details.end < details.start {
        return EventValidation::EndBeforeStart;
    }
    if details.max_attendees < MAX_ATTENDEES_MIN
        || details.max_attendees > MAX_ATTENDEES_MAX
    {
        return EventValidation::MaxAttendeesOutOfRange;
    }
    EventValidation::Valid
}
