use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::{EventId, Visibility};

/// A calendar event as persisted by the event store.
///
/// Fetched once per editing session and treated as the immutable baseline
/// the pending-edit overlay diffs against. The wire format is camelCase,
/// matching the backend contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    /// Minute-granularity civil times; the store does not track a zone.
    pub start: DateTime,
    pub end: DateTime,
    pub location: String,
    pub online: bool,
    pub visibility: Visibility,
    pub max_attendees: u32,
    /// Server-relative paths, e.g. "/p/a.jpg". Display URLs are formed by
    /// prepending the configured media origin.
    pub photos: Vec<String>,
}
