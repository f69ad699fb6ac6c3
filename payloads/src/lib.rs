use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod requests;
pub mod responses;

mod api_client;
pub use api_client::{APIClient, ClientError, ok_body, ok_empty};

/// Identifier for a calendar event. Opaque and stable for the lifetime of
/// the event; the server is the source of truth for its value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct EventId(pub Uuid);

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EventId(Uuid::from_str(s)?))
    }
}

/// Who can see an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub const ALL: [Visibility; 2] = [Visibility::Public, Visibility::Private];

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        }
    }

    /// Parses the value of the visibility form control.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "Public" => Some(Visibility::Public),
            "Private" => Some(Visibility::Private),
            _ => None,
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
