//! The edit-session core for the event editor.
//!
//! Reconciles three sources of truth — the server-persisted event, locally
//! selected but not-yet-uploaded photos, and pending user edits — as an
//! explicit state machine with no rendering or network dependency. The UI
//! drives transitions and performs the actual HTTP calls; tests drive the
//! same transitions directly.

mod preview;
mod session;

pub use preview::{PreviewEntry, PreviewManager, PreviewUrlFactory};
pub use session::{EditSession, FieldEdit, PendingEdit, SessionStatus};
