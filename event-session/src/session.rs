use jiff::civil::DateTime;
use payloads::Visibility;
use payloads::requests::{PhotoUpload, UpdateEvent};
use payloads::responses::Event;

use crate::preview::{PreviewEntry, PreviewManager, PreviewUrlFactory};

/// Where the edit screen is in its lifecycle.
///
/// `Deleted` is terminal; a successful update ends the session by
/// navigation instead, so it has no status of its own. Failures are never
/// terminal — `Error` keeps the loaded event and the user's edits intact
/// so the action can be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Ready,
    Submitting,
    DeleteConfirmPending,
    Deleted,
    Error(String),
}

/// A single edit applied to the pending overlay.
///
/// Values are already typed: boundary parsing (checkbox presence, select
/// values, number inputs) happens in the UI before an edit is constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Title(String),
    Description(String),
    Start(DateTime),
    End(DateTime),
    Location(String),
    Online(bool),
    Visibility(Visibility),
    MaxAttendees(u32),
}

/// User edits layered over the loaded record but not yet persisted.
///
/// Seeded from the record on load so a submission always carries every
/// editable field, edited or not.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEdit {
    pub title: String,
    pub description: String,
    pub start: DateTime,
    pub end: DateTime,
    pub location: String,
    pub online: bool,
    pub visibility: Visibility,
    pub max_attendees: u32,
}

impl PendingEdit {
    fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            start: event.start,
            end: event.end,
            location: event.location.clone(),
            online: event.online,
            visibility: event.visibility,
            max_attendees: event.max_attendees,
        }
    }
}

/// The edit session for one event, from opening the editor to leaving it.
///
/// Pure state plus delegation to [`PreviewManager`]; no network calls
/// originate here. Dropping the session releases any preview URLs it still
/// owns.
pub struct EditSession<F: PreviewUrlFactory> {
    status: SessionStatus,
    event: Option<Event>,
    pending: Option<PendingEdit>,
    selected_files: Vec<PhotoUpload>,
    previews: PreviewManager<F>,
}

impl<F: PreviewUrlFactory> EditSession<F> {
    pub fn new(factory: F, media_origin: impl Into<String>) -> Self {
        Self {
            status: SessionStatus::Loading,
            event: None,
            pending: None,
            selected_files: Vec::new(),
            previews: PreviewManager::new(factory, media_origin),
        }
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// The server-canonical record this session edits, once loaded.
    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingEdit> {
        self.pending.as_ref()
    }

    pub fn selected_files(&self) -> &[PhotoUpload] {
        &self.selected_files
    }

    pub fn previews(&self) -> &[PreviewEntry] {
        self.previews.entries()
    }

    /// The failure reason, when the session is in an error state.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SessionStatus::Error(reason) => Some(reason),
            _ => None,
        }
    }

    /// Installs the loaded record as the baseline: overlay seeded from its
    /// fields, previews seeded from its server photo paths.
    pub fn load_succeeded(&mut self, event: Event) {
        self.pending = Some(PendingEdit::from_event(&event));
        self.previews.show_server_photos(&event.photos);
        self.selected_files.clear();
        self.event = Some(event);
        self.status = SessionStatus::Ready;
    }

    pub fn load_failed(&mut self, reason: impl Into<String>) {
        self.status = SessionStatus::Error(reason.into());
    }

    /// Applies exactly one field edit to the overlay. Ignored until a
    /// record has loaded.
    pub fn edit(&mut self, edit: FieldEdit) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        match edit {
            FieldEdit::Title(value) => pending.title = value,
            FieldEdit::Description(value) => pending.description = value,
            FieldEdit::Start(value) => pending.start = value,
            FieldEdit::End(value) => pending.end = value,
            FieldEdit::Location(value) => pending.location = value,
            FieldEdit::Online(value) => pending.online = value,
            FieldEdit::Visibility(value) => pending.visibility = value,
            FieldEdit::MaxAttendees(value) => pending.max_attendees = value,
        }
    }

    /// Replaces the current file selection and re-derives previews. The
    /// prior owned preview set is fully released before the new one is
    /// installed; a later call always wins.
    ///
    /// Clearing the selection returns previews to server mode: with no
    /// local files a submission retains the stored photos, so those are
    /// the photos under consideration again.
    pub fn select_files(&mut self, files: Vec<PhotoUpload>) {
        let Some(event) = self.event.as_ref() else {
            return;
        };
        if files.is_empty() {
            self.previews.show_server_photos(&event.photos);
        } else {
            self.previews.show_local_files(&files);
        }
        self.selected_files = files;
    }

    /// Builds the full update payload from the overlay. An empty selection
    /// omits the photos field so the backend retains the stored photos; a
    /// non-empty one replaces them, in selection order.
    pub fn update_request(&self) -> Option<UpdateEvent> {
        let pending = self.pending.as_ref()?;
        Some(UpdateEvent {
            title: pending.title.clone(),
            description: pending.description.clone(),
            start: pending.start,
            end: pending.end,
            location: pending.location.clone(),
            online: pending.online,
            visibility: pending.visibility,
            max_attendees: pending.max_attendees,
            photos: if self.selected_files.is_empty() {
                None
            } else {
                Some(self.selected_files.clone())
            },
        })
    }

    /// Marks the update as in flight. Accepted from `Ready` or `Error`
    /// (retries are user-initiated re-submissions).
    pub fn begin_submit(&mut self) -> bool {
        match self.status {
            SessionStatus::Ready | SessionStatus::Error(_) => {
                self.status = SessionStatus::Submitting;
                true
            }
            _ => false,
        }
    }

    /// A failed update is non-destructive: baseline and overlay are left
    /// exactly as they were so no user input is lost.
    pub fn submit_failed(&mut self, reason: impl Into<String>) {
        self.status = SessionStatus::Error(reason.into());
    }

    /// The user asked to delete; nothing destructive happens until they
    /// confirm.
    pub fn request_delete(&mut self) -> bool {
        match self.status {
            SessionStatus::Ready | SessionStatus::Error(_) => {
                self.status = SessionStatus::DeleteConfirmPending;
                true
            }
            _ => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.status == SessionStatus::DeleteConfirmPending {
            self.status = SessionStatus::Ready;
        }
    }

    /// The only gate to the delete operation: returns true iff a
    /// confirmation was actually pending. The status stays
    /// `DeleteConfirmPending` while the delete is in flight.
    pub fn confirm_delete(&mut self) -> bool {
        self.status == SessionStatus::DeleteConfirmPending
    }

    pub fn delete_failed(&mut self, reason: impl Into<String>) {
        self.status = SessionStatus::Error(reason.into());
    }

    pub fn delete_succeeded(&mut self) {
        self.status = SessionStatus::Deleted;
    }
}
