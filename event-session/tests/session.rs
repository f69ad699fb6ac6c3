use std::cell::RefCell;
use std::rc::Rc;

use event_session::{
    EditSession, FieldEdit, PreviewManager, PreviewUrlFactory, SessionStatus,
};
use jiff::civil::date;
use payloads::{EventId, Visibility, requests::PhotoUpload, responses::Event};

const MEDIA_ORIGIN: &str = "http://media.test";

/// Counts every URL it hands out and every revocation, so tests can check
/// the release-exactly-once discipline.
#[derive(Clone, Default)]
struct CountingFactory {
    state: Rc<RefCell<FactoryState>>,
}

#[derive(Default)]
struct FactoryState {
    created: Vec<String>,
    revoked: Vec<String>,
}

impl CountingFactory {
    fn created(&self) -> Vec<String> {
        self.state.borrow().created.clone()
    }

    fn revoked(&self) -> Vec<String> {
        self.state.borrow().revoked.clone()
    }

    /// URLs created but not yet revoked.
    fn outstanding(&self) -> usize {
        let state = self.state.borrow();
        state.created.len() - state.revoked.len()
    }
}

impl PreviewUrlFactory for CountingFactory {
    fn create(&self, file: &PhotoUpload) -> String {
        let mut state = self.state.borrow_mut();
        let url = format!("blob:{}#{}", file.file_name, state.created.len());
        state.created.push(url.clone());
        url
    }

    fn revoke(&self, url: &str) {
        let mut state = self.state.borrow_mut();
        assert!(
            !state.revoked.iter().any(|u| u == url),
            "double revoke of {url}"
        );
        state.revoked.push(url.to_string());
    }
}

fn sample_event(photos: &[&str]) -> Event {
    Event {
        id: EventId(uuid::Uuid::nil()),
        title: "Meetup".into(),
        description: String::new(),
        start: date(2025, 1, 1).at(10, 0, 0, 0),
        end: date(2025, 1, 1).at(12, 0, 0, 0),
        location: "NYC".into(),
        online: false,
        visibility: Visibility::Public,
        max_attendees: 50,
        photos: photos.iter().map(|p| p.to_string()).collect(),
    }
}

fn photo(name: &str) -> PhotoUpload {
    PhotoUpload {
        file_name: name.to_string(),
        content_type: "image/jpeg".into(),
        data: vec![0xff, 0xd8],
    }
}

fn loaded_session(
    photos: &[&str],
) -> (EditSession<CountingFactory>, CountingFactory) {
    let factory = CountingFactory::default();
    let mut session = EditSession::new(factory.clone(), MEDIA_ORIGIN);
    session.load_succeeded(sample_event(photos));
    (session, factory)
}

#[test]
fn loading_derives_one_server_preview_per_photo() {
    let (session, factory) = loaded_session(&["/p/a.jpg", "/p/b.jpg"]);

    assert_eq!(*session.status(), SessionStatus::Ready);
    let previews = session.previews();
    assert_eq!(previews.len(), 2);
    assert_eq!(previews[0].display_url, "http://media.test/p/a.jpg");
    assert_eq!(previews[1].display_url, "http://media.test/p/b.jpg");
    assert!(previews.iter().all(|p| !p.releasable));
    assert!(factory.created().is_empty());
}

#[test]
fn selecting_files_derives_releasable_previews_in_order() {
    let (mut session, factory) = loaded_session(&["/p/a.jpg"]);

    session.select_files(vec![photo("x.png"), photo("y.png")]);

    let previews = session.previews();
    assert_eq!(previews.len(), 2);
    assert!(previews.iter().all(|p| p.releasable));
    assert_eq!(
        previews.iter().map(|p| p.display_url.clone()).collect::<Vec<_>>(),
        factory.created()
    );
    // server entries were replaced, not revoked
    assert!(factory.revoked().is_empty());
}

#[test]
fn reselecting_releases_the_prior_set_exactly_once() {
    let (mut session, factory) = loaded_session(&[]);

    session.select_files(vec![photo("x.png"), photo("y.png")]);
    let first_set = factory.created();

    session.select_files(vec![photo("z.png")]);

    assert_eq!(session.previews().len(), 1);
    assert_eq!(factory.revoked(), first_set);
    assert_eq!(factory.outstanding(), 1);
}

#[test]
fn clearing_the_selection_restores_server_previews() {
    let (mut session, factory) = loaded_session(&["/p/a.jpg"]);

    session.select_files(vec![photo("x.png")]);
    session.select_files(Vec::new());

    // back to server mode: one entry per stored photo, owned URL released
    let previews = session.previews();
    assert_eq!(previews.len(), 1);
    assert_eq!(previews[0].display_url, "http://media.test/p/a.jpg");
    assert!(!previews[0].releasable);
    assert_eq!(factory.outstanding(), 0);

    // and the submission retains the stored photos
    assert_eq!(session.update_request().unwrap().photos, None);
}

#[test]
fn dropping_the_session_releases_outstanding_urls() {
    let (mut session, factory) = loaded_session(&["/p/a.jpg"]);
    session.select_files(vec![photo("x.png"), photo("y.png")]);

    drop(session);

    assert_eq!(factory.outstanding(), 0);
    assert_eq!(factory.revoked().len(), 2);
}

#[test]
fn server_previews_are_never_revoked_on_drop() {
    let (session, factory) = loaded_session(&["/p/a.jpg", "/p/b.jpg"]);
    drop(session);
    assert!(factory.revoked().is_empty());
}

#[test]
fn update_request_omits_photos_without_a_selection() {
    let (session, _) = loaded_session(&["/p/a.jpg"]);
    let request = session.update_request().unwrap();
    assert_eq!(request.photos, None);
    assert_eq!(request.title, "Meetup");
    assert_eq!(request.max_attendees, 50);
}

#[test]
fn update_request_carries_the_selection_in_order() {
    let (mut session, _) = loaded_session(&["/p/a.jpg"]);
    session.select_files(vec![photo("x.png"), photo("y.png")]);

    let request = session.update_request().unwrap();
    let photos = request.photos.unwrap();
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].file_name, "x.png");
    assert_eq!(photos[1].file_name, "y.png");
}

#[test]
fn edits_flow_into_the_update_request() {
    let (mut session, _) = loaded_session(&[]);

    session.edit(FieldEdit::Title("Bigger meetup".into()));
    session.edit(FieldEdit::Online(true));
    session.edit(FieldEdit::Visibility(Visibility::Private));
    session.edit(FieldEdit::MaxAttendees(75));
    session.edit(FieldEdit::End(date(2025, 1, 1).at(14, 30, 0, 0)));

    let request = session.update_request().unwrap();
    assert_eq!(request.title, "Bigger meetup");
    assert!(request.online);
    assert_eq!(request.visibility, Visibility::Private);
    assert_eq!(request.max_attendees, 75);
    assert_eq!(request.end, date(2025, 1, 1).at(14, 30, 0, 0));
    // untouched fields keep their baseline values
    assert_eq!(request.location, "NYC");
}

#[test]
fn edits_before_load_are_ignored() {
    let mut session =
        EditSession::new(CountingFactory::default(), MEDIA_ORIGIN);
    session.edit(FieldEdit::Title("too early".into()));
    session.select_files(vec![photo("x.png")]);

    assert_eq!(*session.status(), SessionStatus::Loading);
    assert!(session.pending().is_none());
    assert!(session.previews().is_empty());
    assert!(session.update_request().is_none());
}

#[test]
fn failed_update_keeps_edits_and_baseline() {
    let (mut session, _) = loaded_session(&["/p/a.jpg"]);
    session.edit(FieldEdit::Title("Edited".into()));

    assert!(session.begin_submit());
    assert_eq!(*session.status(), SessionStatus::Submitting);
    session.submit_failed("conflict");

    assert_eq!(*session.status(), SessionStatus::Error("conflict".into()));
    assert_eq!(session.error(), Some("conflict"));
    assert_eq!(session.pending().unwrap().title, "Edited");
    assert_eq!(session.event().unwrap().title, "Meetup");

    // the user can retry
    assert!(session.begin_submit());
}

#[test]
fn submit_is_rejected_while_already_submitting() {
    let (mut session, _) = loaded_session(&[]);
    assert!(session.begin_submit());
    assert!(!session.begin_submit());
}

#[test]
fn delete_requires_explicit_confirmation() {
    let (mut session, _) = loaded_session(&[]);

    // no confirmation pending yet: the gate stays closed
    assert!(!session.confirm_delete());

    assert!(session.request_delete());
    assert_eq!(*session.status(), SessionStatus::DeleteConfirmPending);
    assert!(session.confirm_delete());
}

#[test]
fn cancelling_the_delete_returns_to_ready() {
    let (mut session, _) = loaded_session(&[]);
    session.request_delete();
    session.cancel_delete();

    assert_eq!(*session.status(), SessionStatus::Ready);
    assert!(!session.confirm_delete());
}

#[test]
fn failed_delete_leaves_the_event_intact() {
    let (mut session, _) = loaded_session(&["/p/a.jpg"]);
    session.request_delete();
    assert!(session.confirm_delete());
    session.delete_failed("forbidden");

    assert_eq!(*session.status(), SessionStatus::Error("forbidden".into()));
    assert!(session.event().is_some());
    assert_eq!(session.previews().len(), 1);
}

#[test]
fn confirmed_delete_reaches_the_terminal_state() {
    let (mut session, _) = loaded_session(&[]);
    session.request_delete();
    assert!(session.confirm_delete());
    session.delete_succeeded();

    assert_eq!(*session.status(), SessionStatus::Deleted);
    // terminal: no further submission or deletion
    assert!(!session.begin_submit());
    assert!(!session.request_delete());
}

#[test]
fn load_failure_is_surfaced_not_swallowed() {
    let mut session =
        EditSession::new(CountingFactory::default(), MEDIA_ORIGIN);
    session.load_failed("event not found");
    assert_eq!(session.error(), Some("event not found"));
}

#[test]
fn preview_manager_full_replacement_never_appends() {
    let factory = CountingFactory::default();
    let mut previews = PreviewManager::new(factory.clone(), MEDIA_ORIGIN);

    previews.show_local_files(&[photo("a.png")]);
    previews.show_server_photos(&["/p/a.jpg".into(), "/p/b.jpg".into()]);

    assert_eq!(previews.entries().len(), 2);
    assert!(previews.entries().iter().all(|e| !e.releasable));
    // the owned local entry was released by the replacement
    assert_eq!(factory.outstanding(), 0);
}
