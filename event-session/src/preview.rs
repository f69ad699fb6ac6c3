use payloads::requests::PhotoUpload;

/// A display-ready photo preview.
///
/// `releasable` marks URLs owned by the session (created for a local file)
/// that must be revoked when superseded or when the session ends. Server
/// photo URLs are plain strings and are never revoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub display_url: String,
    pub releasable: bool,
}

/// Creates and revokes display URLs for locally selected files.
///
/// The UI backs this with browser object URLs; tests back it with a
/// counting fake so the release discipline is checkable natively.
pub trait PreviewUrlFactory {
    fn create(&self, file: &PhotoUpload) -> String;
    fn revoke(&self, url: &str);
}

/// Owns the active preview list.
///
/// Invariant: exactly one entry per photo currently under consideration —
/// server paths or local files, never a mix. Deriving a new list fully
/// replaces the old one, revoking each owned URL exactly once before the
/// replacement is installed. Outstanding owned URLs are revoked on drop,
/// which covers every session exit path.
pub struct PreviewManager<F: PreviewUrlFactory> {
    factory: F,
    media_origin: String,
    entries: Vec<PreviewEntry>,
}

impl<F: PreviewUrlFactory> PreviewManager<F> {
    pub fn new(factory: F, media_origin: impl Into<String>) -> Self {
        Self {
            factory,
            media_origin: media_origin.into(),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[PreviewEntry] {
        &self.entries
    }

    /// Derives one non-releasable entry per server-relative photo path.
    pub fn show_server_photos(&mut self, paths: &[String]) {
        self.release_owned();
        self.entries = paths
            .iter()
            .map(|path| PreviewEntry {
                display_url: format!("{}{}", self.media_origin, path),
                releasable: false,
            })
            .collect();
    }

    /// Derives one owned, releasable entry per selected file, in selection
    /// order.
    pub fn show_local_files(&mut self, files: &[PhotoUpload]) {
        self.release_owned();
        self.entries = files
            .iter()
            .map(|file| PreviewEntry {
                display_url: self.factory.create(file),
                releasable: true,
            })
            .collect();
    }

    /// Revokes owned URLs. Must complete before a replacement list is
    /// installed; draining the list first makes a double revoke impossible.
    fn release_owned(&mut self) {
        for entry in self.entries.drain(..) {
            if entry.releasable {
                self.factory.revoke(&entry.display_url);
            }
        }
    }
}

impl<F: PreviewUrlFactory> Drop for PreviewManager<F> {
    fn drop(&mut self) {
        self.release_owned();
    }
}
