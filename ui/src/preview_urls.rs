//! Browser object URLs backing the session's local photo previews.

use event_session::PreviewUrlFactory;
use payloads::requests::PhotoUpload;

/// Creates `blob:` URLs for selected files and revokes them when the
/// session releases the preview. The session core guarantees every created
/// URL is revoked exactly once.
pub struct ObjectUrlFactory;

impl PreviewUrlFactory for ObjectUrlFactory {
    fn create(&self, file: &PhotoUpload) -> String {
        let bytes = js_sys::Uint8Array::from(file.data.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.content_type);
        let blob = match web_sys::Blob::new_with_u8_array_sequence_and_options(
            &parts, &options,
        ) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!("failed to build preview blob: {e:?}");
                return String::new();
            }
        };
        match web_sys::Url::create_object_url_with_blob(&blob) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("failed to create preview URL: {e:?}");
                String::new()
            }
        }
    }

    fn revoke(&self, url: &str) {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
