use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};

use crate::{EventId, requests, responses};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the event store backend.
pub struct APIClient {
    pub address: String,
    /// Origin prepended to server-relative photo paths. Usually the backend
    /// origin, but photos may be served from a separate media host.
    pub media_address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn multipart_post(&self, path: &str, form: Form) -> ReqwestResult {
        let request =
            self.inner_client.post(self.format_url(path)).multipart(form);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// List all events, most recent first.
    pub async fn get_events(
        &self,
    ) -> Result<Vec<responses::Event>, ClientError> {
        let response = self.empty_get("events").await?;
        ok_body(response).await
    }

    /// Fetch a single event. `Ok(None)` signals the event does not exist.
    pub async fn get_event(
        &self,
        event_id: &EventId,
    ) -> Result<Option<responses::Event>, ClientError> {
        let response = self.empty_get(&format!("events/{event_id}")).await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            _ => Ok(Some(ok_body(response).await?)),
        }
    }

    /// Update an event with a multipart form: every editable field as a
    /// text part, plus one binary part per replacement photo when the
    /// payload carries a new selection.
    ///
    /// The returned record is the canonical post-update event; navigate by
    /// its id, not the request id.
    pub async fn update_event(
        &self,
        event_id: &EventId,
        details: &requests::UpdateEvent,
    ) -> Result<responses::Event, ClientError> {
        let mut form = Form::new();
        for (name, value) in details.text_fields() {
            form = form.text(name, value);
        }
        if let Some(photos) = &details.photos {
            for photo in photos {
                let part = Part::bytes(photo.data.clone())
                    .file_name(photo.file_name.clone())
                    .mime_str(&photo.content_type)?;
                form = form.part("photos", part);
            }
        }

        let response = self
            .multipart_post(&format!("events/{event_id}"), form)
            .await?;
        ok_body(response).await
    }

    /// Delete an event permanently.
    pub async fn delete_event(
        &self,
        event_id: &EventId,
    ) -> Result<(), ClientError> {
        let response =
            self.empty_post(&format!("delete_event/{event_id}")).await?;
        ok_empty(response).await
    }

    /// Returns the display URL for a server-stored photo path.
    /// Use this for `<img src>` attributes in the UI.
    pub fn event_photo_url(&self, path: &str) -> String {
        format!("{}{}", self.media_address, path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
