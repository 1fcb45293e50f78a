use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error, instrument};
use url::Url;

use super::types::{Document, DocumentDraft, Folder};
use super::{ApiError, Gateway, Result};

/// HTTP implementation of [`Gateway`] over the remote document API.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway for the API rooted at `base_url`
    /// (e.g. `http://localhost:3000`). Trailing slashes are ignored.
    pub fn new(base_url: &str) -> Self {
        HttpGateway {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a gateway reusing an existing `reqwest` client.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        HttpGateway {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!(target: "inkpad_api", url = %url, "Sending GET request");
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await;
        handle_json(checked(url, response)?).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(target: "inkpad_api", url = %url, "Sending POST request");
        let response = self.client.post(&url).json(body).send().await;
        handle_json(checked(url, response)?).await
    }

    async fn post_unit(&self, path: &str, body: &serde_json::Value) -> Result<()> {
        let url = self.endpoint(path);
        debug!(target: "inkpad_api", url = %url, "Sending POST request");
        let response = self.client.post(&url).json(body).send().await;
        handle_unit(checked(url, response)?).await
    }

    async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(target: "inkpad_api", url = %url, "Sending PATCH request");
        let response = self.client.patch(&url).json(body).send().await;
        handle_json(checked(url, response)?).await
    }

    async fn delete_unit(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path);
        debug!(target: "inkpad_api", url = %url, "Sending DELETE request");
        let response = self.client.delete(&url).send().await;
        handle_unit(checked(url, response)?).await
    }
}

/// Logs and converts transport-level send failures.
fn checked(url: String, response: reqwest::Result<Response>) -> Result<Response> {
    match response {
        Ok(resp) => Ok(resp),
        Err(e) => {
            error!(target: "inkpad_api", url = %url, error = %e, "Request failed");
            Err(ApiError::Request(e))
        }
    }
}

async fn handle_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        match response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(e) => {
                error!(target: "inkpad_api", error = %e, "Failed to deserialize success response");
                Err(ApiError::Request(e))
            }
        }
    } else {
        Err(error_from_body(status.as_u16(), response).await)
    }
}

async fn handle_unit(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        // Body (if any) merely echoes the request; nothing to decode.
        Ok(())
    } else {
        Err(error_from_body(status.as_u16(), response).await)
    }
}

/// Error responses are expected to carry a JSON object with a `message`
/// field, though some endpoints use `error` instead. Either is accepted;
/// `message` wins when both are present.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

async fn error_from_body(status: u16, response: Response) -> ApiError {
    match response.bytes().await {
        Ok(body) => match extract_message(&body) {
            Some(message) => {
                error!(target: "inkpad_api", status, %message, "API returned error status");
                ApiError::Api { status, message }
            }
            None => {
                error!(target: "inkpad_api", status, "API returned error status with unreadable body");
                ApiError::Body { status }
            }
        },
        Err(e) => {
            error!(target: "inkpad_api", status, error = %e, "Failed to read error response body");
            ApiError::Request(e)
        }
    }
}

fn extract_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed.message.or(parsed.error)
}

#[async_trait]
impl Gateway for HttpGateway {
    #[instrument(skip(self))]
    async fn list_folders(&self) -> Result<Vec<Folder>> {
        self.get_json("/api/folders").await
    }

    #[instrument(skip(self))]
    async fn create_folder(&self, name: &str) -> Result<Folder> {
        self.post_json("/api/folders", &json!({ "name": name })).await
    }

    #[instrument(skip(self))]
    async fn delete_folder(&self, id: &str) -> Result<()> {
        self.delete_unit(&format!("/api/folders/{id}")).await
    }

    #[instrument(skip(self))]
    async fn list_documents(&self, folder_id: &str) -> Result<Vec<Document>> {
        self.get_json(&format!("/api/folders/{folder_id}")).await
    }

    #[instrument(skip(self))]
    async fn get_document(&self, id: &str) -> Result<Document> {
        self.get_json(&format!("/api/documents/{id}")).await
    }

    #[instrument(skip(self, draft), fields(title = %draft.title))]
    async fn create_document(&self, draft: &DocumentDraft) -> Result<Document> {
        self.post_json(
            "/api/documents",
            &json!({
                "title": draft.title,
                "content": draft.content,
                "folderId": draft.folder_id,
            }),
        )
        .await
    }

    #[instrument(skip(self, content))]
    async fn update_document(&self, id: &str, content: &str) -> Result<Document> {
        self.patch_json(&format!("/api/documents/{id}"), &json!({ "content": content }))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_document(&self, id: &str) -> Result<()> {
        self.delete_unit(&format!("/api/documents/{id}")).await
    }

    #[instrument(skip(self))]
    async fn search_documents(&self, keyword: &str) -> Result<Vec<Document>> {
        // Keyword goes through the url crate so reserved characters are
        // percent-encoded rather than mangling the query string.
        let mut url = Url::parse(&self.endpoint("/api/search"))?;
        url.query_pairs_mut().append_pair("query", keyword);
        debug!(target: "inkpad_api", url = %url, "Sending search request");
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await;
        handle_json(checked(url.into(), response)?).await
    }

    #[instrument(skip(self))]
    async fn list_history(&self) -> Result<Vec<Document>> {
        self.get_json("/api/history").await
    }

    #[instrument(skip(self))]
    async fn record_history(&self, id: &str, title: &str) -> Result<()> {
        self.post_unit("/api/history", &json!({ "id": id, "title": title }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash_from_base() {
        let gw = HttpGateway::new("http://localhost:3000/");
        assert_eq!(gw.endpoint("/api/folders"), "http://localhost:3000/api/folders");
    }

    #[test]
    fn extract_message_prefers_message_over_error() {
        let body = br#"{"message":"no such folder","error":"other"}"#;
        assert_eq!(extract_message(body).as_deref(), Some("no such folder"));
    }

    #[test]
    fn extract_message_falls_back_to_error_field() {
        let body = br#"{"error":"folder name taken"}"#;
        assert_eq!(extract_message(body).as_deref(), Some("folder name taken"));
    }

    #[test]
    fn extract_message_rejects_non_json_bodies() {
        assert_eq!(extract_message(b"<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_message(br#"{"detail":"unrelated"}"#), None);
    }

    #[test]
    fn search_url_percent_encodes_keyword() {
        let gw = HttpGateway::new("http://localhost:3000");
        let mut url = Url::parse(&gw.endpoint("/api/search")).unwrap();
        url.query_pairs_mut().append_pair("query", "a b&c");
        assert_eq!(url.as_str(), "http://localhost:3000/api/search?query=a+b%26c");
    }
}
