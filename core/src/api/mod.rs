//! Access to the remote document store.
//!
//! The store is a plain resource-oriented HTTP API exchanging JSON bodies.
//! This module defines the wire types ([`Document`], [`Folder`],
//! [`DocumentDraft`]), the [`Gateway`] trait covering every remote
//! operation the client issues, and [`HttpGateway`], the `reqwest`-backed
//! implementation.
//!
//! The gateway layer performs no retries, enforces no timeouts, and never
//! cancels a request once sent; request duration is bounded only by the
//! server's own behavior. Failures of any kind (transport, non-2xx with a
//! structured body, non-2xx without one) surface as [`ApiError`] and are
//! turned into store-level error messages by the dispatcher.

pub use self::http::HttpGateway;
pub use self::types::{Document, DocumentDraft, Folder};

mod http;
mod types;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network or request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response whose body carried a human-readable message.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Non-2xx response whose body carried no usable message.
    #[error("API error (status {status}) with no readable message")]
    Body { status: u16 },

    #[error("Failed to construct request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// The message supplied by the server, if the error body carried one.
    ///
    /// Transport failures and unreadable bodies return `None`; callers fall
    /// back to an operation-specific default string.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

// Define a standard Result type for the API layer
pub type Result<T> = std::result::Result<T, ApiError>;

/// The remote operations the client issues, one method per endpoint.
///
/// Implemented over HTTP by [`HttpGateway`]; tests substitute an in-memory
/// implementation. Deletions return `()` because the server merely echoes
/// the id the client already holds.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn list_folders(&self) -> Result<Vec<Folder>>;
    async fn create_folder(&self, name: &str) -> Result<Folder>;
    async fn delete_folder(&self, id: &str) -> Result<()>;

    /// Lists the documents filed under a folder. Contents are omitted from
    /// list responses; fetch by id to get the full document.
    async fn list_documents(&self, folder_id: &str) -> Result<Vec<Document>>;
    async fn get_document(&self, id: &str) -> Result<Document>;
    async fn create_document(&self, draft: &DocumentDraft) -> Result<Document>;
    async fn update_document(&self, id: &str, content: &str) -> Result<Document>;
    async fn delete_document(&self, id: &str) -> Result<()>;

    async fn search_documents(&self, keyword: &str) -> Result<Vec<Document>>;

    async fn list_history(&self) -> Result<Vec<Document>>;
    async fn record_history(&self, id: &str, title: &str) -> Result<()>;
}
