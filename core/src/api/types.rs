use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A text document as known to the remote store.
///
/// `id` is server-assigned and stable once issued. `content` is markdown
/// text and is absent in list responses; it is loaded by fetching the
/// document by id. `snippet` appears only in search results, and
/// `timestamp` is set client-side (epoch milliseconds) when the document
/// enters the recently-viewed history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// A named container for documents.
///
/// Documents refer back to their folder via [`Document::folder_id`]; the
/// folder itself holds no document instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
}

/// Request body for creating a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    pub title: String,
    pub content: String,
    pub folder_id: String,
}
