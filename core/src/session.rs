//! The per-run application state object.
//!
//! A [`Session`] bundles the four resource stores with the gateway they
//! are fed from. Construct exactly one per application run and hand it to
//! whatever drives the UI; there are no hidden globals. Every method is a
//! UI intent mapped onto one dispatched remote operation (or one
//! synchronous store action), mirroring how the stores expect to be
//! mutated.

use std::sync::Arc;

use futures::future;
use tracing::{debug, instrument};

use crate::api::{DocumentDraft, Gateway};
use crate::debounce::{SEARCH_DEBOUNCE, SearchBox};
use crate::dispatch::{Shared, dispatch};
use crate::store::{
    DocumentAction, DocumentStore, FolderAction, FolderStore, HistoryAction, HistoryStore,
    SearchAction, SearchStore,
};

// Fallback messages used when an error response carries no message of its
// own. Wording is part of the client's observable behavior; note that the
// folder-list fallback shares the create wording (see DESIGN.md).
const FAILED_LIST_FOLDERS: &str = "Failed to create folder";
const FAILED_CREATE_FOLDER: &str = "Failed to create folder";
const FAILED_DELETE_FOLDER: &str = "Failed to delete folder";
const FAILED_LIST_BY_FOLDER: &str = "Failed to get documents by folder id";
const FAILED_GET_DOCUMENT: &str = "Failed to get document by id";
const FAILED_CREATE_DOCUMENT: &str = "Failed to create document";
const FAILED_UPDATE_DOCUMENT: &str = "Failed to update document";
const FAILED_DELETE_DOCUMENT: &str = "Failed to delete document";
pub(crate) const FAILED_SEARCH: &str = "Failed to search documents";
const FAILED_LIST_HISTORY: &str = "Failed to get history";
const FAILED_RECORD_HISTORY: &str = "Failed to add document to history";

/// Client state for one application run: the four resource stores and the
/// gateway feeding them.
///
/// All stores start empty; nothing is persisted beyond the process. The
/// stores are public so a UI layer can snapshot or lock them directly.
pub struct Session {
    gateway: Arc<dyn Gateway>,
    pub folders: Shared<FolderStore>,
    pub documents: Shared<DocumentStore>,
    pub search: Shared<SearchStore>,
    pub history: Shared<HistoryStore>,
}

impl Session {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Session {
            gateway,
            folders: Shared::default(),
            documents: Shared::default(),
            search: Shared::default(),
            history: Shared::default(),
        }
    }

    /// Fetches the folder list, replacing the store contents wholesale.
    #[instrument(skip(self))]
    pub async fn load_folders(&self) {
        dispatch(
            &self.folders,
            FAILED_LIST_FOLDERS,
            self.gateway.list_folders(),
            FolderAction::List,
        )
        .await;
    }

    /// Creates a folder and appends it to the list on success.
    #[instrument(skip(self))]
    pub async fn create_folder(&self, name: &str) {
        dispatch(
            &self.folders,
            FAILED_CREATE_FOLDER,
            self.gateway.create_folder(name),
            FolderAction::Create,
        )
        .await;
    }

    /// Deletes a folder. Deleting an id that is no longer listed leaves
    /// the store unchanged.
    #[instrument(skip(self))]
    pub async fn delete_folder(&self, folder_id: &str) {
        dispatch(
            &self.folders,
            FAILED_DELETE_FOLDER,
            async {
                self.gateway
                    .delete_folder(folder_id)
                    .await
                    .map(|()| folder_id.to_string())
            },
            FolderAction::Delete,
        )
        .await;
    }

    /// Opens a folder: fetches its documents and resets the detail
    /// selection.
    #[instrument(skip(self))]
    pub async fn open_folder(&self, folder_id: &str) {
        dispatch(
            &self.documents,
            FAILED_LIST_BY_FOLDER,
            self.gateway.list_documents(folder_id),
            DocumentAction::ListByFolder,
        )
        .await;
    }

    /// Fetches one full document (including content) into the detail
    /// selection.
    #[instrument(skip(self))]
    pub async fn load_document(&self, document_id: &str) {
        dispatch(
            &self.documents,
            FAILED_GET_DOCUMENT,
            self.gateway.get_document(document_id),
            DocumentAction::Get,
        )
        .await;
    }

    /// Opens a document for viewing: fetches the full document and records
    /// the view in the recently-viewed history. The two requests run
    /// concurrently as independent lifecycles on their stores.
    #[instrument(skip(self))]
    pub async fn view_document(&self, document_id: &str, title: &str) {
        future::join(
            self.load_document(document_id),
            self.record_view(document_id, title),
        )
        .await;
    }

    /// Creates a document and selects it on success.
    ///
    /// A blank or whitespace-only title is rejected client-side: no
    /// gateway call is made and no store state changes.
    #[instrument(skip(self, content))]
    pub async fn create_document(&self, title: &str, content: &str, folder_id: &str) {
        if title.trim().is_empty() {
            debug!("Ignoring document creation with blank title");
            return;
        }
        let draft = DocumentDraft {
            title: title.to_string(),
            content: content.to_string(),
            folder_id: folder_id.to_string(),
        };
        dispatch(
            &self.documents,
            FAILED_CREATE_DOCUMENT,
            async { self.gateway.create_document(&draft).await },
            DocumentAction::Create,
        )
        .await;
    }

    /// Replaces a document's content. Only the detail selection picks up
    /// the new content; the folder listing stays as fetched.
    #[instrument(skip(self, content))]
    pub async fn update_document(&self, document_id: &str, content: &str) {
        dispatch(
            &self.documents,
            FAILED_UPDATE_DOCUMENT,
            self.gateway.update_document(document_id, content),
            DocumentAction::Update,
        )
        .await;
    }

    /// Deletes a document and removes it from the folder listing.
    #[instrument(skip(self))]
    pub async fn delete_document(&self, document_id: &str) {
        dispatch(
            &self.documents,
            FAILED_DELETE_DOCUMENT,
            async {
                self.gateway
                    .delete_document(document_id)
                    .await
                    .map(|()| document_id.to_string())
            },
            DocumentAction::Delete,
        )
        .await;
    }

    /// Searches immediately, without debouncing. Interactive input should
    /// go through [`Session::search_box`] instead.
    #[instrument(skip(self))]
    pub async fn search(&self, keyword: &str) {
        dispatch(
            &self.search,
            FAILED_SEARCH,
            self.gateway.search_documents(keyword),
            SearchAction::Search,
        )
        .await;
    }

    /// Clears search results synchronously; no request is involved.
    pub async fn clear_search(&self) {
        self.search.apply(SearchAction::Clear).await;
    }

    /// Returns a debounced input handle bound to this session's search
    /// store.
    pub fn search_box(&self) -> SearchBox {
        SearchBox::new(self.gateway.clone(), self.search.clone(), SEARCH_DEBOUNCE)
    }

    /// Fetches the persisted viewing history.
    #[instrument(skip(self))]
    pub async fn load_history(&self) {
        dispatch(
            &self.history,
            FAILED_LIST_HISTORY,
            self.gateway.list_history(),
            HistoryAction::List,
        )
        .await;
    }

    /// Records a document view, pushing it onto the front of the
    /// recently-viewed ring buffer on success.
    #[instrument(skip(self))]
    pub async fn record_view(&self, document_id: &str, title: &str) {
        dispatch(
            &self.history,
            FAILED_RECORD_HISTORY,
            async {
                self.gateway
                    .record_history(document_id, title)
                    .await
                    .map(|()| (document_id.to_string(), title.to_string()))
            },
            HistoryAction::Record,
        )
        .await;
    }

    /// Drops the document detail selection (e.g. when closing the view).
    pub async fn clear_document(&self) {
        self.documents.apply(DocumentAction::ClearDocument).await;
    }
}
