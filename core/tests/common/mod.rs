use std::sync::Mutex;

use async_trait::async_trait;
use inkpad_core::api::{ApiError, Document, DocumentDraft, Folder, Gateway, Result};
use uuid::Uuid;

/// In-memory stand-in for the remote document API.
///
/// Serves canned data, assigns ids the way the server would, and records
/// every call so tests can assert on what reached the gateway. Setting a
/// failure makes every subsequent operation fail with that status and
/// optional message.
#[derive(Default)]
pub struct MockGateway {
    pub folders: Mutex<Vec<Folder>>,
    pub documents: Mutex<Vec<Document>>,
    pub history: Mutex<Vec<Document>>,
    pub calls: Mutex<Vec<String>>,
    failure: Mutex<Option<(u16, Option<String>)>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<Document>) -> Self {
        let mock = Self::default();
        *mock.documents.lock().unwrap() = documents;
        mock
    }

    pub fn fail_with(&self, status: u16, message: Option<&str>) {
        *self.failure.lock().unwrap() = Some((status, message.map(str::to_string)));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn note(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn check_failure(&self) -> Result<()> {
        match self.failure.lock().unwrap().clone() {
            Some((status, Some(message))) => Err(ApiError::Api { status, message }),
            Some((status, None)) => Err(ApiError::Body { status }),
            None => Ok(()),
        }
    }
}

pub fn doc(id: &str, folder_id: &str, title: &str, content: &str) -> Document {
    Document {
        id: id.to_string(),
        folder_id: Some(folder_id.to_string()),
        title: title.to_string(),
        content: Some(content.to_string()),
        ..Document::default()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn list_folders(&self) -> Result<Vec<Folder>> {
        self.note("list_folders");
        self.check_failure()?;
        Ok(self.folders.lock().unwrap().clone())
    }

    async fn create_folder(&self, name: &str) -> Result<Folder> {
        self.note(format!("create_folder:{name}"));
        self.check_failure()?;
        let folder = Folder {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        };
        self.folders.lock().unwrap().push(folder.clone());
        Ok(folder)
    }

    async fn delete_folder(&self, id: &str) -> Result<()> {
        self.note(format!("delete_folder:{id}"));
        self.check_failure()?;
        self.folders.lock().unwrap().retain(|f| f.id != id);
        Ok(())
    }

    async fn list_documents(&self, folder_id: &str) -> Result<Vec<Document>> {
        self.note(format!("list_documents:{folder_id}"));
        self.check_failure()?;
        let documents = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.folder_id.as_deref() == Some(folder_id))
            .cloned()
            .map(|mut d| {
                // List responses omit content.
                d.content = None;
                d
            })
            .collect();
        Ok(documents)
    }

    async fn get_document(&self, id: &str) -> Result<Document> {
        self.note(format!("get_document:{id}"));
        self.check_failure()?;
        self.documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Api {
                status: 404,
                message: format!("Document {id} not found"),
            })
    }

    async fn create_document(&self, draft: &DocumentDraft) -> Result<Document> {
        self.note(format!("create_document:{}", draft.title));
        self.check_failure()?;
        let document = Document {
            id: Uuid::new_v4().to_string(),
            folder_id: Some(draft.folder_id.clone()),
            title: draft.title.clone(),
            content: Some(draft.content.clone()),
            ..Document::default()
        };
        self.documents.lock().unwrap().push(document.clone());
        Ok(document)
    }

    async fn update_document(&self, id: &str, content: &str) -> Result<Document> {
        self.note(format!("update_document:{id}"));
        self.check_failure()?;
        let mut documents = self.documents.lock().unwrap();
        let document = documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| ApiError::Api {
                status: 404,
                message: format!("Document {id} not found"),
            })?;
        document.content = Some(content.to_string());
        Ok(document.clone())
    }

    async fn delete_document(&self, id: &str) -> Result<()> {
        self.note(format!("delete_document:{id}"));
        self.check_failure()?;
        self.documents.lock().unwrap().retain(|d| d.id != id);
        Ok(())
    }

    async fn search_documents(&self, keyword: &str) -> Result<Vec<Document>> {
        self.note(format!("search:{keyword}"));
        self.check_failure()?;
        let hits = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.title.contains(keyword))
            .cloned()
            .collect();
        Ok(hits)
    }

    async fn list_history(&self) -> Result<Vec<Document>> {
        self.note("list_history");
        self.check_failure()?;
        Ok(self.history.lock().unwrap().clone())
    }

    async fn record_history(&self, id: &str, title: &str) -> Result<()> {
        self.note(format!("record_history:{id}"));
        self.check_failure()?;
        self.history.lock().unwrap().push(Document {
            id: id.to_string(),
            title: title.to_string(),
            ..Document::default()
        });
        Ok(())
    }
}
