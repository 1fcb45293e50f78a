use std::sync::Arc;

use anyhow::Result;
use inkpad_core::markdown::to_plain_text;
use inkpad_core::{HttpGateway, Session};

/// One running instance of the application: a session over the remote
/// store plus terminal presentation of its state.
pub struct Inkpad {
    pub session: Session,
}

impl Inkpad {
    pub fn new(api_url: &str) -> Self {
        let gateway = Arc::new(HttpGateway::new(api_url));
        Inkpad {
            session: Session::new(gateway),
        }
    }

    pub async fn list_folders(&self) -> Result<()> {
        self.session.load_folders().await;
        let state = self.session.folders.snapshot().await;
        if state.folders.is_empty() {
            println!("No folders found.");
        }
        for folder in &state.folders {
            println!("{}  {}", folder.id, folder.name);
        }
        self.flush_alerts().await;
        Ok(())
    }

    pub async fn create_folder(&self, name: &str) -> Result<()> {
        self.session.create_folder(name).await;
        let state = self.session.folders.snapshot().await;
        if let Some(folder) = state.folders.last() {
            println!("Created folder {} ({})", folder.name, folder.id);
        }
        self.flush_alerts().await;
        Ok(())
    }

    pub async fn delete_folder(&self, id: &str) -> Result<()> {
        self.session.delete_folder(id).await;
        self.flush_alerts().await;
        Ok(())
    }

    pub async fn list_documents(&self, folder_id: &str) -> Result<()> {
        self.session.open_folder(folder_id).await;
        let state = self.session.documents.snapshot().await;
        if state.documents.is_empty() {
            println!("No documents found.");
        }
        for document in &state.documents {
            println!("{}  {}", document.id, document.title);
        }
        self.flush_alerts().await;
        Ok(())
    }

    /// Shows the full document and records the view in history, the same
    /// flow as opening a document in a graphical client.
    pub async fn show_document(&self, id: &str) -> Result<()> {
        self.session.load_document(id).await;
        let state = self.session.documents.snapshot().await;
        if let Some(document) = &state.document {
            self.session.record_view(&document.id, &document.title).await;
            println!("{}", document.title);
            if let Some(content) = &document.content {
                println!();
                println!("{}", to_plain_text(content));
            }
        }
        self.flush_alerts().await;
        Ok(())
    }

    pub async fn create_document(&self, title: &str, content: &str, folder_id: &str) -> Result<()> {
        self.session.create_document(title, content, folder_id).await;
        let state = self.session.documents.snapshot().await;
        match &state.document {
            Some(document) => println!("Created document {} ({})", document.title, document.id),
            // A blank title never leaves the client.
            None if title.trim().is_empty() => println!("A document needs a title."),
            None => {}
        }
        self.flush_alerts().await;
        Ok(())
    }

    pub async fn update_document(&self, id: &str, content: &str) -> Result<()> {
        self.session.update_document(id, content).await;
        if let Some(document) = &self.session.documents.snapshot().await.document {
            println!("Updated document {}", document.id);
        }
        self.flush_alerts().await;
        Ok(())
    }

    pub async fn delete_document(&self, id: &str) -> Result<()> {
        self.session.delete_document(id).await;
        self.flush_alerts().await;
        Ok(())
    }

    pub async fn search(&self, query: &str) -> Result<()> {
        self.session.search(query).await;
        let state = self.session.search.snapshot().await;
        if state.documents.is_empty() {
            println!("No documents found.");
        }
        for document in &state.documents {
            match &document.snippet {
                Some(snippet) => println!("{}  {}  {}", document.id, document.title, snippet),
                None => println!("{}  {}", document.id, document.title),
            }
        }
        self.flush_alerts().await;
        Ok(())
    }

    pub async fn show_history(&self) -> Result<()> {
        self.session.load_history().await;
        let state = self.session.history.snapshot().await;
        if state.documents.is_empty() {
            println!("No recently viewed documents.");
        }
        for document in &state.documents {
            println!("{}  {}", document.id, document.title);
        }
        self.flush_alerts().await;
        Ok(())
    }

    /// Prints and clears every retained store error, the terminal
    /// counterpart of the alert toast: once shown, the error state is
    /// gone.
    async fn flush_alerts(&self) {
        let messages = [
            self.session.folders.lock().await.take_error(),
            self.session.documents.lock().await.take_error(),
            self.session.search.lock().await.take_error(),
            self.session.history.lock().await.take_error(),
        ];
        for message in messages.into_iter().flatten() {
            eprintln!("Alert: {message}");
        }
    }
}
