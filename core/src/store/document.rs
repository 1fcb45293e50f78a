use crate::api::Document;
use crate::dispatch::{Phase, Reduce};

/// Documents of the currently open folder, plus the detail selection.
///
/// `document` holds the full document being viewed or edited (including
/// content); `documents` holds the folder listing, whose entries omit
/// content. The two are deliberately loosely coupled: an update refreshes
/// the selection only, so a list entry can be stale until the folder is
/// re-fetched.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    pub is_loading: bool,
    pub documents: Vec<Document>,
    pub document: Option<Document>,
    pub error: Option<String>,
}

/// Document operations, each carried through its lifecycle phase.
#[derive(Debug)]
pub enum DocumentAction {
    ListByFolder(Phase<Vec<Document>>),
    Get(Phase<Document>),
    Create(Phase<Document>),
    Update(Phase<Document>),
    /// Payload is the deleted document's id.
    Delete(Phase<String>),
    ClearDocument,
}

impl DocumentStore {
    /// Takes the retained error, clearing it in the same step.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }

    fn begin_mutation(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }
}

impl Reduce for DocumentStore {
    type Action = DocumentAction;

    fn reduce(&mut self, action: DocumentAction) {
        match action {
            DocumentAction::ListByFolder(Phase::Pending) => self.is_loading = true,
            DocumentAction::ListByFolder(Phase::Fulfilled(documents)) => {
                self.is_loading = false;
                self.documents = documents;
                // Switching folders drops the open document.
                self.document = None;
            }
            DocumentAction::ListByFolder(Phase::Rejected(message)) => self.fail(message),

            DocumentAction::Get(Phase::Pending) => self.is_loading = true,
            DocumentAction::Get(Phase::Fulfilled(document)) => {
                self.is_loading = false;
                self.document = Some(document);
            }
            DocumentAction::Get(Phase::Rejected(message)) => self.fail(message),

            DocumentAction::Create(Phase::Pending) => self.begin_mutation(),
            DocumentAction::Create(Phase::Fulfilled(document)) => {
                self.is_loading = false;
                self.documents.push(document.clone());
                self.document = Some(document);
            }
            DocumentAction::Create(Phase::Rejected(message)) => self.fail(message),

            DocumentAction::Update(Phase::Pending) => self.begin_mutation(),
            DocumentAction::Update(Phase::Fulfilled(document)) => {
                self.is_loading = false;
                // The list entry keeps its pre-update content until the
                // folder is listed again.
                self.document = Some(document);
            }
            DocumentAction::Update(Phase::Rejected(message)) => self.fail(message),

            DocumentAction::Delete(Phase::Pending) => self.begin_mutation(),
            DocumentAction::Delete(Phase::Fulfilled(id)) => {
                self.is_loading = false;
                self.documents.retain(|document| document.id != id);
                // The selection survives even if it was the deleted
                // document; see DESIGN.md.
            }
            DocumentAction::Delete(Phase::Rejected(message)) => self.fail(message),

            DocumentAction::ClearDocument => self.document = None,
        }
    }
}
