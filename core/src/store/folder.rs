use crate::api::Folder;
use crate::dispatch::{Phase, Reduce};

/// Latest known folder collection and request status.
#[derive(Debug, Clone, Default)]
pub struct FolderStore {
    pub is_loading: bool,
    pub folders: Vec<Folder>,
    pub error: Option<String>,
}

/// Folder operations, each carried through its lifecycle phase.
#[derive(Debug)]
pub enum FolderAction {
    List(Phase<Vec<Folder>>),
    Create(Phase<Folder>),
    /// Payload is the deleted folder's id.
    Delete(Phase<String>),
    ClearError,
}

impl FolderStore {
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

impl Reduce for FolderStore {
    type Action = FolderAction;

    fn reduce(&mut self, action: FolderAction) {
        match action {
            FolderAction::List(Phase::Pending) => self.is_loading = true,
            FolderAction::List(Phase::Fulfilled(folders)) => {
                self.is_loading = false;
                self.folders = folders;
            }
            FolderAction::List(Phase::Rejected(message)) => self.fail(message),

            FolderAction::Create(Phase::Pending) => self.begin_mutation(),
            FolderAction::Create(Phase::Fulfilled(folder)) => {
                self.is_loading = false;
                self.folders.push(folder);
            }
            FolderAction::Create(Phase::Rejected(message)) => self.fail(message),

            FolderAction::Delete(Phase::Pending) => self.begin_mutation(),
            FolderAction::Delete(Phase::Fulfilled(id)) => {
                self.is_loading = false;
                // Already-absent ids fall through silently.
                self.folders.retain(|folder| folder.id != id);
            }
            FolderAction::Delete(Phase::Rejected(message)) => self.fail(message),

            FolderAction::ClearError => self.error = None,
        }
    }
}
