use chrono::Utc;

use crate::api::Document;
use crate::dispatch::{Phase, Reduce};

/// Maximum number of recently-viewed entries retained client-side.
pub const HISTORY_CAPACITY: usize = 10;

/// Recently-viewed documents, newest first.
///
/// This is a viewing log, not a unique-visit set: opening the same
/// document twice produces two entries. Overflow evicts from the back.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    pub is_loading: bool,
    pub documents: Vec<Document>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum HistoryAction {
    List(Phase<Vec<Document>>),
    /// Payload is `(id, title)` of the viewed document.
    Record(Phase<(String, String)>),
}

impl HistoryStore {
    /// Takes the retained error, clearing it in the same step.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }
}

impl Reduce for HistoryStore {
    type Action = HistoryAction;

    fn reduce(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::List(Phase::Pending) => self.is_loading = true,
            HistoryAction::List(Phase::Fulfilled(documents)) => {
                self.is_loading = false;
                self.documents = documents;
            }
            HistoryAction::List(Phase::Rejected(message)) => {
                self.is_loading = false;
                self.error = Some(message);
            }

            // Recording a view is ring-buffer bookkeeping; it must not
            // drive the loading flag the way fetches do.
            HistoryAction::Record(Phase::Pending) => {}
            HistoryAction::Record(Phase::Fulfilled((id, title))) => {
                self.documents.insert(
                    0,
                    Document {
                        id,
                        title,
                        timestamp: Some(Utc::now().timestamp_millis()),
                        ..Document::default()
                    },
                );
                self.documents.truncate(HISTORY_CAPACITY);
            }
            HistoryAction::Record(Phase::Rejected(message)) => self.error = Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(store: &mut HistoryStore, id: &str, title: &str) {
        store.reduce(HistoryAction::Record(Phase::Fulfilled((
            id.to_string(),
            title.to_string(),
        ))));
    }

    #[test]
    fn entries_insert_newest_first_with_timestamp() {
        let mut store = HistoryStore::default();
        record(&mut store, "d1", "first");
        record(&mut store, "d2", "second");

        assert_eq!(store.documents[0].id, "d2");
        assert_eq!(store.documents[1].id, "d1");
        assert!(store.documents[0].timestamp.is_some());
    }

    #[test]
    fn eleventh_entry_evicts_the_oldest() {
        let mut store = HistoryStore::default();
        for i in 0..11 {
            record(&mut store, &format!("d{i}"), &format!("title {i}"));
        }

        assert_eq!(store.documents.len(), HISTORY_CAPACITY);
        assert_eq!(store.documents[0].id, "d10");
        assert_eq!(store.documents[9].id, "d1");
        assert!(!store.documents.iter().any(|d| d.id == "d0"));
    }

    #[test]
    fn repeat_views_are_not_deduplicated() {
        let mut store = HistoryStore::default();
        record(&mut store, "d1", "same");
        record(&mut store, "d1", "same");
        assert_eq!(store.documents.len(), 2);
    }

    #[test]
    fn record_does_not_flip_the_loading_flag() {
        let mut store = HistoryStore::default();
        store.reduce(HistoryAction::Record(Phase::Pending));
        assert!(!store.is_loading);
        record(&mut store, "d1", "a");
        assert!(!store.is_loading);
    }

    #[test]
    fn record_rejection_sets_error_only() {
        let mut store = HistoryStore::default();
        store.reduce(HistoryAction::Record(Phase::Rejected("boom".to_string())));
        assert_eq!(store.error.as_deref(), Some("boom"));
        assert!(!store.is_loading);
        assert!(store.documents.is_empty());
    }
}
