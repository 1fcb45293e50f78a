use crate::api::Document;
use crate::dispatch::{Phase, Reduce};

/// Latest search results, in whatever order the server returned them.
#[derive(Debug, Clone, Default)]
pub struct SearchStore {
    pub is_loading: bool,
    pub documents: Vec<Document>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum SearchAction {
    Search(Phase<Vec<Document>>),
    /// Immediate reset of the result list; no request involved.
    Clear,
}

impl SearchStore {
    /// Takes the retained error, clearing it in the same step.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }
}

impl Reduce for SearchStore {
    type Action = SearchAction;

    fn reduce(&mut self, action: SearchAction) {
        match action {
            SearchAction::Search(Phase::Pending) => self.is_loading = true,
            SearchAction::Search(Phase::Fulfilled(documents)) => {
                self.is_loading = false;
                self.documents = documents;
            }
            SearchAction::Search(Phase::Rejected(message)) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            SearchAction::Clear => self.documents = Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, title: &str) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            snippet: Some(format!("...{title}...")),
            ..Document::default()
        }
    }

    #[test]
    fn results_replace_in_server_order() {
        let mut store = SearchStore::default();
        store.reduce(SearchAction::Search(Phase::Fulfilled(vec![
            hit("d3", "c"),
            hit("d1", "a"),
        ])));
        let ids: Vec<_> = store.documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d3", "d1"]);
    }

    #[test]
    fn clear_empties_immediately() {
        let mut store = SearchStore::default();
        store.reduce(SearchAction::Search(Phase::Fulfilled(vec![hit("d1", "a")])));
        store.reduce(SearchAction::Clear);
        assert!(store.documents.is_empty());
    }

    #[test]
    fn late_fulfillment_still_lands_after_clear() {
        // An in-flight search is never cancelled; if it completes after a
        // clear, its results land. Last writer wins.
        let mut store = SearchStore::default();
        store.reduce(SearchAction::Search(Phase::Pending));
        store.reduce(SearchAction::Clear);
        store.reduce(SearchAction::Search(Phase::Fulfilled(vec![hit("d1", "a")])));
        assert_eq!(store.documents.len(), 1);
    }
}
