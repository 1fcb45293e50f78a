//! Cancellable delayed dispatch for search-as-you-type.
//!
//! Keystrokes arrive much faster than searches should be issued. The
//! [`Debouncer`] holds each scheduled task back for a fixed quiescence
//! window; scheduling again within the window replaces the held task, so
//! a burst of keystrokes collapses into a single dispatch carrying the
//! latest input value.
//!
//! Cancellation applies only to tasks still waiting out the window. Once
//! a task fires it runs to completion; in particular a search request
//! already sent to the gateway is never cancelled, and whichever request
//! fulfills last wins on the store.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::api::Gateway;
use crate::dispatch::{Shared, dispatch};
use crate::session::FAILED_SEARCH;
use crate::store::{SearchAction, SearchStore};

/// Quiescence window for search-as-you-type.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Delays scheduled work until no new schedule call has arrived for a
/// fixed window. Only the most recently scheduled task runs.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            pending: None,
        }
    }

    /// Schedules `task` to run after the window, cancelling any earlier
    /// task that has not fired yet.
    ///
    /// The task is detached once the window elapses; a later `schedule`
    /// or `cancel` cannot interrupt it mid-run.
    pub fn schedule(&mut self, task: BoxFuture<'static, ()>) {
        self.cancel();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            sleep(window).await;
            tokio::spawn(task);
        }));
    }

    /// Cancels the held task, if any has not fired yet.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    // Pending work dies with its input box, like a timer cleared on
    // teardown.
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Debounced search input bound to a session's search store.
///
/// Feed every keystroke through [`SearchBox::input`]; once input has been
/// quiet for the window, the latest value is dispatched exactly once.
/// Blank or whitespace-only input clears the result list instead of
/// issuing a search.
pub struct SearchBox {
    gateway: Arc<dyn Gateway>,
    store: Shared<SearchStore>,
    debouncer: Debouncer,
}

impl SearchBox {
    pub(crate) fn new(
        gateway: Arc<dyn Gateway>,
        store: Shared<SearchStore>,
        window: Duration,
    ) -> Self {
        SearchBox {
            gateway,
            store,
            debouncer: Debouncer::new(window),
        }
    }

    /// Feeds the current value of the input field.
    pub fn input(&mut self, query: &str) {
        let keyword = query.to_string();
        let gateway = self.gateway.clone();
        let store = self.store.clone();
        self.debouncer.schedule(Box::pin(async move {
            if keyword.trim().is_empty() {
                debug!("Blank search input, clearing results");
                store.apply(SearchAction::Clear).await;
            } else {
                dispatch(
                    &store,
                    FAILED_SEARCH,
                    async { gateway.search_documents(&keyword).await },
                    SearchAction::Search,
                )
                .await;
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn bump(counter: &Arc<AtomicUsize>) -> BoxFuture<'static, ()> {
        let counter = counter.clone();
        Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_the_last_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        for _ in 0..4 {
            debouncer.schedule(bump(&counter));
            sleep(Duration::from_millis(100)).await;
        }
        sleep(Duration::from_millis(700)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_suppresses_a_pending_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(bump(&counter));
        sleep(Duration::from_millis(400)).await;
        debouncer.cancel();
        sleep(Duration::from_millis(700)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn fired_task_is_not_cancelled_by_a_later_schedule() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(500));

        debouncer.schedule(bump(&counter));
        sleep(Duration::from_millis(600)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        debouncer.schedule(bump(&counter));
        sleep(Duration::from_millis(600)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_work() {
        let counter = Arc::new(AtomicUsize::new(0));
        {
            let mut debouncer = Debouncer::new(Duration::from_millis(500));
            debouncer.schedule(bump(&counter));
        }
        sleep(Duration::from_millis(700)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
