//! Three-phase request lifecycle shared by all resource stores.
//!
//! Every remote operation runs through the same shape: a `Pending` action
//! is applied to the owning store synchronously, the gateway future is
//! awaited, and the outcome lands as `Fulfilled` or `Rejected`. Errors
//! never escape [`dispatch`]; they are folded into the store's retained
//! error message.
//!
//! There is no retry, no cancellation, and no deduplication at this layer.
//! Two overlapping dispatches against the same store interleave freely and
//! the last completion wins, which is accepted behavior for this client.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

use crate::api::Result as ApiResult;

/// One asynchronous operation's lifecycle, as seen by a store reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

/// A resource store: plain state mutated only by reducing actions.
pub trait Reduce {
    type Action;

    fn reduce(&mut self, action: Self::Action);
}

/// Shared handle to a store, cloneable across tasks.
///
/// The stores are only ever touched from short critical sections (apply an
/// action, take a snapshot), never across an await point holding the lock.
#[derive(Debug, Default)]
pub struct Shared<S>(Arc<Mutex<S>>);

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Shared(self.0.clone())
    }
}

impl<S> Shared<S> {
    pub fn new(store: S) -> Self {
        Shared(Arc::new(Mutex::new(store)))
    }

    /// Locks the store for direct inspection or a synchronous action.
    pub async fn lock(&self) -> MutexGuard<'_, S> {
        self.0.lock().await
    }
}

impl<S: Reduce> Shared<S> {
    /// Applies a single action to the store.
    pub async fn apply(&self, action: S::Action) {
        self.0.lock().await.reduce(action);
    }
}

impl<S: Clone> Shared<S> {
    /// Clones the current state for inspection.
    pub async fn snapshot(&self) -> S {
        self.0.lock().await.clone()
    }
}

/// Runs one remote operation through the pending/fulfilled/rejected
/// lifecycle against `store`.
///
/// The pending action is applied before `call` is first polled. On failure
/// the server-supplied message is preferred; `fallback` is used when the
/// failure carried none (transport errors, unreadable error bodies).
pub async fn dispatch<S, T, F>(
    store: &Shared<S>,
    fallback: &str,
    call: F,
    wrap: impl Fn(Phase<T>) -> S::Action,
) where
    S: Reduce,
    F: Future<Output = ApiResult<T>>,
{
    store.apply(wrap(Phase::Pending)).await;
    match call.await {
        Ok(value) => store.apply(wrap(Phase::Fulfilled(value))).await,
        Err(err) => {
            warn!(error = %err, "Remote operation failed: {}", fallback);
            let message = err
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string());
            store.apply(wrap(Phase::Rejected(message))).await;
        }
    }
}
