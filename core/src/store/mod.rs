//! In-memory resource stores mirroring the remote document store.
//!
//! Each store caches the latest known state of one resource kind and is
//! mutated exclusively by reducing actions, most of which arrive wrapped
//! in the three-phase lifecycle from [`crate::dispatch`].
//!
//! # Core Concepts
//!
//! *   **[`FolderStore`]:** the folder collection. Listing replaces the
//!     collection wholesale; creation appends the server-assigned folder;
//!     deletion removes by id and is a no-op when the id is absent.
//! *   **[`DocumentStore`]:** the documents of the currently open folder
//!     plus a nullable detail selection. Switching folders resets the
//!     selection; updating a document refreshes the selection but leaves
//!     the list entry stale until the folder is re-fetched.
//! *   **[`SearchStore`]:** the latest search results in server order.
//!     Clearing is synchronous and bypasses the request lifecycle.
//! *   **[`HistoryStore`]:** the recently-viewed ring buffer, newest
//!     first, capped at [`HISTORY_CAPACITY`] entries with the oldest
//!     evicted on overflow. Repeat views produce repeat entries.
//!
//! # Status and errors
//!
//! Every store carries `is_loading` (true while a request of its kind is
//! in flight) and `error` (at most one retained message; a new error
//! overwrites the previous one, and `take_error` clears it in the same
//! step it is read, so a displayed error cannot linger as stale state).
//!
//! All stores start empty and live only for the process; they are a cache
//! of the remote source of truth, never persisted.

pub use self::document::{DocumentAction, DocumentStore};
pub use self::folder::{FolderAction, FolderStore};
pub use self::history::{HISTORY_CAPACITY, HistoryAction, HistoryStore};
pub use self::search::{SearchAction, SearchStore};

mod document;
mod folder;
mod history;
mod search;
