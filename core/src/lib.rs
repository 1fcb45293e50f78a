//! Client-state library for a remote markdown document store.
//!
//! The remote API owns the data; this crate owns what the client knows
//! about it: four in-memory resource stores (folders, documents, search
//! results, viewing history) kept consistent through a uniform
//! pending/fulfilled/rejected request lifecycle, plus debounced
//! search-as-you-type and a capped recently-viewed list.
//!
//! Construct one [`Session`] per application run and drive it from the
//! UI layer:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use inkpad_core::{HttpGateway, Session};
//!
//! #[tokio::main]
//! async fn main() {
//!     let gateway = Arc::new(HttpGateway::new("http://localhost:3000"));
//!     let session = Session::new(gateway);
//!
//!     session.load_folders().await;
//!     let folders = session.folders.snapshot().await;
//!     println!("{} folders", folders.folders.len());
//! }
//! ```

pub mod api;
pub mod debounce;
pub mod dispatch;
pub mod markdown;
pub mod session;
pub mod store;

pub use api::{ApiError, Gateway, HttpGateway};
pub use session::Session;
