//! # Perch Core
//!
//! The domain layer of the Perch timeline client.
//! Posts, cursors, the timeline pager and the ports it talks through.
//! No HTTP, no terminal: adapters live in `perch-infra` and the app.

pub mod domain;
pub mod error;
pub mod ports;
pub mod timeline;

pub use error::{ComposeError, FetchError, SnapshotError};
pub use timeline::{FetchOutcome, ScrollTracker, TimelinePager};
