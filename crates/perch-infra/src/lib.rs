//! # Perch Infrastructure
//!
//! Concrete implementations of the ports defined in `perch-core`.
//!
//! ## Feature Flags
//!
//! - `rest` (default) - HTTP timeline client via reqwest
//! - `minimal` - No network, in-memory only

pub mod client;
pub mod snapshot;

// Re-exports - In-Memory
pub use client::InMemoryTimelineClient;
pub use snapshot::InMemorySnapshotStore;

// Re-exports - REST
#[cfg(feature = "rest")]
pub use client::{RestConfig, RestTimelineClient};
