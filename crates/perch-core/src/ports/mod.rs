//! Ports - trait definitions for the pager's collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod client;
mod display;
mod snapshot;

pub use client::TimelineClient;
pub use display::TimelineDisplay;
pub use snapshot::SnapshotStore;
