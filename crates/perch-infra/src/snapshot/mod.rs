//! Snapshot store implementations.

mod memory;

pub use memory::InMemorySnapshotStore;
