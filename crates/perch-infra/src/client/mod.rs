//! Timeline client implementations - REST and in-memory.

mod memory;
#[cfg(feature = "rest")]
mod rest;

pub use memory::InMemoryTimelineClient;
#[cfg(feature = "rest")]
pub use rest::{REQUEST_ID_HEADER, RestConfig, RestTimelineClient};
