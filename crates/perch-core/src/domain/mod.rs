//! Domain entities - the core timeline objects.

mod cursor;
mod post;
mod timeline;

pub use cursor::{Cursor, DEFAULT_SINCE};
pub use post::{Author, CREATED_AT_FORMAT, Post, relative_age};
pub use timeline::{TimelineSnapshot, TimelineState};
