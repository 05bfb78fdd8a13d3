//! Timeline pagination - the pager and the endless-scroll tracker that
//! drives it.

mod pager;
mod scroll;

pub use pager::{FetchOutcome, MAX_POST_LEN, TimelinePager};
pub use scroll::{DEFAULT_VISIBLE_THRESHOLD, ScrollTracker};
