//! # Perch Shared
//!
//! Wire types for the timeline REST API and their conversion into domain
//! types.

pub mod dto;
pub mod response;

pub use dto::{TweetDto, UpdateStatusRequest, UserDto, decode_timeline, decode_tweet};
pub use response::{ApiError, ApiErrorResponse};
