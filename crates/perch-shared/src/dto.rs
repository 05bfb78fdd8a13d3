//! Data Transfer Objects - the JSON shapes the timeline API speaks.

use serde::{Deserialize, Serialize};

use perch_core::FetchError;
use perch_core::domain::{Author, Post};

/// A user as embedded in a status payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    pub screen_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub profile_image_url_https: Option<String>,
}

/// A status as returned by `home_timeline` and `update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetDto {
    pub id: u64,
    #[serde(alias = "full_text")]
    pub text: String,
    pub created_at: String,
    pub user: UserDto,
}

/// Form body for publishing a status.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest<'a> {
    pub status: &'a str,
}

impl From<UserDto> for Author {
    fn from(dto: UserDto) -> Self {
        Author {
            id: dto.id,
            name: dto.name,
            screen_name: dto.screen_name,
            profile_image_url: dto
                .profile_image_url_https
                .or(dto.profile_image_url)
                .unwrap_or_default(),
        }
    }
}

impl From<TweetDto> for Post {
    fn from(dto: TweetDto) -> Self {
        Post::new(dto.id, dto.user.into(), dto.text, dto.created_at)
    }
}

/// Decode a timeline page, keeping the server's order.
pub fn decode_timeline(body: &str) -> Result<Vec<Post>, FetchError> {
    let tweets: Vec<TweetDto> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(tweets.into_iter().map(Post::from).collect())
}

/// Decode a single status.
pub fn decode_tweet(body: &str) -> Result<Post, FetchError> {
    serde_json::from_str::<TweetDto>(body)
        .map(Post::from)
        .map_err(|e| FetchError::Decode(e.to_string()))
}
