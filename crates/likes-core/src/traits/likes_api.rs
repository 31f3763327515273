//! Likes API port
//!
//! The toggle logic only needs two remote operations. The HTTP client implements
//! this trait; tests substitute an in-memory double.

use async_trait::async_trait;

use crate::entities::LikeRecord;
use crate::error::LikeResult;
use crate::value_objects::{LikeId, MessageId, UserId};

#[async_trait]
pub trait LikesApi: Send + Sync {
    /// Create a like linking the user to the message
    async fn add_likes(&self, user_id: UserId, message_id: MessageId) -> LikeResult<LikeRecord>;

    /// Delete the like record, returning the server's confirmation message
    async fn remove_likes(&self, likes_id: LikeId) -> LikeResult<String>;
}
