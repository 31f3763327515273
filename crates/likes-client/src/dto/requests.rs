//! Request DTOs

use likes_core::{MessageId, UserId};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/likes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLikeRequest {
    pub user_id: UserId,
    pub message_id: MessageId,
}

impl CreateLikeRequest {
    pub fn new(user_id: UserId, message_id: MessageId) -> Self {
        Self {
            user_id,
            message_id,
        }
    }
}
