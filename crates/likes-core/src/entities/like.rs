//! Like entity - a user's like on a message, owned by the server

use serde::{Deserialize, Serialize};

use crate::value_objects::{LikeId, MessageId, UserId};

/// Like record as returned by the likes API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRecord {
    pub id: LikeId,
    pub user_id: UserId,
    pub message_id: MessageId,
}

impl LikeRecord {
    /// Create a new LikeRecord
    pub fn new(id: LikeId, user_id: UserId, message_id: MessageId) -> Self {
        Self {
            id,
            user_id,
            message_id,
        }
    }

    /// Check if this record links the given user and message
    #[inline]
    pub fn links(&self, user_id: UserId, message_id: MessageId) -> bool {
        self.user_id == user_id && self.message_id == message_id
    }
}
