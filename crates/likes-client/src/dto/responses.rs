//! Response DTOs

use likes_core::LikeRecord;
use serde::{Deserialize, Serialize};

/// `201` body of `POST /api/likes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLikeResponse {
    pub likes: LikeRecord,
}

/// `200` body of `DELETE /api/likes/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteLikeResponse {
    pub message: String,
}

/// Body of a rejected request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    /// Extract the server's message from a raw error body, falling back to the body itself
    pub fn message_from(body: &str) -> String {
        serde_json::from_str::<Self>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}
