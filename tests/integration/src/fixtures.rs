//! Test fixtures and the mock likes store
//!
//! Provides the server-side state behind the mock `/api/likes` resource and
//! reusable page data.

use std::collections::HashMap;

use axum::http::StatusCode;
use likes_client::PageMessage;
use likes_core::{LikeId, LikeRecord, MessageId, UserId};

/// Current user of the fixture page
pub const CURRENT_USER: UserId = UserId::new(42);

/// Author of every message on the fixture page except `OWN_MESSAGE`
pub const OTHER_USER: UserId = UserId::new(3);

/// Message written by the current user (rendered without a like form)
pub const OWN_MESSAGE: MessageId = MessageId::new(9);

/// Canned failure the mock answers with instead of doing the operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub status: StatusCode,
    pub message: String,
}

impl Failure {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }
}

/// Like records held by the mock server
#[derive(Debug)]
pub struct MockLikeStore {
    records: HashMap<LikeId, LikeRecord>,
    next_id: i64,
    pub create_failure: Option<Failure>,
    pub delete_failure: Option<Failure>,
    pub create_calls: usize,
    pub delete_calls: usize,
}

impl Default for MockLikeStore {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            next_id: 1,
            create_failure: None,
            delete_failure: None,
            create_calls: 0,
            delete_calls: 0,
        }
    }
}

impl MockLikeStore {
    /// Start numbering new records at `id`
    pub fn starting_at(id: i64) -> Self {
        Self {
            next_id: id,
            ..Self::default()
        }
    }

    /// Insert a like that exists before the page loads
    pub fn seed(&mut self, user_id: UserId, message_id: MessageId) -> LikeRecord {
        let record = LikeRecord::new(LikeId::new(self.next_id), user_id, message_id);
        self.next_id += 1;
        self.records.insert(record.id, record);
        record
    }

    /// Create a like, rejecting a second like of the same message by the same user
    pub fn create(
        &mut self,
        user_id: UserId,
        message_id: MessageId,
    ) -> Result<LikeRecord, Failure> {
        if self.records.values().any(|r| r.links(user_id, message_id)) {
            return Err(Failure::new(
                StatusCode::BAD_REQUEST,
                "duplicate key value violates unique constraint \"likes_pkey\"",
            ));
        }
        Ok(self.seed(user_id, message_id))
    }

    pub fn delete(&mut self, likes_id: LikeId) -> Option<LikeRecord> {
        self.records.remove(&likes_id)
    }

    pub fn get(&self, likes_id: LikeId) -> Option<LikeRecord> {
        self.records.get(&likes_id).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Page-load map of message id to like id for one user
    pub fn likes_msg_map(&self, user_id: UserId) -> HashMap<MessageId, LikeId> {
        self.records
            .values()
            .filter(|r| r.user_id == user_id)
            .map(|r| (r.message_id, r.id))
            .collect()
    }
}

/// Messages listed on the fixture page: 7 and 8 by another user, 9 by the current user
pub fn page_messages() -> Vec<PageMessage> {
    vec![
        PageMessage::new(MessageId::new(7), OTHER_USER),
        PageMessage::new(MessageId::new(8), OTHER_USER),
        PageMessage::new(OWN_MESSAGE, CURRENT_USER),
    ]
}
