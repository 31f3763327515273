//! In-memory `LikesApi` double for handler and board tests

use std::sync::Arc;

use async_trait::async_trait;
use likes_core::{LikeError, LikeId, LikeRecord, LikeResult, LikesApi, MessageId, UserId};
use parking_lot::Mutex;
use tokio::sync::Notify;

type ErrorFactory = Box<dyn Fn() -> LikeError + Send + Sync>;

pub(crate) struct FakeLikesApi {
    next_id: Mutex<i64>,
    delete_message: String,
    add_error: Option<ErrorFactory>,
    remove_error: Option<ErrorFactory>,
    gate: Option<Arc<Notify>>,
    added: Mutex<Vec<(UserId, MessageId)>>,
    removed: Mutex<Vec<LikeId>>,
}

impl FakeLikesApi {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Mutex::new(1),
            delete_message: "Deleted".to_string(),
            add_error: None,
            remove_error: None,
            gate: None,
            added: Mutex::new(Vec::new()),
            removed: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn next_id(self, id: i64) -> Self {
        *self.next_id.lock() = id;
        self
    }

    pub(crate) fn delete_message(mut self, message: &str) -> Self {
        self.delete_message = message.to_string();
        self
    }

    pub(crate) fn fail_add(mut self, err: impl Fn() -> LikeError + Send + Sync + 'static) -> Self {
        self.add_error = Some(Box::new(err));
        self
    }

    pub(crate) fn fail_remove(
        mut self,
        err: impl Fn() -> LikeError + Send + Sync + 'static,
    ) -> Self {
        self.remove_error = Some(Box::new(err));
        self
    }

    /// Hold every call until the gate is notified
    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn added(&self) -> Vec<(UserId, MessageId)> {
        self.added.lock().clone()
    }

    pub(crate) fn removed(&self) -> Vec<LikeId> {
        self.removed.lock().clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl LikesApi for FakeLikesApi {
    async fn add_likes(&self, user_id: UserId, message_id: MessageId) -> LikeResult<LikeRecord> {
        self.wait_for_gate().await;
        self.added.lock().push((user_id, message_id));

        if let Some(err) = &self.add_error {
            return Err(err());
        }

        let mut next_id = self.next_id.lock();
        let id = LikeId::new(*next_id);
        *next_id += 1;
        Ok(LikeRecord::new(id, user_id, message_id))
    }

    async fn remove_likes(&self, likes_id: LikeId) -> LikeResult<String> {
        self.wait_for_gate().await;
        self.removed.lock().push(likes_id);

        match &self.remove_error {
            Some(err) => Err(err()),
            None => Ok(self.delete_message.clone()),
        }
    }
}
