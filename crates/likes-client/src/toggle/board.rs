//! Message board
//!
//! Holds the like form of every message on a page and delegates submits to the
//! toggle handler. Uses `DashMap` so submits for different messages can run
//! concurrently, while a second submit for a message whose first submit is still
//! in flight is rejected.

use std::collections::HashMap;

use dashmap::{DashMap, DashSet};
use likes_core::{LikeError, LikeForm, LikeId, LikeResult, LikeState, MessageId, UserId};
use tracing::debug;

use super::{ToggleHandler, ToggleOutcome};

/// A message as listed on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMessage {
    pub id: MessageId,
    pub author_id: UserId,
}

impl PageMessage {
    pub fn new(id: MessageId, author_id: UserId) -> Self {
        Self { id, author_id }
    }
}

/// Like forms of one page, keyed by message id
pub struct MessageBoard {
    user_id: UserId,
    handler: ToggleHandler,
    forms: DashMap<MessageId, LikeForm>,
    in_flight: DashSet<MessageId>,
}

impl MessageBoard {
    /// Create an empty board for the current user
    pub fn new(handler: ToggleHandler, user_id: UserId) -> Self {
        Self {
            user_id,
            handler,
            forms: DashMap::new(),
            in_flight: DashSet::new(),
        }
    }

    /// Build the board from page-load data
    ///
    /// `likes_msg_map` maps each message the user already likes to its like id.
    /// The user's own messages get no form.
    pub fn from_page(
        handler: ToggleHandler,
        user_id: UserId,
        messages: impl IntoIterator<Item = PageMessage>,
        likes_msg_map: &HashMap<MessageId, LikeId>,
    ) -> Self {
        let board = Self::new(handler, user_id);

        for message in messages {
            if message.author_id == user_id {
                continue;
            }
            let state = LikeState::from_marker(likes_msg_map.get(&message.id).copied());
            board.insert_form(LikeForm::with_state(message.id, user_id, state));
        }

        debug!(
            user_id = %user_id,
            forms = board.len(),
            liked = board.liked_count(),
            "Message board built"
        );
        board
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Add or replace the form of a message
    pub fn insert_form(&self, form: LikeForm) {
        self.forms.insert(form.message_id(), form);
    }

    /// Snapshot of a message's form
    pub fn form(&self, message_id: MessageId) -> Option<LikeForm> {
        self.forms.get(&message_id).map(|r| r.clone())
    }

    /// Number of forms currently liked
    pub fn liked_count(&self) -> usize {
        self.forms.iter().filter(|r| r.is_liked()).count()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Check if a submit for this message has not finished yet
    pub fn is_in_flight(&self, message_id: MessageId) -> bool {
        self.in_flight.contains(&message_id)
    }

    /// Handle a submit on the form of `message_id`
    pub async fn submit(&self, message_id: MessageId) -> LikeResult<ToggleOutcome> {
        if !self.forms.contains_key(&message_id) {
            return Err(LikeError::UnknownMessage(message_id));
        }
        if !self.in_flight.insert(message_id) {
            debug!(message_id = %message_id, "Submit ignored, previous one still in flight");
            return Err(LikeError::SubmitInFlight(message_id));
        }
        let _guard = InFlightGuard {
            in_flight: &self.in_flight,
            message_id,
        };

        // No map reference may be held across the network call
        let before = self
            .form(message_id)
            .ok_or(LikeError::UnknownMessage(message_id))?;
        let mut form = before.clone();

        let result = self.handler.submit(&mut form).await;
        self.write_back(&before, form);
        result
    }

    /// Store the submitted form unless the slot changed during the call
    fn write_back(&self, before: &LikeForm, form: LikeForm) {
        match self.forms.get_mut(&form.message_id()) {
            Some(mut stored) if *stored == *before => *stored = form,
            _ => debug!(
                message_id = %form.message_id(),
                state = ?form.state(),
                "Form replaced during submit, result dropped"
            ),
        }
    }
}

/// Releases the in-flight marker even if the submit future is dropped
struct InFlightGuard<'a> {
    in_flight: &'a DashSet<MessageId>,
    message_id: MessageId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.remove(&self.message_id);
    }
}
