//! Like form - the per-message UI element carrying the toggle state

use crate::entities::{LikeIcon, LikeState};
use crate::value_objects::{LikeId, MessageId, UserId};

/// A like form rendered next to a message
///
/// The icon is never set directly; every mutation goes through the state so
/// the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeForm {
    message_id: MessageId,
    user_id: UserId,
    state: LikeState,
    icon: LikeIcon,
}

impl LikeForm {
    /// Create an unliked form
    pub fn new(message_id: MessageId, user_id: UserId) -> Self {
        Self::with_state(message_id, user_id, LikeState::Unliked)
    }

    /// Create a form that already carries a like marker
    pub fn liked(message_id: MessageId, user_id: UserId, likes_id: LikeId) -> Self {
        Self::with_state(message_id, user_id, LikeState::Liked(likes_id))
    }

    /// Create a form in an arbitrary state
    pub fn with_state(message_id: MessageId, user_id: UserId, state: LikeState) -> Self {
        Self {
            message_id,
            user_id,
            state,
            icon: state.icon(),
        }
    }

    #[inline]
    pub fn message_id(&self) -> MessageId {
        self.message_id
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn state(&self) -> LikeState {
        self.state
    }

    #[inline]
    pub fn icon(&self) -> LikeIcon {
        self.icon
    }

    /// The like id marker, if the form is liked
    #[inline]
    pub fn likes_id(&self) -> Option<LikeId> {
        self.state.likes_id()
    }

    #[inline]
    pub fn is_liked(&self) -> bool {
        self.state.is_liked()
    }

    /// Attach a like marker and switch to the filled icon
    pub fn mark_liked(&mut self, likes_id: LikeId) {
        self.set_state(LikeState::Liked(likes_id));
    }

    /// Remove the like marker and switch to the outline icon
    pub fn clear_marker(&mut self) {
        self.set_state(LikeState::Unliked);
    }

    fn set_state(&mut self, state: LikeState) {
        self.state = state;
        self.icon = state.icon();
    }
}
