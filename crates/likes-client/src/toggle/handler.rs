//! Toggle handler
//!
//! Applies one submit to a like form: unliked forms create a like, liked forms
//! delete theirs. The form only changes when the remote call allows it.

use std::sync::Arc;

use likes_core::{
    DeleteFailurePolicy, LikeForm, LikeId, LikeRecord, LikeResult, LikeState, LikesApi,
};
use tracing::{info, warn};

/// What a successful submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A like was created and its id attached to the form
    Liked(LikeRecord),
    /// The like was deleted; `message` is the server's confirmation
    Unliked { likes_id: LikeId, message: String },
    /// The like no longer existed on the server
    AlreadyUnliked(LikeId),
}

impl ToggleOutcome {
    /// State the form ended in
    pub fn state(&self) -> LikeState {
        match self {
            Self::Liked(record) => LikeState::Liked(record.id),
            Self::Unliked { .. } | Self::AlreadyUnliked(_) => LikeState::Unliked,
        }
    }
}

/// Submit handler shared by every like form on a page
#[derive(Clone)]
pub struct ToggleHandler {
    api: Arc<dyn LikesApi>,
    delete_failure_policy: DeleteFailurePolicy,
}

impl ToggleHandler {
    pub fn new(api: Arc<dyn LikesApi>) -> Self {
        Self {
            api,
            delete_failure_policy: DeleteFailurePolicy::default(),
        }
    }

    /// Choose what a liked form shows when its delete fails
    #[must_use]
    pub fn with_delete_failure_policy(mut self, policy: DeleteFailurePolicy) -> Self {
        self.delete_failure_policy = policy;
        self
    }

    pub fn delete_failure_policy(&self) -> DeleteFailurePolicy {
        self.delete_failure_policy
    }

    /// Handle a submit on `form`
    ///
    /// On error the form is left as it was, except that a failed delete clears
    /// the marker under `DeleteFailurePolicy::Clear`.
    pub async fn submit(&self, form: &mut LikeForm) -> LikeResult<ToggleOutcome> {
        match form.state() {
            LikeState::Unliked => self.like(form).await,
            LikeState::Liked(likes_id) => self.unlike(form, likes_id).await,
        }
    }

    async fn like(&self, form: &mut LikeForm) -> LikeResult<ToggleOutcome> {
        let record = self.api.add_likes(form.user_id(), form.message_id()).await?;
        form.mark_liked(record.id);

        info!(
            message_id = %form.message_id(),
            likes_id = %record.id,
            "Message liked"
        );
        Ok(ToggleOutcome::Liked(record))
    }

    async fn unlike(&self, form: &mut LikeForm, likes_id: LikeId) -> LikeResult<ToggleOutcome> {
        match self.api.remove_likes(likes_id).await {
            Ok(message) => {
                form.clear_marker();
                info!(message_id = %form.message_id(), %likes_id, "Message unliked");
                Ok(ToggleOutcome::Unliked { likes_id, message })
            }
            Err(e) if e.is_not_found() => {
                form.clear_marker();
                info!(message_id = %form.message_id(), %likes_id, "Like already gone");
                Ok(ToggleOutcome::AlreadyUnliked(likes_id))
            }
            Err(e) => {
                if self.delete_failure_policy.clears_marker() {
                    form.clear_marker();
                }
                warn!(
                    message_id = %form.message_id(),
                    %likes_id,
                    policy = ?self.delete_failure_policy,
                    error = %e,
                    "Unlike failed"
                );
                Err(e)
            }
        }
    }
}
