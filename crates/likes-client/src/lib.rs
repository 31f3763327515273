//! # likes-client
//!
//! Client for the `/api/likes` REST resource and the like toggle controller
//! built on top of it.

pub mod client;
pub mod dto;
pub mod toggle;

use std::sync::Arc;

use likes_common::ApiConfig;
use likes_core::LikeResult;

pub use client::LikeClient;
pub use toggle::{MessageBoard, PageMessage, ToggleHandler, ToggleOutcome};

/// Build a toggle handler backed by the HTTP client
pub fn create_toggle_handler(config: &ApiConfig) -> LikeResult<ToggleHandler> {
    let client = LikeClient::new(config.clone())?;
    Ok(ToggleHandler::new(Arc::new(client))
        .with_delete_failure_policy(config.delete_failure_policy))
}
