//! HTTP implementation of the likes API
//!
//! Every failure is logged here, at the facade boundary, and then returned to the
//! caller as a classified `LikeError`.

use async_trait::async_trait;
use likes_common::ApiConfig;
use likes_core::{LikeError, LikeId, LikeRecord, LikeResult, LikesApi, MessageId, UserId};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::dto::{CreateLikeRequest, CreateLikeResponse, DeleteLikeResponse, ErrorBody};

/// Client for the `/api/likes` resource
#[derive(Debug, Clone)]
pub struct LikeClient {
    http: Client,
    config: ApiConfig,
}

impl LikeClient {
    /// Build a client with the configured request timeout
    pub fn new(config: ApiConfig) -> LikeResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LikeError::InvalidConfig(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn create(&self, user_id: UserId, message_id: MessageId) -> LikeResult<LikeRecord> {
        let url = self.config.likes_url();
        debug!(%url, %user_id, %message_id, "Creating like");

        let response = self
            .http
            .post(&url)
            .json(&CreateLikeRequest::new(user_id, message_id))
            .send()
            .await
            .map_err(transport_error)?;

        let body: CreateLikeResponse = read_json(response, None).await?;
        Ok(body.likes)
    }

    async fn delete(&self, likes_id: LikeId) -> LikeResult<String> {
        let url = self.config.like_url(likes_id);
        debug!(%url, %likes_id, "Deleting like");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let body: DeleteLikeResponse = read_json(response, Some(likes_id)).await?;
        Ok(body.message)
    }
}

#[async_trait]
impl LikesApi for LikeClient {
    async fn add_likes(&self, user_id: UserId, message_id: MessageId) -> LikeResult<LikeRecord> {
        self.create(user_id, message_id)
            .await
            .inspect_err(|e| log_request_error("POST", &self.config.likes_url(), e))
    }

    async fn remove_likes(&self, likes_id: LikeId) -> LikeResult<String> {
        self.delete(likes_id)
            .await
            .inspect_err(|e| log_request_error("DELETE", &self.config.like_url(likes_id), e))
    }
}

/// Map a failure to get any response at all
fn transport_error(err: reqwest::Error) -> LikeError {
    if err.is_builder() {
        LikeError::InvalidConfig(err.to_string())
    } else {
        LikeError::Network(err.to_string())
    }
}

/// Check the status and decode a success body
///
/// A `404` on a record url becomes `NotFound` so callers can treat an
/// already-deleted like as gone.
async fn read_json<T: DeserializeOwned>(
    response: Response,
    record: Option<LikeId>,
) -> LikeResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| LikeError::Network(e.to_string()))?;

    if !status.is_success() {
        if let Some(likes_id) = record.filter(|_| status == StatusCode::NOT_FOUND) {
            return Err(LikeError::NotFound(likes_id));
        }
        return Err(LikeError::from_status(
            status.as_u16(),
            ErrorBody::message_from(&body),
        ));
    }

    serde_json::from_str(&body).map_err(|e| LikeError::Decode(format!("{e}: {body}")))
}

fn log_request_error(method: &str, url: &str, err: &LikeError) {
    if err.is_not_found() {
        debug!(method, url, code = err.code(), "Like already deleted on server");
        return;
    }

    match err.status() {
        Some(status) => warn!(
            method,
            url,
            status,
            code = err.code(),
            error = %err,
            "Likes API rejected request"
        ),
        None => warn!(
            method,
            url,
            code = err.code(),
            error = %err,
            "Likes API request failed"
        ),
    }
}
