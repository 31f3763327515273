//! # likes-core
//!
//! Domain layer containing the like record, the explicit toggle state of a like form,
//! the error taxonomy, and the `LikesApi` port implemented by the HTTP client.
//! This crate has zero dependencies on infrastructure (HTTP client, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{LikeForm, LikeIcon, LikeRecord, LikeState};
pub use error::{LikeError, LikeResult};
pub use traits::LikesApi;
pub use value_objects::{DeleteFailurePolicy, IdParseError, LikeId, MessageId, UserId};
