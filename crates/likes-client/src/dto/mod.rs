//! Data transfer objects for the likes API
//!
//! Request bodies sent to `/api/likes` and the response envelopes it answers with.

pub mod requests;
pub mod responses;

pub use requests::CreateLikeRequest;
pub use responses::{CreateLikeResponse, DeleteLikeResponse, ErrorBody};
