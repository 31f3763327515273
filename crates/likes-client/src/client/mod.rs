//! Likes API clients

mod http;

pub use http::LikeClient;
