//! Ports - interfaces the domain needs from the outside world

mod likes_api;

pub use likes_api::LikesApi;
