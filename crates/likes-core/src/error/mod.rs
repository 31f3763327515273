//! Domain errors

mod like_error;

pub use like_error::{LikeError, LikeResult};
