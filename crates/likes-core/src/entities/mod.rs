//! Domain entities - core business objects

mod like;
mod like_form;
mod like_state;

pub use like::LikeRecord;
pub use like_form::LikeForm;
pub use like_state::{LikeIcon, LikeState};
