//! Value objects - immutable types that represent domain concepts

mod delete_policy;
mod ids;

pub use delete_policy::DeleteFailurePolicy;
pub use ids::{IdParseError, LikeId, MessageId, UserId};
