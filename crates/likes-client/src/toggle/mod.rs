//! Like toggling - per-form submit handling and the page-level board

mod board;
mod handler;

#[cfg(test)]
pub(crate) mod test_support;

pub use board::{MessageBoard, PageMessage};
pub use handler::{ToggleHandler, ToggleOutcome};
