//! Application state module

mod app_state;
pub mod attachments;
pub mod forms;

pub use app_state::*;
pub use forms::*;
