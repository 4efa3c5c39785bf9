//! Batch translation tab.

mod events;
pub mod export;
mod render;
mod state;

pub use events::handle_key;
pub use render::render;
pub use state::{BatchState, split_batch_input};
