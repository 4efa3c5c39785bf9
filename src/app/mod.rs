mod events;
mod render;
mod state;

// Re-export public types
pub use state::{App, Tab};
