mod render;
mod state;

pub use render::render;
pub use state::{HEALTH_POLL_INTERVAL, HealthState, ServerStatus};
