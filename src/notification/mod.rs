mod render;
mod state;

pub use render::render;
pub use state::{Notification, NotificationState, NotificationType};
