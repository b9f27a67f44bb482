mod handlers;

pub use handlers::{health, root, SERVICE_NAME};
