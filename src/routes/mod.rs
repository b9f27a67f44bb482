pub mod route;

pub use route::{configure, configure_with_limit};
