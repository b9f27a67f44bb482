mod handlers;

pub use handlers::generate;
