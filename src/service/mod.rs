pub mod gemini;
pub mod roast;

pub use gemini::{GeminiClient, TextGenerator};
pub use roast::RoastService;
