pub mod gemini;
pub mod roast_recipe;

pub use gemini::{GenerateContentRequest, GenerateContentResponse};
pub use roast_recipe::{GenerateRequest, RoastRecipe};
