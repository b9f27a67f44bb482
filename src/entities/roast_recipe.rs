use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub ingredients: String,
}

/// Roast plus recipe produced by the model.
///
/// Every field is required. Model output missing any of them, or carrying
/// the wrong type, is rejected rather than filled with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastRecipe {
    pub roast: String,
    pub recipe_name: String,
    pub ingredients_list: Vec<String>,
    pub instructions: Vec<String>,
}

impl RoastRecipe {
    /// Parses the text the model returned inside its response envelope.
    ///
    /// The text is decoded in two passes so callers can tell output that is
    /// not JSON at all apart from JSON with the wrong shape.
    pub fn from_model_text(text: &str) -> Result<Self, ParseError> {
        let value: serde_json::Value =
            serde_json::from_str(text.trim()).map_err(ParseError::InvalidJson)?;
        serde_json::from_value(value).map_err(ParseError::SchemaMismatch)
    }
}
