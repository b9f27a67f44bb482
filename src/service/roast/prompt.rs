/// Builds the instruction sent to the model for one set of ingredients.
///
/// The ingredients are embedded verbatim, including empty input.
pub fn build_prompt(ingredients: &str) -> String {
    format!(
        r#"You are a sarcastic, brutally honest celebrity chef.
User ingredients: {ingredients}

1. ROAST the user for owning these ingredients. Be funny and merciless.
2. Then give a REAL, TASTY recipe that uses them, plus common pantry staples.

Return ONLY raw JSON, no markdown and no extra text, with exactly this structure:
{{
    "roast": "The roast text here",
    "recipe_name": "Name of the dish",
    "ingredients_list": ["item 1", "item 2"],
    "instructions": ["step 1", "step 2"]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_ingredients() {
        let prompt = build_prompt("stale bread, ketchup");
        assert!(prompt.contains("User ingredients: stale bread, ketchup\n"));
    }

    #[test]
    fn asks_for_every_recipe_field() {
        let prompt = build_prompt("eggs");
        for key in ["\"roast\"", "\"recipe_name\"", "\"ingredients_list\"", "\"instructions\""] {
            assert!(prompt.contains(key), "prompt is missing {}", key);
        }
        assert!(prompt.contains("Return ONLY raw JSON"));
    }

    #[test]
    fn empty_ingredients_pass_through() {
        let prompt = build_prompt("");
        assert!(prompt.contains("User ingredients: \n"));
    }
}
