//! Recipe generation prompt built from an ingredient list and optional allergies.

/// Render the recipe prompt.
///
/// Ingredients are joined with `", "`. The allergy clause is only emitted when
/// `allergies` is non-empty.
pub fn render_recipe_prompt(ingredients: &[String], allergies: &[String]) -> String {
    let mut prompt = format!(
        r#"Create a detailed, delicious recipe using the following ingredients: {ingredients}.

Please format the recipe with:
- Recipe Name
- Prep Time and Cook Time
- Servings
- Ingredients list with measurements
- Step-by-step instructions
- Any helpful cooking tips

"#,
        ingredients = ingredients.join(", ")
    );

    if !allergies.is_empty() {
        prompt.push_str(&format!(
            "IMPORTANT: This recipe MUST be safe for someone with the following allergies: {}. Do not include these ingredients or any derivatives of them.\n\n",
            allergies.join(", ")
        ));
    }

    prompt.push_str("Make the recipe practical and easy to follow.");
    prompt
}
