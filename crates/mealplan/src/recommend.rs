use fridgechef_recipe::Recipe;
use fridgechef_shared::ingredient::Pantry;
use fridgechef_shared::{AllergyFlags, Language};
use serde::Serialize;

/// A catalog row together with its coverage score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub score: usize,
}

/// Count of the recipe's distinct ingredients, in the session language,
/// that the pantry covers.
pub fn coverage(recipe: &Recipe, pantry: &Pantry, lang: Language) -> usize {
    pantry.coverage(recipe.ingredients(lang))
}

/// Recipes free of every enabled allergen, in catalog order. Both ingredient
/// lists are checked.
pub fn allergen_safe(
    recipes: &[Recipe],
    allergies: AllergyFlags,
) -> impl Iterator<Item = &Recipe> {
    recipes.iter().filter(move |recipe| {
        let ingredients: Vec<&String> = recipe.all_ingredients().collect();
        match allergies.violation(&ingredients) {
            Some(allergen) => {
                tracing::trace!(id = recipe.id, %allergen, "excluded by allergen");
                false
            }
            None => true,
        }
    })
}

/// Primary recommendation list.
///
/// With an empty pantry every allergen-safe recipe is returned in catalog
/// order with a score of zero. Otherwise only recipes covering at least one
/// held ingredient are kept, best coverage first; equal scores keep catalog
/// order.
pub fn recommend<'a>(
    recipes: &'a [Recipe],
    pantry: &Pantry,
    allergies: &AllergyFlags,
    lang: Language,
) -> Vec<ScoredRecipe<'a>> {
    let mut scored: Vec<ScoredRecipe<'a>> = allergen_safe(recipes, *allergies)
        .map(|recipe| ScoredRecipe {
            recipe,
            score: coverage(recipe, pantry, lang),
        })
        .collect();

    if !pantry.is_empty() {
        scored.retain(|s| s.score > 0);
        scored.sort_by(|a, b| b.score.cmp(&a.score));
    }

    tracing::debug!(
        catalog = recipes.len(),
        matched = scored.len(),
        held = pantry.held().len(),
        "recommendations computed"
    );

    scored
}
