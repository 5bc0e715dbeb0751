use std::collections::HashSet;

use fridgechef_mealplan::{MealPlanner, ScoredRecipe, coverage, recommend};
use fridgechef_recipe::generator;
use fridgechef_shared::ingredient::{Pantry, expand_synonyms, normalize};
use fridgechef_shared::{Allergen, AllergyFlags, Language};
use strum::VariantArray;

const PANTRIES: &[&str] = &[
    "두부, 대파",
    "tofu, scallion",
    "감자(내일 만료), 양파",
    "계란, 우유, 밀가루",
    "새우(expires today)",
    "고수",
];

#[test]
fn every_recommendation_covers_a_held_ingredient() {
    let catalog = generator::generate(300, 11);

    for text in PANTRIES {
        let pantry = Pantry::parse(text);
        for lang in Language::VARIANTS {
            let result = recommend(catalog.recipes(), &pantry, &AllergyFlags::default(), *lang);
            for scored in &result {
                assert!(scored.score >= 1, "{text:?}: recipe {} scored 0", scored.recipe.id);
            }
        }
    }
}

#[test]
fn tofu_and_green_onion_example() {
    let catalog = generator::generate(300, 5);
    let pantry = Pantry::parse("두부, 대파");
    let accepted = expand_synonyms(&["두부", "대파"]);

    let result = recommend(catalog.recipes(), &pantry, &AllergyFlags::default(), Language::Ko);
    assert!(!result.is_empty());

    for scored in &result {
        let hit = scored
            .recipe
            .ingredients_ko
            .iter()
            .any(|ingredient| accepted.contains(&normalize(ingredient)));
        assert!(hit, "recipe {} has neither 두부 nor 대파", scored.recipe.id);
    }
}

#[test]
fn enabled_allergens_never_reach_the_results() {
    let catalog = generator::generate(300, 9);
    let pantry = Pantry::parse("두부, 감자, 새우, 우유, 계란, 밀가루, 대두");

    for allergen in Allergen::VARIANTS {
        let flags = AllergyFlags::from_allergens([allergen]);
        let result = recommend(catalog.recipes(), &pantry, &flags, Language::Ko);

        for scored in &result {
            for ingredient in scored.recipe.all_ingredients() {
                for trigger in allergen.triggers() {
                    assert!(
                        !ingredient.to_lowercase().contains(trigger),
                        "{allergen} trigger {trigger} found in recipe {}",
                        scored.recipe.id
                    );
                }
            }
        }
    }
}

#[test]
fn greedy_plan_is_distinct_and_best_remaining() {
    let catalog = generator::generate(300, 21);

    for text in PANTRIES {
        let pantry = Pantry::parse(text);
        let flags = AllergyFlags::default();
        let recommended = recommend(catalog.recipes(), &pantry, &flags, Language::Ko);
        let plan = MealPlanner::default().plan(
            &recommended,
            catalog.recipes(),
            &pantry,
            Language::Ko,
        );

        assert!(plan.len() <= 3);
        let ids: HashSet<u32> = plan.iter().map(|s| s.recipe.id).collect();
        assert_eq!(ids.len(), plan.len(), "{text:?}: plan repeats a recipe");

        let mut remaining: Vec<ScoredRecipe<'_>> = if recommended.is_empty() {
            catalog
                .iter()
                .take(100)
                .map(|recipe| ScoredRecipe {
                    recipe,
                    score: coverage(recipe, &pantry, Language::Ko),
                })
                .collect()
        } else {
            recommended.clone()
        };

        for picked in &plan {
            let best = remaining.iter().map(|s| s.score).max().unwrap_or(0);
            assert_eq!(picked.score, best, "{text:?}: pick was not the best remaining");
            remaining.retain(|s| s.recipe.id != picked.recipe.id);
        }
    }
}
