use fridgechef_shared::Language;
use rust_i18n::t;

use crate::types::{Nutrition, Recipe};

/// `"350 kcal / P25g / F20g / C18g"`
pub fn format_nutrition(nutrition: &Nutrition) -> String {
    format!(
        "{} kcal / P{}g / F{}g / C{}g",
        nutrition.kcal, nutrition.protein, nutrition.fat, nutrition.carbs
    )
}

/// Renders the downloadable markdown card of a recipe.
pub fn to_markdown_card(recipe: &Recipe, lang: Language) -> String {
    let locale = lang.code();
    let mut lines = Vec::new();

    lines.push(format!("# {}", recipe.name(lang)));
    lines.push(format!(
        "- {}: {}",
        t!("card.category", locale = locale),
        recipe.category
    ));
    let difficulty = match &recipe.difficulty {
        Some(difficulty) => difficulty.clone(),
        None => t!("card.default_difficulty", locale = locale).to_string(),
    };
    lines.push(format!(
        "- {}: {}",
        t!("card.difficulty", locale = locale),
        difficulty
    ));
    lines.push(format!(
        "- {}: {}",
        t!("card.per_serving", locale = locale),
        format_nutrition(&recipe.nutrition)
    ));

    lines.push(format!("\n## {}", t!("card.ingredients", locale = locale)));
    for ingredient in recipe.ingredients(lang) {
        lines.push(format!("- {ingredient}"));
    }

    lines.push(format!("\n## {}", t!("card.steps", locale = locale)));
    for (i, step) in recipe.steps(lang).iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, step));
    }

    if let Some(benefits) = recipe.benefits(lang) {
        lines.push(format!("\n## {}", t!("card.benefits", locale = locale)));
        lines.push(format!("- {benefits}"));
    }

    lines.join("\n")
}

/// File name offered for the card download.
pub fn card_file_name(recipe: &Recipe, lang: Language) -> String {
    let name: String = recipe
        .name(lang)
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();

    format!("{name}.md")
}
