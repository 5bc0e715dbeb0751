//! Text and JSON rendering of command results.

use clap::ValueEnum;
use fridgechef_mealplan::ScoredRecipe;
use fridgechef_recipe::{Recipe, format_nutrition};
use fridgechef_shared::Language;
use fridgechef_shared::ingredient::ExpiringItem;
use fridgechef_shopping::{NutritionTotals, ShoppingList};
use rust_i18n::t;
use serde::Serialize;

use crate::error::AppResult;
use crate::music::MusicLinks;
use crate::recommendation::Recommendation;
use crate::session::Session;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Pretty JSON of `value`, or the text produced by `text`.
    pub fn render<T: Serialize>(
        self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> AppResult<String> {
        match self {
            OutputFormat::Text => Ok(text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

fn heading(title: &str) -> String {
    format!("## {title}")
}

fn recipe_line(scored: &ScoredRecipe<'_>, session: &Session) -> String {
    let locale = session.language.code();
    let recipe = scored.recipe;
    let star = if session.is_favorite(recipe.id) { " ★" } else { "" };
    format!(
        "#{} {}{} · {} · {}",
        recipe.id,
        recipe.name(session.language),
        star,
        t!("report.score", locale = locale, count = scored.score),
        format_nutrition(&recipe.nutrition)
    )
}

pub fn render_expiring(expiring: &[ExpiringItem], lang: Language) -> String {
    let locale = lang.code();
    let items: Vec<String> = expiring
        .iter()
        .map(|item| match item.due {
            Some(due) => format!("{}({due})", item.name),
            None => format!("{}({})", item.name, t!("report.unknown_date", locale = locale)),
        })
        .collect();

    format!("⏰ {}: {}", t!("report.expiring", locale = locale), items.join(", "))
}

pub fn render_shopping(list: &ShoppingList, lang: Language) -> String {
    let locale = lang.code();
    let none = t!("report.none", locale = locale);
    let mut lines = vec![heading(&t!("report.shopping", locale = locale))];

    for (label, names) in [
        ("KR", list.names(Language::Ko)),
        ("EN", list.names(Language::En)),
    ] {
        if names.is_empty() {
            lines.push(format!("{label}: {none}"));
        } else {
            lines.push(format!("{label}: {}", names.join(", ")));
        }
    }

    for item in list.items().iter().filter(|item| !item.substitutes.is_empty()) {
        lines.push(format!(
            "- {} ({}: {})",
            item.name(lang),
            t!("report.substitutes", locale = locale),
            item.substitutes.join(", ")
        ));
    }

    lines.join("\n")
}

/// Meal plan and shopping list only.
pub fn render_plan(result: &Recommendation<'_>, session: &Session) -> String {
    let locale = session.language.code();
    let mut lines = vec![heading(&t!("report.plan", locale = locale))];

    if result.plan.is_empty() {
        lines.push(t!("report.none", locale = locale).to_string());
        return lines.join("\n");
    }
    for (i, scored) in result.plan.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, recipe_line(scored, session)));
    }
    lines.push(String::new());
    lines.push(render_shopping(&result.shopping, session.language));

    lines.join("\n")
}

pub fn render_recommendation(result: &Recommendation<'_>, session: &Session) -> String {
    let locale = session.language.code();
    let mut sections = Vec::new();

    if !result.expiring.is_empty() {
        sections.push(render_expiring(&result.expiring, session.language));
    }
    if !result.plan.is_empty() {
        sections.push(render_plan(result, session));
    }

    let mut lines = vec![format!(
        "{} ({})",
        heading(&t!("report.recommended", locale = locale)),
        t!(
            "report.shown",
            locale = locale,
            shown = result.recipes.len(),
            matched = result.matched
        )
    )];
    if result.recipes.is_empty() {
        lines.push(t!("report.no_results", locale = locale).to_string());
    }
    for scored in &result.recipes {
        lines.push(format!("- {}", recipe_line(scored, session)));
    }
    sections.push(lines.join("\n"));

    sections.join("\n\n")
}

pub fn render_favorites(favorites: &[&Recipe], lang: Language) -> String {
    let locale = lang.code();
    let mut lines = vec![heading(&t!("favorites.title", locale = locale))];

    if favorites.is_empty() {
        lines.push(t!("favorites.empty", locale = locale).to_string());
    }
    for recipe in favorites {
        lines.push(format!("- #{} {}", recipe.id, recipe.name(lang)));
    }

    lines.join("\n")
}

pub fn render_nutrition(totals: &NutritionTotals, lang: Language) -> String {
    let locale = lang.code();
    [
        heading(&t!("nutrition.title", locale = locale)),
        format!("{}: {} kcal", t!("nutrition.kcal", locale = locale), totals.kcal),
        format!("{}: {} g", t!("nutrition.protein", locale = locale), totals.protein),
        format!("{}: {} g", t!("nutrition.fat", locale = locale), totals.fat),
        format!("{}: {} g", t!("nutrition.carbs", locale = locale), totals.carbs),
        format!("{}: {} mg", t!("nutrition.sodium", locale = locale), totals.sodium),
    ]
    .join("\n")
}

pub fn render_music(links: &MusicLinks, lang: Language) -> String {
    format!(
        "{} ({})\n[Spotify]({}) | [YouTube]({})",
        heading(&t!("music.title", locale = lang.code())),
        links.mood,
        links.spotify,
        links.youtube
    )
}

pub fn render_share(link: &str, lang: Language) -> String {
    let locale = lang.code();
    format!(
        "{}\n{link}\n{}",
        heading(&t!("share.title", locale = locale)),
        t!("share.hint", locale = locale)
    )
}
