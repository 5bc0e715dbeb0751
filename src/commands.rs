//! Operations shared by the one-shot subcommands and the interactive shell.

use std::fs;
use std::path::{Path, PathBuf};

use fridgechef_recipe::{Catalog, card_file_name, to_markdown_card};
use fridgechef_shared::Language;
use fridgechef_shopping::{NutritionCalculator, NutritionTotals};
use time::{Date, OffsetDateTime};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Local calendar date, UTC when the local offset is unavailable.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Loads the catalog named by `--catalog` or the configured path.
pub fn load_catalog(config: &Config, override_path: Option<&Path>) -> AppResult<Catalog> {
    let path = override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.catalog.path));

    Ok(Catalog::load(path)?)
}

/// Reads `name:grams`. The name may itself contain colons; the last one
/// separates the amount.
pub fn parse_nutrition_item(item: &str) -> AppResult<(String, f64)> {
    let Some((name, grams)) = item.rsplit_once(':') else {
        return Err(AppError::Input(format!(
            "expected <ingredient>:<grams>, got {item:?}"
        )));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Input(format!("missing ingredient name in {item:?}")));
    }
    let grams: f64 = grams
        .trim()
        .parse()
        .map_err(|_| AppError::Input(format!("invalid gram amount in {item:?}")))?;
    if !grams.is_finite() {
        return Err(AppError::Input(format!("invalid gram amount in {item:?}")));
    }

    Ok((name.to_string(), grams))
}

pub fn nutrition<S: AsRef<str>>(items: &[S]) -> AppResult<NutritionTotals> {
    let parsed = items
        .iter()
        .map(|item| parse_nutrition_item(item.as_ref()))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(NutritionCalculator::sum(&parsed))
}

/// Markdown card of a catalog row.
pub fn card(catalog: &Catalog, id: u32, lang: Language) -> AppResult<String> {
    let recipe = catalog.require(id)?;
    Ok(to_markdown_card(recipe, lang))
}

/// Writes the card of `id`. When `out` is an existing directory the file is
/// named after the recipe inside it.
pub fn save_card(catalog: &Catalog, id: u32, lang: Language, out: &Path) -> AppResult<PathBuf> {
    let recipe = catalog.require(id)?;
    let path = if out.is_dir() {
        out.join(card_file_name(recipe, lang))
    } else {
        out.to_path_buf()
    };

    fs::write(&path, to_markdown_card(recipe, lang)).map_err(|source| AppError::Output {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(id, path = %path.display(), "recipe card written");

    Ok(path)
}
