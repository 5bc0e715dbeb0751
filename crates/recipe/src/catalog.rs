use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Nutrition, Recipe};

/// Column layout of the catalog file. List columns hold `|`-separated entries.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogRow {
    id: u32,
    #[serde(default)]
    name_ko: String,
    #[serde(default)]
    name_en: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    ingredients: Option<String>,
    #[serde(default)]
    ingredients_en: Option<String>,
    #[serde(default)]
    steps: Option<String>,
    #[serde(default)]
    steps_en: Option<String>,
    #[serde(default)]
    kcal: Option<f64>,
    #[serde(default)]
    protein: Option<f64>,
    #[serde(default)]
    fat: Option<f64>,
    #[serde(default)]
    carbs: Option<f64>,
    #[serde(default)]
    benefits: Option<String>,
    #[serde(default)]
    benefits_en: Option<String>,
}

fn split_list(value: Option<String>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl From<CatalogRow> for Recipe {
    fn from(row: CatalogRow) -> Self {
        Recipe {
            id: row.id,
            name_ko: row.name_ko.trim().to_string(),
            name_en: row.name_en.trim().to_string(),
            category: row.category.trim().to_string(),
            difficulty: non_blank(row.difficulty),
            ingredients_ko: split_list(row.ingredients),
            ingredients_en: split_list(row.ingredients_en),
            steps_ko: split_list(row.steps),
            steps_en: split_list(row.steps_en),
            nutrition: Nutrition {
                kcal: row.kcal.unwrap_or_default(),
                protein: row.protein.unwrap_or_default(),
                fat: row.fat.unwrap_or_default(),
                carbs: row.carbs.unwrap_or_default(),
            },
            benefits_ko: non_blank(row.benefits),
            benefits_en: non_blank(row.benefits_en),
        }
    }
}

impl From<&Recipe> for CatalogRow {
    fn from(recipe: &Recipe) -> Self {
        CatalogRow {
            id: recipe.id,
            name_ko: recipe.name_ko.clone(),
            name_en: recipe.name_en.clone(),
            category: recipe.category.clone(),
            difficulty: recipe.difficulty.clone(),
            ingredients: Some(recipe.ingredients_ko.join("|")),
            ingredients_en: Some(recipe.ingredients_en.join("|")),
            steps: Some(recipe.steps_ko.join("|")),
            steps_en: Some(recipe.steps_en.join("|")),
            kcal: Some(recipe.nutrition.kcal),
            protein: Some(recipe.nutrition.protein),
            fat: Some(recipe.nutrition.fat),
            carbs: Some(recipe.nutrition.carbs),
            benefits: recipe.benefits_ko.clone(),
            benefits_en: recipe.benefits_en.clone(),
        }
    }
}

/// The recipe table, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Builds a catalog, keeping the first recipe for any repeated id.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let mut seen = HashSet::new();
        let recipes = recipes
            .into_iter()
            .filter(|recipe| {
                let fresh = seen.insert(recipe.id);
                if !fresh {
                    tracing::warn!(id = recipe.id, "duplicate recipe id, keeping first row");
                }
                fresh
            })
            .collect();

        Self { recipes }
    }

    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file, &path.display().to_string())?;

        tracing::info!(path = %path.display(), recipes = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    /// Reads CSV rows. Rows that fail to parse are logged and skipped; I/O
    /// failures abort the load.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> CatalogResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut recipes = Vec::new();
        for (index, result) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = match result {
                Ok(row) => row,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(source, row = index + 1, error = %err, "skipping malformed catalog row");
                    continue;
                }
            };

            let recipe = Recipe::from(row);
            if recipe.ingredients_ko.len() != recipe.ingredients_en.len()
                || recipe.steps_ko.len() != recipe.steps_en.len()
            {
                tracing::warn!(
                    id = recipe.id,
                    "korean and english lists differ in length"
                );
            }
            recipes.push(recipe);
        }

        let catalog = Self::from_recipes(recipes);
        if catalog.is_empty() {
            return Err(CatalogError::Empty(source.to_string()));
        }

        Ok(catalog)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> CatalogResult<()> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_to(file)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> CatalogResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for recipe in &self.recipes {
            csv_writer.serialize(CatalogRow::from(recipe))?;
        }
        csv_writer.flush()?;

        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn require(&self, id: u32) -> CatalogResult<&Recipe> {
        self.get(id).ok_or(CatalogError::NotFound(id))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name_ko,name_en,category,difficulty,ingredients,ingredients_en,steps,steps_en,kcal,protein,fat,carbs,benefits,benefits_en\n";

    #[test]
    fn test_parses_pipe_lists_and_numbers() {
        let data = format!(
            "{HEADER}1,두부 볶음,Stir-fry Tofu,메인,보통,두부| 대파 |,Tofu|Green onion,손질한다.|볶는다.,Prep.|Fry.,350,25,20,18,포만감,Satiety\n"
        );
        let catalog = Catalog::from_reader(data.as_bytes(), "inline").unwrap();

        let recipe = catalog.get(1).unwrap();
        assert_eq!(recipe.ingredients_ko, vec!["두부", "대파"]);
        assert_eq!(recipe.steps_en, vec!["Prep.", "Fry."]);
        assert_eq!(recipe.nutrition.kcal, 350.0);
        assert_eq!(recipe.difficulty.as_deref(), Some("보통"));
        assert_eq!(recipe.benefits_en.as_deref(), Some("Satiety"));
    }

    #[test]
    fn test_empty_fields_default() {
        let data = format!("{HEADER}2,감자 찜,Steamed Potato,메인,,,,,,,,,,,\n");
        let catalog = Catalog::from_reader(data.as_bytes(), "inline").unwrap();

        let recipe = catalog.get(2).unwrap();
        assert!(recipe.ingredients_ko.is_empty());
        assert!(recipe.steps_ko.is_empty());
        assert_eq!(recipe.difficulty, None);
        assert_eq!(recipe.benefits_ko, None);
        assert_eq!(recipe.nutrition, Nutrition::default());
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let data = format!(
            "{HEADER}x,broken,broken,,,,,,,,,,,,\n3,김치 전,Kimchi Pancake,메인,보통,김치,Kimchi,,,300,8,8,35,,\n"
        );
        let catalog = Catalog::from_reader(data.as_bytes(), "inline").unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(3).is_some());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let data = format!(
            "{HEADER}4,first,first,,,,,,,,,,,,\n4,second,second,,,,,,,,,,,,\n"
        );
        let catalog = Catalog::from_reader(data.as_bytes(), "inline").unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(4).unwrap().name_ko, "first");
    }

    #[test]
    fn test_no_rows_is_an_error() {
        let result = Catalog::from_reader(HEADER.as_bytes(), "inline");
        assert!(matches!(result, Err(CatalogError::Empty(_))));
    }

    #[test]
    fn test_require_unknown_id() {
        let data = format!("{HEADER}5,a,a,,,,,,,,,,,,\n");
        let catalog = Catalog::from_reader(data.as_bytes(), "inline").unwrap();

        assert!(matches!(catalog.require(99), Err(CatalogError::NotFound(99))));
    }
}
