use fridgechef_recipe::Recipe;
use fridgechef_shared::Language;
use fridgechef_shared::ingredient::{Pantry, normalize, substitutes};
use serde::Serialize;

/// An ingredient the selected meals need but the pantry does not cover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    pub name_ko: String,
    pub name_en: Option<String>,
    /// How many of the selected recipes call for it.
    pub occurrences: usize,
    pub substitutes: &'static [&'static str],
}

impl ShoppingItem {
    pub fn name(&self, lang: Language) -> &str {
        match lang {
            Language::Ko => self.name_ko.as_str(),
            Language::En => self.name_en.as_deref().unwrap_or(&self.name_ko),
        }
    }
}

/// Missing ingredients of a meal selection, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Collects every (korean, english) ingredient pair of the recipes whose
    /// names are both outside the pantry. Repeats are merged on the
    /// normalized korean name.
    pub fn build<'a>(pantry: &Pantry, recipes: impl IntoIterator<Item = &'a Recipe>) -> Self {
        let mut items: Vec<ShoppingItem> = Vec::new();
        let mut keys: Vec<String> = Vec::new();

        for recipe in recipes {
            for (ko, en) in recipe.ingredient_pairs() {
                let held = pantry.covers(ko) || en.is_some_and(|en| pantry.covers(en));
                if held {
                    continue;
                }

                let key = normalize(ko);
                match keys.iter().position(|k| *k == key) {
                    Some(index) => items[index].occurrences += 1,
                    None => {
                        keys.push(key);
                        items.push(ShoppingItem {
                            name_ko: ko.to_string(),
                            name_en: en.map(str::to_string),
                            occurrences: 1,
                            substitutes: substitutes(ko),
                        });
                    }
                }
            }
        }

        tracing::debug!(missing = items.len(), "shopping list built");

        Self { items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item names in one language, duplicates removed.
    pub fn names(&self, lang: Language) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let name = item.name(lang);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}
