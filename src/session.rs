use std::collections::BTreeSet;

use fridgechef_recipe::{Catalog, Recipe};
use fridgechef_shared::ingredient::{Pantry, split_entries};
use fridgechef_shared::{Allergen, AllergyFlags, Language, Mood};

use crate::share::ShareQuery;

/// Everything one user has entered during a run: language, pantry text,
/// refinement, allergy switches, mood, result count and favorites.
///
/// Nothing is persisted. [`Session::reset`] goes back to the state the
/// session was created with, including a seeding share link.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub language: Language,
    pub have: String,
    /// Entries picked out of `have`; `None` keeps every entry.
    pub selection: Option<Vec<String>>,
    pub allergies: AllergyFlags,
    pub mood: Mood,
    pub limit: Option<usize>,
    favorites: BTreeSet<u32>,
    origin: ShareQuery,
    default_language: Language,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self::from_share_query(ShareQuery::default(), language)
    }

    /// Seeds a session from a share link. Missing values fall back to
    /// `default_language` and the default mood.
    pub fn from_share_query(query: ShareQuery, default_language: Language) -> Self {
        Self {
            language: query.language.unwrap_or(default_language),
            have: query.have.join(", "),
            selection: None,
            allergies: query.allergies,
            mood: query.mood.unwrap_or_default(),
            limit: None,
            favorites: BTreeSet::new(),
            origin: query,
            default_language,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::from_share_query(self.origin.clone(), self.default_language);
    }

    /// Replaces the ingredient text. Any refinement of the old text is dropped.
    pub fn set_have(&mut self, text: &str) {
        self.have = text.trim().to_string();
        self.selection = None;
    }

    pub fn set_allergy(&mut self, allergen: Allergen, on: bool) {
        self.allergies.set(allergen, on);
    }

    pub fn entries(&self) -> Vec<String> {
        split_entries(&self.have)
    }

    pub fn pantry(&self) -> Pantry {
        let pantry = Pantry::parse(&self.have);
        match &self.selection {
            Some(selected) => pantry.refine(selected),
            None => pantry,
        }
    }

    /// Flips a favorite and returns whether the recipe is now a favorite.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorite rows in catalog order.
    pub fn favorites<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Recipe> {
        catalog
            .iter()
            .filter(|recipe| self.favorites.contains(&recipe.id))
            .collect()
    }

    pub fn share_query(&self) -> ShareQuery {
        ShareQuery {
            language: Some(self.language),
            have: self.entries(),
            allergies: self.allergies,
            mood: Some(self.mood),
        }
    }
}
