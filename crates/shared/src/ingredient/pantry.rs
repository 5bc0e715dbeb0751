use std::collections::BTreeSet;

use serde::Serialize;

use super::{expand_synonyms, normalize, split_entries};

/// Ingredients the user has on hand.
///
/// `held` is the normalized entry set; `matchable` adds synonyms and is what
/// recipe ingredients are compared against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pantry {
    entries: Vec<String>,
    held: BTreeSet<String>,
    matchable: BTreeSet<String>,
}

impl Pantry {
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Self {
        let entries: Vec<String> = entries
            .iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        let normalized: Vec<String> = entries
            .iter()
            .map(|e| normalize(e))
            .filter(|n| !n.is_empty())
            .collect();
        let matchable = expand_synonyms(&normalized);
        let held = normalized.into_iter().collect();

        Self {
            entries,
            held,
            matchable,
        }
    }

    /// Parses comma-separated free text, expiry annotations included.
    pub fn parse(text: &str) -> Self {
        Self::new(&split_entries(text))
    }

    /// Keeps only the entries picked in `selected`, compared after
    /// normalization. Picks that are not existing entries are ignored.
    pub fn refine<S: AsRef<str>>(&self, selected: &[S]) -> Self {
        let picked: BTreeSet<String> = selected.iter().map(|s| normalize(s.as_ref())).collect();
        let kept: Vec<&String> = self
            .entries
            .iter()
            .filter(|entry| picked.contains(&normalize(entry)))
            .collect();

        Self::new(&kept)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn held(&self) -> &BTreeSet<String> {
        &self.held
    }

    pub fn matchable(&self) -> &BTreeSet<String> {
        &self.matchable
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Whether a catalog ingredient is covered by what the user holds.
    pub fn covers(&self, ingredient: &str) -> bool {
        self.matchable.contains(&normalize(ingredient))
    }

    /// Number of distinct ingredients of the list covered by the pantry.
    pub fn coverage<S: AsRef<str>>(&self, ingredients: &[S]) -> usize {
        ingredients
            .iter()
            .map(|i| normalize(i.as_ref()))
            .filter(|n| self.matchable.contains(n))
            .collect::<BTreeSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_raw_entries() {
        let pantry = Pantry::parse("두부(내일 만료), 대파,  ");
        assert_eq!(pantry.entries(), &["두부(내일 만료)", "대파"]);
        assert!(pantry.held().contains("두부"));
        assert!(pantry.matchable().contains("tofu"));
    }

    #[test]
    fn test_empty_input() {
        assert!(Pantry::parse(" , ").is_empty());
        assert!(Pantry::default().is_empty());
    }

    #[test]
    fn test_coverage_counts_distinct_matches() {
        let pantry = Pantry::parse("두부, 대파");
        assert_eq!(pantry.coverage(&["두부", "대파", "간장"]), 2);
        assert_eq!(pantry.coverage(&["Tofu", "tofu", "Green Onion"]), 2);
        assert_eq!(pantry.coverage(&["감자"]), 0);
    }

    #[test]
    fn test_refine_keeps_selected_entries() {
        let pantry = Pantry::parse("두부, 대파, 김치");
        let refined = pantry.refine(&["대파", "없는재료"]);

        assert_eq!(refined.entries(), &["대파"]);
        assert!(!refined.covers("두부"));
        assert!(refined.covers("scallion"));
    }
}
