//! Ingredient token handling
//!
//! Free-text entries typed by a user ("두부(내일 만료)", "Green Onion") are
//! normalized and expanded with their synonyms before they are compared to
//! catalog ingredients.

mod expiry;
mod pantry;
mod synonym;

use std::collections::BTreeSet;

pub use expiry::{ExpiringItem, detect_expiring, resolve_due};
pub use pantry::Pantry;

/// Trims, lowercases and strips any expiry annotation.
pub fn normalize(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    expiry::EXPIRY_ANNOTATION
        .replace_all(&lowered, "")
        .trim()
        .to_string()
}

/// Splits comma-separated input into trimmed, non-empty raw entries.
pub fn split_entries(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Adds every token plus, for tokens found in a synonym group, the group's
/// canonical name and all its synonyms. Expansion is one level deep.
pub fn expand_synonyms<S: AsRef<str>>(tokens: &[S]) -> BTreeSet<String> {
    let mut expanded = BTreeSet::new();

    for token in tokens {
        let token = token.as_ref().to_lowercase();
        for (canonical, synonyms) in synonym::groups_containing(&token) {
            expanded.insert(canonical.to_lowercase());
            expanded.extend(synonyms.iter().map(|s| s.to_lowercase()));
        }
        expanded.insert(token);
    }

    expanded
}

/// Normalizes then expands, the set every catalog ingredient is matched against.
pub fn matchable_set<S: AsRef<str>>(entries: &[S]) -> BTreeSet<String> {
    let normalized: Vec<String> = entries.iter().map(|e| normalize(e.as_ref())).collect();
    expand_synonyms(&normalized)
}

/// Canonical key of the synonym group the token belongs to, or the
/// normalized token when it is in none.
pub fn canonical_name(token: &str) -> String {
    let normalized = normalize(token);
    let found = synonym::groups_containing(&normalized)
        .next()
        .map(|(canonical, _)| canonical.to_string());
    found.unwrap_or(normalized)
}

/// Suggested replacements for an ingredient the user does not have.
pub fn substitutes(token: &str) -> &'static [&'static str] {
    let canonical = canonical_name(token);
    synonym::SUBSTITUTIONS
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, subs)| *subs)
        .unwrap_or(&[])
}
