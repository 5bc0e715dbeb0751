use fridgechef_shared::Language;
use serde::{Deserialize, Serialize};

/// Per-serving macros printed on a recipe card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// One catalog row. Immutable once loaded.
///
/// The korean and english lists are parallel by position; the catalog does
/// not enforce equal lengths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: u32,
    pub name_ko: String,
    pub name_en: String,
    pub category: String,
    pub difficulty: Option<String>,
    pub ingredients_ko: Vec<String>,
    pub ingredients_en: Vec<String>,
    pub steps_ko: Vec<String>,
    pub steps_en: Vec<String>,
    pub nutrition: Nutrition,
    pub benefits_ko: Option<String>,
    pub benefits_en: Option<String>,
}

impl Recipe {
    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_ko, &self.name_en)
    }

    pub fn ingredients(&self, lang: Language) -> &[String] {
        lang.pick(&self.ingredients_ko, &self.ingredients_en)
    }

    pub fn steps(&self, lang: Language) -> &[String] {
        lang.pick(&self.steps_ko, &self.steps_en)
    }

    pub fn benefits(&self, lang: Language) -> Option<&str> {
        lang.pick(&self.benefits_ko, &self.benefits_en).as_deref()
    }

    /// Korean ingredients paired with their english counterpart by position.
    pub fn ingredient_pairs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.ingredients_ko
            .iter()
            .enumerate()
            .map(|(i, ko)| (ko.as_str(), self.ingredients_en.get(i).map(String::as_str)))
    }

    /// Both ingredient lists, korean first.
    pub fn all_ingredients(&self) -> impl Iterator<Item = &String> {
        self.ingredients_ko.iter().chain(self.ingredients_en.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: 7,
            name_ko: "두부 조림".to_string(),
            name_en: "Braised Tofu".to_string(),
            category: "메인".to_string(),
            difficulty: None,
            ingredients_ko: vec!["두부".to_string(), "대파".to_string(), "간장".to_string()],
            ingredients_en: vec!["Tofu".to_string(), "Green onion".to_string()],
            steps_ko: vec!["굽는다.".to_string()],
            steps_en: vec!["Sear.".to_string()],
            nutrition: Nutrition::default(),
            benefits_ko: Some("단백질".to_string()),
            benefits_en: None,
        }
    }

    #[test]
    fn test_language_accessors() {
        let recipe = recipe();
        assert_eq!(recipe.name(Language::En), "Braised Tofu");
        assert_eq!(recipe.ingredients(Language::Ko).len(), 3);
        assert_eq!(recipe.benefits(Language::Ko), Some("단백질"));
        assert_eq!(recipe.benefits(Language::En), None);
    }

    #[test]
    fn test_pairs_follow_korean_list() {
        let recipe = recipe();
        let pairs: Vec<_> = recipe.ingredient_pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("두부", Some("Tofu")),
                ("대파", Some("Green onion")),
                ("간장", None),
            ]
        );
    }
}
