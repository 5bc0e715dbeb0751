use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Allergen {
    Gluten,
    Dairy,
    Nuts,
    Shellfish,
    Egg,
    Soy,
}

impl Allergen {
    /// Ingredient substrings that mark a recipe as containing this allergen.
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Allergen::Gluten => &["밀가루", "빵가루", "파스타", "라면", "맥주"],
            Allergen::Dairy => &["우유", "버터", "치즈", "요거트"],
            Allergen::Nuts => &["아몬드", "호두", "땅콩", "캐슈넛", "피스타치오"],
            Allergen::Shellfish => &["새우", "홍합", "게", "조개", "전복", "랍스터"],
            Allergen::Egg => &["계란", "달걀", "메추리알"],
            Allergen::Soy => &["대두", "두유", "두부", "간장"],
        }
    }

    /// Checkbox label shown for the allergen, both languages at once.
    pub fn label(&self) -> &'static str {
        match self {
            Allergen::Gluten => "Gluten(글루텐)",
            Allergen::Dairy => "Dairy(유제품)",
            Allergen::Nuts => "Nuts(견과)",
            Allergen::Shellfish => "Shellfish(갑각류)",
            Allergen::Egg => "Egg(난류)",
            Allergen::Soy => "Soy(대두)",
        }
    }

    /// True when any trigger is a case-insensitive substring of any ingredient.
    pub fn is_present_in<S: AsRef<str>>(&self, ingredients: &[S]) -> bool {
        let lowered: Vec<String> = ingredients
            .iter()
            .map(|i| i.as_ref().to_lowercase())
            .collect();

        self.triggers().iter().any(|trigger| {
            let trigger = trigger.to_lowercase();
            lowered.iter().any(|ing| ing.contains(&trigger))
        })
    }
}

/// The six allergy exclusion switches.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergyFlags {
    pub gluten: bool,
    pub dairy: bool,
    pub nuts: bool,
    pub shellfish: bool,
    pub egg: bool,
    pub soy: bool,
}

impl AllergyFlags {
    pub fn from_allergens<'a>(allergens: impl IntoIterator<Item = &'a Allergen>) -> Self {
        let mut flags = Self::default();
        for allergen in allergens {
            flags.set(*allergen, true);
        }
        flags
    }

    pub fn is_enabled(&self, allergen: Allergen) -> bool {
        match allergen {
            Allergen::Gluten => self.gluten,
            Allergen::Dairy => self.dairy,
            Allergen::Nuts => self.nuts,
            Allergen::Shellfish => self.shellfish,
            Allergen::Egg => self.egg,
            Allergen::Soy => self.soy,
        }
    }

    pub fn set(&mut self, allergen: Allergen, on: bool) {
        let slot = match allergen {
            Allergen::Gluten => &mut self.gluten,
            Allergen::Dairy => &mut self.dairy,
            Allergen::Nuts => &mut self.nuts,
            Allergen::Shellfish => &mut self.shellfish,
            Allergen::Egg => &mut self.egg,
            Allergen::Soy => &mut self.soy,
        };
        *slot = on;
    }

    /// Enabled allergens in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Allergen> + '_ {
        Allergen::VARIANTS
            .iter()
            .copied()
            .filter(|allergen| self.is_enabled(*allergen))
    }

    pub fn any(&self) -> bool {
        self.enabled().next().is_some()
    }

    /// First enabled allergen found in the ingredient list, if any.
    pub fn violation<S: AsRef<str>>(&self, ingredients: &[S]) -> Option<Allergen> {
        self.enabled()
            .find(|allergen| allergen.is_present_in(ingredients))
    }

    pub fn violates<S: AsRef<str>>(&self, ingredients: &[S]) -> bool {
        self.violation(ingredients).is_some()
    }
}
