//! Per-100g nutrient lookup used by the nutrition calculator.

use fridgechef_shared::ingredient::canonical_name;
use serde::Serialize;

/// Nutrients per 100g of an ingredient. Sodium is in mg, the rest in g
/// (kcal for energy).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientProfile {
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub sodium: f64,
}

const fn profile(kcal: f64, protein: f64, fat: f64, carbs: f64, sodium: f64) -> NutrientProfile {
    NutrientProfile {
        kcal,
        protein,
        fat,
        carbs,
        sodium,
    }
}

const NUTRIENTS: &[(&str, NutrientProfile)] = &[
    ("두부", profile(76.0, 8.0, 4.8, 1.9, 7.0)),
    ("닭가슴살", profile(165.0, 31.0, 3.6, 0.0, 74.0)),
    ("계란", profile(155.0, 13.0, 11.0, 1.1, 124.0)),
    ("쌀", profile(130.0, 2.4, 0.3, 28.7, 1.0)),
    ("김치", profile(23.0, 1.1, 0.2, 4.1, 498.0)),
    ("돼지고기", profile(242.0, 27.0, 14.0, 0.0, 62.0)),
    ("소고기", profile(250.0, 26.0, 15.0, 0.0, 72.0)),
    ("감자", profile(77.0, 2.0, 0.1, 17.0, 6.0)),
    ("고구마", profile(86.0, 1.6, 0.1, 20.0, 55.0)),
    ("양파", profile(40.0, 1.1, 0.1, 9.3, 4.0)),
    ("당근", profile(41.0, 0.9, 0.2, 9.6, 69.0)),
    ("대파", profile(31.0, 1.8, 0.2, 7.6, 20.0)),
    ("애호박", profile(17.0, 1.2, 0.3, 3.1, 8.0)),
    ("가지", profile(25.0, 1.0, 0.2, 6.0, 2.0)),
    ("우유", profile(60.0, 3.2, 3.3, 4.8, 44.0)),
    ("치즈", profile(402.0, 25.0, 33.0, 1.3, 621.0)),
    ("버터", profile(717.0, 0.9, 81.0, 0.1, 11.0)),
    ("밀가루", profile(364.0, 10.0, 1.0, 76.0, 2.0)),
    ("대두", profile(446.0, 36.0, 20.0, 30.0, 2.0)),
    ("새우", profile(99.0, 24.0, 0.3, 0.2, 111.0)),
];

/// Summed nutrients, each rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionTotals {
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub sodium: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub struct NutritionCalculator;

impl NutritionCalculator {
    /// Profile for an ingredient name, synonyms resolved to their canonical key.
    pub fn lookup(name: &str) -> Option<&'static NutrientProfile> {
        let canonical = canonical_name(name);
        NUTRIENTS
            .iter()
            .find(|(key, _)| *key == canonical)
            .map(|(_, profile)| profile)
    }

    /// Names the calculator knows about.
    pub fn known_ingredients() -> impl Iterator<Item = &'static str> {
        NUTRIENTS.iter().map(|(name, _)| *name)
    }

    /// Scales each profile by grams / 100 and sums. Unknown ingredients and
    /// non-positive amounts add nothing.
    pub fn sum<S: AsRef<str>>(items: &[(S, f64)]) -> NutritionTotals {
        let mut totals = NutritionTotals::default();

        for (name, grams) in items {
            let name = name.as_ref();
            if name.trim().is_empty() {
                continue;
            }
            let Some(profile) = Self::lookup(name) else {
                tracing::debug!(name, "no nutrient profile, skipping");
                continue;
            };

            let factor = grams.max(0.0) / 100.0;
            totals.kcal += profile.kcal * factor;
            totals.protein += profile.protein * factor;
            totals.fat += profile.fat * factor;
            totals.carbs += profile.carbs * factor;
            totals.sodium += profile.sodium * factor;
        }

        NutritionTotals {
            kcal: round1(totals.kcal),
            protein: round1(totals.protein),
            fat: round1(totals.fat),
            carbs: round1(totals.carbs),
            sodium: round1(totals.sodium),
        }
    }
}
