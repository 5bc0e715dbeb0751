//! Synthetic catalog used for demos and tests.
//!
//! Every row combines a cooking method, a base ingredient and one to three
//! extras. Output is deterministic for a given seed.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::types::{Nutrition, Recipe};

const METHODS: &[(&str, &str)] = &[
    ("볶음", "Stir-fry"),
    ("구이", "Grilled"),
    ("조림", "Braised"),
    ("찜", "Steamed"),
    ("전", "Pancake"),
    ("수프", "Soup"),
    ("비빔", "Mixed"),
    ("덮밥", "Rice bowl"),
    ("샐러드", "Salad"),
    ("파스타", "Pasta"),
];

const BASES: &[(&str, &str)] = &[
    ("두부", "Tofu"),
    ("닭가슴살", "Chicken breast"),
    ("소고기", "Beef"),
    ("돼지고기", "Pork"),
    ("감자", "Potato"),
    ("고구마", "Sweet potato"),
    ("양파", "Onion"),
    ("당근", "Carrot"),
    ("가지", "Eggplant"),
    ("애호박", "Zucchini"),
    ("참치캔", "Canned tuna"),
    ("쌀", "Rice"),
    ("김치", "Kimchi"),
    ("계란", "Egg"),
];

const EXTRAS: &[(&str, &str)] = &[
    ("대파", "Green onion"),
    ("마늘", "Garlic"),
    ("버섯", "Mushroom"),
    ("피망", "Bell pepper"),
    ("브로콜리", "Broccoli"),
    ("우유", "Milk"),
    ("치즈", "Cheese"),
    ("버터", "Butter"),
    ("밀가루", "Flour"),
    ("대두", "Soy"),
    ("새우", "Shrimp"),
];

/// Rough per-serving macros keyed on the base ingredient.
fn estimate_nutrition(base_ko: &str) -> Nutrition {
    let (kcal, protein, fat, carbs) = match base_ko {
        "닭가슴살" | "소고기" | "돼지고기" | "새우" | "참치캔" => (420.0, 35.0, 16.0, 20.0),
        "두부" | "계란" => (350.0, 25.0, 20.0, 18.0),
        "쌀" | "감자" | "고구마" | "파스타" => (520.0, 12.0, 10.0, 85.0),
        _ => (300.0, 8.0, 8.0, 35.0),
    };

    Nutrition {
        kcal,
        protein,
        fat,
        carbs,
    }
}

fn build_recipe(id: u32, rng: &mut StdRng) -> Recipe {
    let (method_ko, method_en) = METHODS[rng.random_range(0..METHODS.len())];
    let (base_ko, base_en) = BASES[rng.random_range(0..BASES.len())];
    let extra_count = rng.random_range(1..=3);
    let extras: Vec<&(&str, &str)> = EXTRAS.choose_multiple(rng, extra_count).collect();

    let mut ingredients_ko = vec![base_ko.to_string()];
    let mut ingredients_en = vec![base_en.to_string()];
    for (ko, en) in extras {
        ingredients_ko.push(ko.to_string());
        ingredients_en.push(en.to_string());
    }

    Recipe {
        id,
        name_ko: format!("{base_ko} {method_ko}"),
        name_en: format!("{method_en} {base_en}"),
        category: "메인".to_string(),
        difficulty: Some("보통".to_string()),
        ingredients_ko,
        ingredients_en,
        steps_ko: vec![
            format!("{base_ko}와 재료를 손질한다."),
            "달군 팬에 기름을 두른다.".to_string(),
            "센불에 볶다가 간을 맞춘다.".to_string(),
            "접시에 담아낸다.".to_string(),
        ],
        steps_en: vec![
            format!("Prep {base_en} and other ingredients."),
            "Heat oil in a pan.".to_string(),
            "Stir-fry on high and season.".to_string(),
            "Plate and serve.".to_string(),
        ],
        nutrition: estimate_nutrition(base_ko),
        benefits_ko: Some("단백질 보충과 포만감에 도움.".to_string()),
        benefits_en: Some("Helps with protein intake and satiety.".to_string()),
    }
}

/// Builds `count` recipes with ids starting at 1.
pub fn generate(count: u32, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    Catalog::from_recipes((1..=count).map(|id| build_recipe(id, &mut rng)))
}
