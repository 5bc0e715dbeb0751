use fridgechef_mealplan::{MealPlanner, ScoredRecipe, recommend};
use fridgechef_recipe::Catalog;
use fridgechef_shared::Language;
use fridgechef_shared::ingredient::{ExpiringItem, detect_expiring};
use fridgechef_shopping::ShoppingList;
use serde::Serialize;
use time::Date;

use crate::session::Session;

/// One full pass over the catalog for the current session inputs.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub language: Language,
    pub expiring: Vec<ExpiringItem>,
    pub plan: Vec<ScoredRecipe<'a>>,
    pub shopping: ShoppingList,
    /// Total rows that passed filtering, before `limit` was applied.
    pub matched: usize,
    pub recipes: Vec<ScoredRecipe<'a>>,
}

impl<'a> Recommendation<'a> {
    pub fn compute(
        catalog: &'a Catalog,
        session: &Session,
        planner: &MealPlanner,
        limit: usize,
        today: Date,
    ) -> Self {
        let language = session.language;
        let pantry = session.pantry();
        let expiring = detect_expiring(&session.have, today);

        let mut recipes = recommend(catalog.recipes(), &pantry, &session.allergies, language);
        let plan = planner.plan(&recipes, catalog.recipes(), &pantry, language);
        let shopping = ShoppingList::build(&pantry, plan.iter().map(|scored| scored.recipe));

        let matched = recipes.len();
        recipes.truncate(limit);

        tracing::info!(
            held = pantry.held().len(),
            expiring = expiring.len(),
            matched,
            shown = recipes.len(),
            planned = plan.len(),
            missing = shopping.items().len(),
            "recommendation pass complete"
        );

        Self {
            language,
            expiring,
            plan,
            shopping,
            matched,
            recipes,
        }
    }
}
