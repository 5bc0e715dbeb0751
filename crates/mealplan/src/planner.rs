use fridgechef_recipe::Recipe;
use fridgechef_shared::ingredient::Pantry;
use fridgechef_shared::Language;

use crate::recommend::{ScoredRecipe, coverage};

pub const DEFAULT_PLAN_SIZE: usize = 3;
pub const DEFAULT_FALLBACK_SAMPLE: usize = 100;

/// Picks the meals of a plan from the recommendation list.
///
/// Selection is greedy: each step takes the highest-coverage recipe still in
/// the pool and removes it. There is no lookahead and no diversity rule;
/// ties go to the recipe that comes first in the pool.
#[derive(Debug, Clone, Copy)]
pub struct MealPlanner {
    pub size: usize,
    pub fallback_sample: usize,
}

impl Default for MealPlanner {
    fn default() -> Self {
        Self {
            size: DEFAULT_PLAN_SIZE,
            fallback_sample: DEFAULT_FALLBACK_SAMPLE,
        }
    }
}

impl MealPlanner {
    pub fn new(size: usize, fallback_sample: usize) -> Self {
        Self {
            size,
            fallback_sample,
        }
    }

    /// Builds the plan for a pantry. An empty pantry yields no plan.
    ///
    /// When nothing was recommended the pool falls back to the first
    /// `fallback_sample` catalog rows, unfiltered.
    pub fn plan<'a>(
        &self,
        recommended: &[ScoredRecipe<'a>],
        recipes: &'a [Recipe],
        pantry: &Pantry,
        lang: Language,
    ) -> Vec<ScoredRecipe<'a>> {
        if pantry.is_empty() {
            return Vec::new();
        }

        let pool: Vec<ScoredRecipe<'a>> = if recommended.is_empty() {
            tracing::debug!(
                sample = self.fallback_sample,
                "no recipe matched, planning from catalog sample"
            );
            recipes
                .iter()
                .take(self.fallback_sample)
                .map(|recipe| ScoredRecipe {
                    recipe,
                    score: coverage(recipe, pantry, lang),
                })
                .collect()
        } else {
            recommended.to_vec()
        };

        pick_greedy(pool, self.size)
    }
}

/// Repeatedly removes the best remaining candidate from the pool.
pub fn pick_greedy(mut pool: Vec<ScoredRecipe<'_>>, size: usize) -> Vec<ScoredRecipe<'_>> {
    let mut chosen = Vec::with_capacity(size.min(pool.len()));

    while chosen.len() < size {
        let Some(best) = best_index(&pool) else {
            break;
        };
        chosen.push(pool.remove(best));
    }

    chosen
}

fn best_index(pool: &[ScoredRecipe<'_>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, candidate) in pool.iter().enumerate() {
        match best {
            Some(b) if pool[b].score >= candidate.score => {}
            _ => best = Some(i),
        }
    }
    best
}
