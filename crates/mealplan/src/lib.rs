//! Coverage ranking and meal selection over the recipe catalog.

mod planner;
mod recommend;

pub use planner::*;
pub use recommend::*;
