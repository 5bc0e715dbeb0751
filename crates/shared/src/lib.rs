mod allergen;
pub mod ingredient;
mod language;

pub use allergen::*;
pub use language::*;
