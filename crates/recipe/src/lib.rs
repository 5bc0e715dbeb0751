mod card;
mod catalog;
mod error;
pub mod generator;
mod types;

pub use card::*;
pub use catalog::*;
pub use error::{CatalogError, CatalogResult};
pub use types::*;

rust_i18n::i18n!("locales", fallback = "en");
