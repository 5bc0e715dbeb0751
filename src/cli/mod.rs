use std::path::PathBuf;

use fridgechef::config::Config;
use fridgechef::report::OutputFormat;
use fridgechef_shared::Language;

pub mod recipe;
pub mod shell;
pub mod tools;

/// Settings every subcommand runs with.
pub struct Context {
    pub config: Config,
    pub language: Language,
    pub format: OutputFormat,
    /// `--catalog`, taking precedence over `catalog.path`.
    pub catalog: Option<PathBuf>,
}

impl Context {
    pub fn load_catalog(&self) -> fridgechef::error::AppResult<fridgechef_recipe::Catalog> {
        fridgechef::commands::load_catalog(&self.config, self.catalog.as_deref())
    }
}
