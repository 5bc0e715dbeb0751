use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use fridgechef_mealplan::MealPlanner;
use fridgechef_shared::Language;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub meal_plan: MealPlanConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: String,
}

/// Bounds of the result-count slider.
#[derive(Debug, Deserialize, Clone)]
pub struct RecommendConfig {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_min_limit")]
    pub min_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            min_limit: default_min_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl RecommendConfig {
    /// Requested count, or the default, pulled into `[min_limit, max_limit]`.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .clamp(self.min_limit, self.max_limit)
    }
}

fn default_limit() -> usize {
    12
}

fn default_min_limit() -> usize {
    5
}

fn default_max_limit() -> usize {
    50
}

#[derive(Debug, Deserialize, Clone)]
pub struct MealPlanConfig {
    #[serde(default = "default_plan_size")]
    pub size: usize,
    #[serde(default = "default_fallback_sample")]
    pub fallback_sample: usize,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            size: default_plan_size(),
            fallback_sample: default_fallback_sample(),
        }
    }
}

impl MealPlanConfig {
    pub fn planner(&self) -> MealPlanner {
        MealPlanner::new(self.size, self.fallback_sample)
    }
}

fn default_plan_size() -> usize {
    fridgechef_mealplan::DEFAULT_PLAN_SIZE
}

fn default_fallback_sample() -> usize {
    fridgechef_mealplan::DEFAULT_FALLBACK_SAMPLE
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub default_language: Language,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FRIDGECHEF__CATALOG__PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("catalog.path", "data/recipes.csv")?
            .set_default("recommend.default_limit", default_limit() as u64)?
            .set_default("recommend.min_limit", default_min_limit() as u64)?
            .set_default("recommend.max_limit", default_max_limit() as u64)?
            .set_default("meal_plan.size", default_plan_size() as u64)?
            .set_default("meal_plan.fallback_sample", default_fallback_sample() as u64)?
            .set_default("observability.log_level", default_log_level())?
            .set_default("session.default_language", Language::default().code())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file leaves the defaults in place
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FRIDGECHEF")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.path.trim().is_empty() {
            return Err("Catalog path must not be empty".to_string());
        }
        let limits = &self.recommend;
        if limits.min_limit == 0 {
            return Err("Recommend min_limit must be at least 1".to_string());
        }
        if limits.min_limit > limits.max_limit {
            return Err(format!(
                "Recommend min_limit ({}) must not exceed max_limit ({})",
                limits.min_limit, limits.max_limit
            ));
        }
        if !(limits.min_limit..=limits.max_limit).contains(&limits.default_limit) {
            return Err(format!(
                "Recommend default_limit ({}) must lie within {}..={}",
                limits.default_limit, limits.min_limit, limits.max_limit
            ));
        }
        if self.meal_plan.size == 0 {
            return Err("Meal plan size must be at least 1".to_string());
        }
        Ok(())
    }
}
