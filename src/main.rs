use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fridgechef::config::Config;
use fridgechef::error::AppError;
use fridgechef::report::OutputFormat;
use fridgechef_shared::{Allergen, Language, Mood};

mod cli;

/// FridgeChef - recipes from what is already in your fridge
#[derive(Parser)]
#[command(name = "fridgechef")]
#[command(about = "Recipe recommendations, meal plans and shopping lists from your pantry", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Recipe catalog CSV (overrides config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Display language, ko or en (overrides config file)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expiring items, 3-meal plan, shopping list and recommendations
    Recommend {
        /// Comma-separated ingredients, e.g. "두부(내일 만료), 대파"
        #[arg(long, default_value = "")]
        have: String,

        /// Use only these of the entered ingredients
        #[arg(long)]
        select: Vec<String>,

        /// Allergen to exclude
        #[arg(long)]
        allergy: Vec<Allergen>,

        /// Number of recommendations to show
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print a recipe card as markdown or save it
    Card {
        id: u32,

        /// Output file, or a directory to save `<name>.md` into
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sum nutrients of ingredient amounts
    Nutrition {
        /// `<ingredient>:<grams>`, repeatable
        #[arg(long = "item", required = true)]
        items: Vec<String>,
    },
    /// Playlist links for cooking music
    Music {
        #[arg(default_value_t = Mood::Chill)]
        mood: Mood,
    },
    /// Build a share link for a set of inputs
    Share {
        #[arg(long, default_value = "")]
        have: String,

        #[arg(long)]
        allergy: Vec<Allergen>,

        #[arg(long)]
        mood: Option<Mood>,
    },
    /// Write a synthetic recipe catalog
    Generate {
        #[arg(long, default_value_t = 649)]
        count: u32,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output CSV path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Interactive session over stdin
    Shell {
        /// Share link to seed the session with
        #[arg(long)]
        from: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone()).map_err(AppError::from)?;
    config.validate().map_err(AppError::InvalidConfig)?;

    fridgechef::observability::init_observability(
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let ctx = cli::Context {
        language: cli.lang.unwrap_or(config.session.default_language),
        format: cli.format,
        catalog: cli.catalog,
        config,
    };

    match cli.command {
        Commands::Recommend {
            have,
            select,
            allergy,
            limit,
        } => cli::recipe::recommend_command(&ctx, have, select, allergy, limit),
        Commands::Card { id, out } => cli::recipe::card_command(&ctx, id, out),
        Commands::Nutrition { items } => cli::tools::nutrition_command(&ctx, items),
        Commands::Music { mood } => cli::tools::music_command(&ctx, mood),
        Commands::Share {
            have,
            allergy,
            mood,
        } => cli::tools::share_command(&ctx, have, allergy, mood),
        Commands::Generate { count, seed, out } => cli::recipe::generate_command(count, seed, out),
        Commands::Shell { from } => cli::shell::shell_command(&ctx, from),
    }
}
