use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use fridgechef::commands;
use fridgechef::recommendation::Recommendation;
use fridgechef::report;
use fridgechef::session::Session;
use fridgechef_recipe::generator;
use fridgechef_shared::Allergen;

use super::Context;

#[tracing::instrument(skip(ctx))]
pub fn recommend_command(
    ctx: &Context,
    have: String,
    select: Vec<String>,
    allergy: Vec<Allergen>,
    limit: Option<usize>,
) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let mut session = Session::new(ctx.language);
    session.set_have(&have);
    if !select.is_empty() {
        session.selection = Some(select);
    }
    for allergen in allergy {
        session.set_allergy(allergen, true);
    }

    let result = Recommendation::compute(
        &catalog,
        &session,
        &ctx.config.meal_plan.planner(),
        ctx.config.recommend.clamp_limit(limit),
        commands::today(),
    );
    let output = ctx
        .format
        .render(&result, || report::render_recommendation(&result, &session))?;
    println!("{output}");

    Ok(())
}

#[tracing::instrument(skip(ctx))]
pub fn card_command(ctx: &Context, id: u32, out: Option<PathBuf>) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    match out {
        Some(out) => {
            let path = commands::save_card(&catalog, id, ctx.language, &out)?;
            tracing::info!("Recipe card saved to {}", path.display());
            println!("{}", path.display());
        }
        None => print!("{}", commands::card(&catalog, id, ctx.language)?),
    }

    Ok(())
}

#[tracing::instrument]
pub fn generate_command(count: u32, seed: u64, out: Option<PathBuf>) -> Result<()> {
    let catalog = generator::generate(count, seed);

    match out {
        Some(path) => {
            catalog.write(&path)?;
            tracing::info!("Wrote {} with {} recipes", path.display(), catalog.len());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            catalog.write_to(&mut lock)?;
            lock.flush()?;
        }
    }

    Ok(())
}
