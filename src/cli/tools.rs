use anyhow::Result;
use fridgechef::commands;
use fridgechef::music::MusicLinks;
use fridgechef::report;
use fridgechef::share::{ShareLink, ShareQuery};
use fridgechef_shared::ingredient::split_entries;
use fridgechef_shared::{Allergen, AllergyFlags, Mood};

use super::Context;

#[tracing::instrument(skip(ctx))]
pub fn nutrition_command(ctx: &Context, items: Vec<String>) -> Result<()> {
    let totals = commands::nutrition(&items)?;
    let output = ctx
        .format
        .render(&totals, || report::render_nutrition(&totals, ctx.language))?;
    println!("{output}");

    Ok(())
}

#[tracing::instrument(skip(ctx))]
pub fn music_command(ctx: &Context, mood: Mood) -> Result<()> {
    let links = MusicLinks::for_mood(mood);
    let output = ctx
        .format
        .render(&links, || report::render_music(&links, ctx.language))?;
    println!("{output}");

    Ok(())
}

#[tracing::instrument(skip(ctx))]
pub fn share_command(
    ctx: &Context,
    have: String,
    allergy: Vec<Allergen>,
    mood: Option<Mood>,
) -> Result<()> {
    let share = ShareLink::from(ShareQuery {
        language: Some(ctx.language),
        have: split_entries(&have),
        allergies: AllergyFlags::from_allergens(&allergy),
        mood: Some(mood.unwrap_or_default()),
    });
    let output = ctx
        .format
        .render(&share, || report::render_share(&share.link, ctx.language))?;
    println!("{output}");

    Ok(())
}
