use anyhow::Result;
use fridgechef::session::Session;
use fridgechef::share::ShareQuery;
use fridgechef::shell::Shell;

use super::Context;

#[tracing::instrument(skip(ctx))]
pub fn shell_command(ctx: &Context, from: Option<String>) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    let session = match from {
        Some(link) => Session::from_share_query(ShareQuery::parse(&link), ctx.language),
        None => Session::new(ctx.language),
    };
    tracing::info!(recipes = catalog.len(), "Starting shell session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&catalog, &ctx.config, session, ctx.format).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
