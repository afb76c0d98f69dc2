//! `prova categories` — list test categories.

use crate::context::AppContext;
use crate::output;

pub async fn handle(ctx: &mut AppContext) -> anyhow::Result<()> {
    let token = ctx.require_token()?;
    let categories = ctx.api.categories(&token).await?;
    output::render_categories(&categories);
    Ok(())
}
