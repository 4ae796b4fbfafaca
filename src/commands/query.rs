//! Read-only handlers

use std::io::Write;

use anyhow::{Context as _, Result};

use appjson::presentation::factory;
use appjson::presentation::output::render_status;

use super::{parse_app, Context};

/// Prints raw document text regardless of `--json`; it already is JSON.
/// No trailing newline: callers compare the output byte for byte.
pub fn cmd_get_content(ctx: &Context, app: &str) -> Result<()> {
    let app = parse_app(app)?;
    let content = factory::create_content_query(&ctx.config).get_content(&app)?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{content}").context("failed to write app.json content")?;
    stdout.flush().context("failed to write app.json content")?;
    Ok(())
}

pub fn cmd_parallelism(ctx: &Context, app: &str, process_type: &str) -> Result<()> {
    let app = parse_app(app)?;
    let parallelism = factory::create_content_query(&ctx.config)
        .deploy_parallelism(&app, process_type)
        .with_context(|| format!("unable to read formation for {app}"))?;
    println!("{parallelism}");
    Ok(())
}

pub fn cmd_status(ctx: &Context, app: &str) -> Result<()> {
    let app = parse_app(app)?;
    let state = factory::create_commit_manager(&ctx.config).inspect(&app, &ctx.attempt)?;
    let record = factory::create_ledger(&ctx.config).current(&app)?;

    println!("{}", render_status(&app, &state, record.as_ref(), ctx.format));
    Ok(())
}
