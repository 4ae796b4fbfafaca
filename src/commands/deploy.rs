//! Deploy trigger handlers
//!
//! `stage` → `commit` → `pre-release` → `release` → `post-deploy`, each run
//! as its own process for the same attempt token.

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::debug;

use appjson::domain::ports::DeployQuery;
use appjson::presentation::factory;
use appjson::presentation::output::{render_commit, render_lifecycle, render_stage};
use appjson::ImageRef;

use super::{parse_app, Context};

pub fn cmd_stage(ctx: &Context, app: &str, source_root: &Path, image: Option<&str>) -> Result<()> {
    let app = parse_app(app)?;

    let image = match image.map(str::trim).filter(|i| !i.is_empty()) {
        Some(image) => Some(ImageRef::new(image)),
        None => factory::create_deploy_query(&ctx.config)
            .source_image(&app)
            .context("unable to read source-image")?,
    };
    if let Some(image) = &image {
        debug!(app = %app, image = %image, "staging from image");
    }

    let outcome = factory::create_stager(&ctx.config)
        .stage(&app, source_root, image.as_ref(), &ctx.attempt)
        .with_context(|| format!("unable to stage app.json for {app}"))?;

    println!("{}", render_stage(&app, &ctx.attempt, outcome, ctx.format));
    Ok(())
}

pub fn cmd_commit(ctx: &Context, app: &str) -> Result<()> {
    let app = parse_app(app)?;
    let outcome = factory::create_commit_manager(&ctx.config)
        .commit(&app, &ctx.attempt)
        .with_context(|| format!("unable to commit app.json for {app}"))?;

    println!("{}", render_commit(&app, &ctx.attempt, outcome, ctx.format));
    Ok(())
}

pub fn cmd_pre_release(ctx: &Context, app: &str, image: &str) -> Result<()> {
    let app = parse_app(app)?;
    let report = factory::create_lifecycle_runner(&ctx.config)
        .pre_release(&app, &ImageRef::new(image), &ctx.attempt)
        .with_context(|| format!("pre-release failed for {app}"))?;

    println!("{}", render_lifecycle(&app, &report, ctx.format));
    Ok(())
}

pub fn cmd_release(ctx: &Context, app: &str, image: &str) -> Result<()> {
    let app = parse_app(app)?;
    let report = factory::create_lifecycle_runner(&ctx.config)
        .release(&app, &ImageRef::new(image), &ctx.attempt)
        .with_context(|| format!("release failed for {app}"))?;

    println!("{}", render_lifecycle(&app, &report, ctx.format));
    Ok(())
}

pub fn cmd_post_deploy(ctx: &Context, app: &str, image_tag: &str) -> Result<()> {
    let app = parse_app(app)?;
    let report = factory::create_lifecycle_runner(&ctx.config)
        .post_deploy(&app, image_tag, &ctx.attempt)
        .with_context(|| format!("post-deploy failed for {app}"))?;

    println!("{}", render_lifecycle(&app, &report, ctx.format));
    Ok(())
}
