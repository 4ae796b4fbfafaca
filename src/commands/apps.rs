//! App event handlers (install, create, clone, rename, delete)

use anyhow::{Context as _, Result};

use appjson::presentation::factory;

use super::{parse_app, Context};

pub fn cmd_install(ctx: &Context) -> Result<()> {
    factory::create_app_events(&ctx.config)
        .install()
        .context("install failed")
}

pub fn cmd_post_create(ctx: &Context, app: &str) -> Result<()> {
    let app = parse_app(app)?;
    factory::create_app_events(&ctx.config)
        .post_create(&app)
        .with_context(|| format!("unable to prepare app-json state for {app}"))
}

pub fn cmd_post_delete(ctx: &Context, app: &str) -> Result<()> {
    let app = parse_app(app)?;
    factory::create_app_events(&ctx.config)
        .delete(&app)
        .with_context(|| format!("unable to delete app-json state for {app}"))
}

pub fn cmd_clone_setup(ctx: &Context, old_app: &str, new_app: &str) -> Result<()> {
    let (old, new) = (parse_app(old_app)?, parse_app(new_app)?);
    factory::create_app_events(&ctx.config)
        .clone_setup(&old, &new)
        .with_context(|| format!("unable to clone app-json state from {old} to {new}"))
}

pub fn cmd_rename_setup(ctx: &Context, old_app: &str, new_app: &str) -> Result<()> {
    let (old, new) = (parse_app(old_app)?, parse_app(new_app)?);
    factory::create_app_events(&ctx.config)
        .rename_setup(&old, &new)
        .with_context(|| format!("unable to copy app-json state from {old} to {new}"))
}

pub fn cmd_rename(ctx: &Context, old_app: &str, new_app: &str) -> Result<()> {
    let (old, new) = (parse_app(old_app)?, parse_app(new_app)?);
    factory::create_app_events(&ctx.config)
        .rename(&old, &new)
        .with_context(|| format!("unable to move app-json state from {old} to {new}"))
}
