//! `set` and `report`

use anyhow::Result;

use appjson::domain::value_objects::GLOBAL_APP;
use appjson::presentation::factory;
use appjson::presentation::output::render_settings;
use appjson::AppName;

use super::{parse_app, Context};

pub fn cmd_set(ctx: &Context, target: &str, key: &str, value: &str) -> Result<()> {
    let app = if target == GLOBAL_APP {
        AppName::global()
    } else {
        parse_app(target)?
    };
    factory::create_settings(&ctx.config).set(&app, key, value)?;
    Ok(())
}

pub fn cmd_report(ctx: &Context, app: &str) -> Result<()> {
    let app = parse_app(app)?;
    let report = factory::create_settings(&ctx.config).report(&app)?;
    println!("{}", render_settings(&report, ctx.format));
    Ok(())
}
