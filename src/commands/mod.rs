//! Command handlers
//!
//! Each handler parses raw CLI values into domain types, builds its use case
//! through the factory, and prints the result on stdout.

pub mod apps;
pub mod deploy;
pub mod query;
pub mod settings;

use anyhow::{Context as _, Result};

use appjson::presentation::{Commands, OutputFormat};
use appjson::{AppName, AttemptToken, Config};

/// Everything a handler needs besides its own arguments
pub struct Context {
    pub config: Config,
    pub attempt: AttemptToken,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: Config, attempt: Option<&str>, format: OutputFormat) -> Result<Self> {
        let attempt = match attempt.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => AttemptToken::parse(token)?,
            None => AttemptToken::from_process(),
        };
        Ok(Self {
            config,
            attempt,
            format,
        })
    }
}

pub(crate) fn parse_app(name: &str) -> Result<AppName> {
    AppName::parse(name).with_context(|| format!("invalid app argument '{name}'"))
}

pub fn dispatch(ctx: &Context, command: Commands) -> Result<()> {
    match command {
        Commands::Install => apps::cmd_install(ctx),
        Commands::PostCreate { app } => apps::cmd_post_create(ctx, &app),
        Commands::PostDelete { app } => apps::cmd_post_delete(ctx, &app),
        Commands::CloneSetup { old_app, new_app } => apps::cmd_clone_setup(ctx, &old_app, &new_app),
        Commands::RenameSetup { old_app, new_app } => {
            apps::cmd_rename_setup(ctx, &old_app, &new_app)
        }
        Commands::Rename { old_app, new_app } => apps::cmd_rename(ctx, &old_app, &new_app),
        Commands::Stage {
            app,
            source_root,
            image,
        } => deploy::cmd_stage(ctx, &app, &source_root, image.as_deref()),
        Commands::Commit { app } => deploy::cmd_commit(ctx, &app),
        Commands::PreRelease { app, image } => deploy::cmd_pre_release(ctx, &app, &image),
        Commands::Release { app, image } => deploy::cmd_release(ctx, &app, &image),
        Commands::PostDeploy { app, image_tag } => deploy::cmd_post_deploy(ctx, &app, &image_tag),
        Commands::GetContent { app } => query::cmd_get_content(ctx, &app),
        Commands::Parallelism { app, process_type } => {
            query::cmd_parallelism(ctx, &app, &process_type)
        }
        Commands::Status { app } => query::cmd_status(ctx, &app),
        Commands::Set { target, key, value } => {
            settings::cmd_set(ctx, &target, &key, value.as_deref().unwrap_or_default())
        }
        Commands::Report { app } => settings::cmd_report(ctx, &app),
    }
}
