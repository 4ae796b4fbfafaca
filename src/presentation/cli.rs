//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --attempt, --json, --verbose) are inherited by all subcommands
//! - Each subcommand corresponds to one platform trigger; every trigger runs
//!   in its own process, tied together by the attempt token

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// appjson - app.json deploy lifecycle
#[derive(Parser, Debug)]
#[command(name = "appjson")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Deployment attempt token (defaults to the process id)
    #[arg(long, global = true, env = "APPJSON_ATTEMPT")]
    pub attempt: Option<String>,

    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare the property and data roots
    Install,

    /// Create the data directory for a new app
    PostCreate { app: String },

    /// Remove all app-json state for a deleted app
    PostDelete { app: String },

    /// Copy app-json state to a cloned app
    CloneSetup { old_app: String, new_app: String },

    /// Copy app-json properties and documents ahead of a rename
    RenameSetup { old_app: String, new_app: String },

    /// Move the data directory to the renamed app
    Rename { old_app: String, new_app: String },

    /// Stage app.json for this attempt from a source tree or image
    Stage {
        app: String,

        /// Extracted source tree
        source_root: PathBuf,

        /// Image to extract from (defaults to the app's `source-image` property)
        #[arg(long)]
        image: Option<String>,
    },

    /// Promote the staged app.json for this attempt
    Commit { app: String },

    /// Run the predeploy script
    PreRelease { app: String, image: String },

    /// Run the release script, scale, then the first-deploy script
    Release { app: String, image: String },

    /// Run the postdeploy script against the app's built image
    PostDeploy { app: String, image_tag: String },

    /// Print the committed app.json (or `{}`)
    GetContent { app: String },

    /// Print the maximum parallel deploys for a process type
    Parallelism { app: String, process_type: String },

    /// Set an app-json property for an app or `--global`
    Set {
        /// App name, or `--global`
        #[arg(allow_hyphen_values = true)]
        target: String,

        /// Property name (only `appjson-path`)
        key: String,

        /// New value; omit to unset
        value: Option<String>,
    },

    /// Show the effective app-json properties for an app
    Report { app: String },

    /// Show the document state and attempt ledger for an app
    Status { app: String },
}
