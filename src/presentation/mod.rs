//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line interface definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering
//!
//! ## Usage
//!
//! ```ignore
//! use appjson::presentation::factory;
//!
//! let stager = factory::create_stager(&config);
//! let outcome = stager.stage(&app, &source, None, &token)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::OutputFormat;
