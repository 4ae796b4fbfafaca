//! Common test utilities for appjson scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated data/property roots plus CLI helpers
//! - `RecordingExecutor`: Script executor that records instead of running
//! - Fixtures: Reusable app.json documents

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod env;
pub mod fixtures;
pub mod recording;

pub use env::*;
pub use fixtures::*;
pub use recording::*;
