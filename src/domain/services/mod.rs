//! Domain Services
//!
//! Stateless domain logic.

mod staging_paths;

pub use staging_paths::{
    source_locations, DocumentLayout, SourceLocations, StagingPaths, CANONICAL_FILE,
};
