//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod attempt;
mod deploy_query;
mod property_store;

pub use attempt::JsonAttemptRepository;
pub use deploy_query::PropertyDeployQuery;
pub use property_store::FsPropertyStore;
