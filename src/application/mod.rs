//! Application Layer
//!
//! Use cases that orchestrate the deploy flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DocumentStager` - Stage the document for one attempt
//! - `CommitManager` - Promote or discard the staged document
//! - `LifecycleRunner` - Run predeploy, release and postdeploy scripts
//! - `AppEvents` - Mirror app create/clone/rename/delete
//! - `ContentQuery` - Read the committed document
//! - `SettingsUseCase` - Set and report `appjson-path`

pub mod app_events;
pub mod commit;
pub mod content;
pub mod ledger;
pub mod lifecycle;
pub mod settings;
pub mod stage;


pub use app_events::AppEvents;
pub use commit::CommitManager;
pub use content::ContentQuery;
pub use ledger::AttemptLedger;
pub use lifecycle::{LifecycleReport, LifecycleRunner, PhaseOutcome, SkipReason};
pub use settings::{SettingsReport, SettingsUseCase};
pub use stage::DocumentStager;
