//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{
    AppEvents, AttemptLedger, CommitManager, ContentQuery, DocumentStager, LifecycleRunner,
    SettingsUseCase,
};
use crate::config::Config;
use crate::domain::services::DocumentLayout;
use crate::infrastructure::{
    CommandScaler, CommandScriptExecutor, DockerImageSource, FsDataDirectory, FsPropertyStore,
    JsonAttemptRepository, LocalFs, PropertyDeployQuery,
};

/// Type alias for the concrete deploy query
pub type ConcreteDeployQuery = PropertyDeployQuery<FsPropertyStore>;

/// Type alias for the concrete DocumentStager with all dependencies
pub type ConcreteStager =
    DocumentStager<LocalFs, DockerImageSource, ConcreteDeployQuery, JsonAttemptRepository>;

/// Type alias for the concrete CommitManager
pub type ConcreteCommitManager = CommitManager<LocalFs, JsonAttemptRepository>;

/// Type alias for the concrete LifecycleRunner
pub type ConcreteLifecycleRunner = LifecycleRunner<
    CommandScriptExecutor,
    CommandScaler,
    ConcreteDeployQuery,
    FsPropertyStore,
    JsonAttemptRepository,
>;

pub type ConcreteAppEvents = AppEvents<FsPropertyStore, FsDataDirectory>;
pub type ConcreteContentQuery = ContentQuery<LocalFs>;
pub type ConcreteSettings = SettingsUseCase<FsPropertyStore>;
pub type ConcreteLedger = AttemptLedger<JsonAttemptRepository>;

fn layout(config: &Config) -> DocumentLayout {
    DocumentLayout::new(config.document_root())
}

fn properties(config: &Config) -> FsPropertyStore {
    FsPropertyStore::new(&config.paths.property_root)
}

fn attempts(config: &Config) -> JsonAttemptRepository {
    JsonAttemptRepository::new(config.document_root())
}

/// Create the deploy query reading other plugins' properties
pub fn create_deploy_query(config: &Config) -> ConcreteDeployQuery {
    PropertyDeployQuery::new(properties(config))
}

/// Create a document stager with all dependencies wired up
pub fn create_stager(config: &Config) -> ConcreteStager {
    DocumentStager::new(
        layout(config),
        LocalFs::new(),
        DockerImageSource::new(&config.scripts.docker_bin),
        create_deploy_query(config),
        attempts(config),
    )
}

pub fn create_commit_manager(config: &Config) -> ConcreteCommitManager {
    CommitManager::new(layout(config), LocalFs::new(), attempts(config))
}

/// Create a lifecycle runner
///
/// Scripts run through the configured runner; scaling is skipped when no
/// scale command is configured.
pub fn create_lifecycle_runner(config: &Config) -> ConcreteLifecycleRunner {
    LifecycleRunner::new(
        CommandScriptExecutor::new(&config.scripts, layout(config)),
        CommandScaler::new(config.scale.command.clone(), layout(config)),
        create_deploy_query(config),
        properties(config),
        attempts(config),
        config.images.repository.clone(),
    )
}

pub fn create_app_events(config: &Config) -> ConcreteAppEvents {
    AppEvents::new(
        properties(config),
        FsDataDirectory::new(&config.paths.data_root),
    )
}

pub fn create_content_query(config: &Config) -> ConcreteContentQuery {
    ContentQuery::new(layout(config), LocalFs::new())
}

pub fn create_settings(config: &Config) -> ConcreteSettings {
    SettingsUseCase::new(properties(config))
}

pub fn create_ledger(config: &Config) -> ConcreteLedger {
    AttemptLedger::new(attempts(config))
}
