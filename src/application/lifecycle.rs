//! Lifecycle Script Runner
//!
//! Drives the deploy-time scripts in order:
//!
//! ```text
//! pre-release   predeploy
//! release       release → scale → heroku.postdeploy (first deploy only)
//! post-deploy   postdeploy
//! ```
//!
//! `heroku.postdeploy` runs at most once per app. The execution marker is
//! written before the script starts, so a crash mid-script never leads to a
//! second run.

use tracing::{debug, info};

use crate::domain::entities::AttemptStage;
use crate::domain::ports::{
    AttemptRepository, DeployQuery, ProcessScaler, PropertyStore, ScriptExecutor,
};
use crate::domain::value_objects::property_keys::{
    APP_JSON_NAMESPACE, POSTDEPLOY_MARKER_EXECUTED, POSTDEPLOY_MARKER_KEY,
};
use crate::domain::value_objects::{AppName, AttemptToken, ImageRef, LifecyclePhase};
use crate::error::AppJsonResult;

use super::ledger::AttemptLedger;

/// Why a phase was not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The app has deployed before
    AlreadyDeployed,
    /// The execution marker is already set
    MarkerPresent,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::AlreadyDeployed => write!(f, "app already deployed"),
            SkipReason::MarkerPresent => write!(f, "already executed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    Ran,
    Skipped(SkipReason),
}

/// Phases handled by one entry point, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleReport {
    entries: Vec<(LifecyclePhase, PhaseOutcome)>,
}

impl LifecycleReport {
    fn ran(&mut self, phase: LifecyclePhase) {
        self.entries.push((phase, PhaseOutcome::Ran));
    }

    fn skipped(&mut self, phase: LifecyclePhase, reason: SkipReason) {
        self.entries.push((phase, PhaseOutcome::Skipped(reason)));
    }

    pub fn entries(&self) -> &[(LifecyclePhase, PhaseOutcome)] {
        &self.entries
    }

    pub fn outcome(&self, phase: LifecyclePhase) -> Option<PhaseOutcome> {
        self.entries
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, outcome)| *outcome)
    }

    pub fn ran_phases(&self) -> Vec<LifecyclePhase> {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == PhaseOutcome::Ran)
            .map(|(phase, _)| *phase)
            .collect()
    }
}

pub struct LifecycleRunner<SE, PS, DQ, PR, AR>
where
    SE: ScriptExecutor,
    PS: ProcessScaler,
    DQ: DeployQuery,
    PR: PropertyStore,
    AR: AttemptRepository,
{
    executor: SE,
    scaler: PS,
    query: DQ,
    properties: PR,
    ledger: AttemptLedger<AR>,
    image_repository: String,
}

impl<SE, PS, DQ, PR, AR> LifecycleRunner<SE, PS, DQ, PR, AR>
where
    SE: ScriptExecutor,
    PS: ProcessScaler,
    DQ: DeployQuery,
    PR: PropertyStore,
    AR: AttemptRepository,
{
    pub fn new(
        executor: SE,
        scaler: PS,
        query: DQ,
        properties: PR,
        attempts: AR,
        image_repository: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            scaler,
            query,
            properties,
            ledger: AttemptLedger::new(attempts),
            image_repository: image_repository.into(),
        }
    }

    fn run(&self, app: &AppName, image: &ImageRef, phase: LifecyclePhase) -> AppJsonResult<()> {
        info!(app = %app, phase = %phase, "executing script");
        self.executor.run(app, image, image.tag(), phase)?;
        Ok(())
    }

    /// Run the `predeploy` script.
    pub fn pre_release(
        &self,
        app: &AppName,
        image: &ImageRef,
        token: &AttemptToken,
    ) -> AppJsonResult<LifecycleReport> {
        self.ledger.check(app, token, AttemptStage::PreReleased)?;

        let mut report = LifecycleReport::default();
        self.run(app, image, LifecyclePhase::Predeploy)?;
        report.ran(LifecyclePhase::Predeploy);

        self.ledger.complete(app, token, AttemptStage::PreReleased)?;
        Ok(report)
    }

    /// Run `release`, apply the formation, then the first-deploy script.
    pub fn release(
        &self,
        app: &AppName,
        image: &ImageRef,
        token: &AttemptToken,
    ) -> AppJsonResult<LifecycleReport> {
        self.ledger.check(app, token, AttemptStage::Released)?;

        let mut report = LifecycleReport::default();
        self.run(app, image, LifecyclePhase::Release)?;
        report.ran(LifecyclePhase::Release);

        self.scaler.reconcile(app, image)?;

        match self.first_deploy_skip(app)? {
            Some(reason) => {
                debug!(app = %app, reason = %reason, "skipping heroku.postdeploy");
                report.skipped(LifecyclePhase::HerokuPostdeploy, reason);
            }
            None => {
                self.properties.set(
                    APP_JSON_NAMESPACE,
                    app,
                    POSTDEPLOY_MARKER_KEY,
                    POSTDEPLOY_MARKER_EXECUTED,
                )?;
                self.run(app, image, LifecyclePhase::HerokuPostdeploy)?;
                report.ran(LifecyclePhase::HerokuPostdeploy);
            }
        }

        self.ledger.complete(app, token, AttemptStage::Released)?;
        Ok(report)
    }

    fn first_deploy_skip(&self, app: &AppName) -> AppJsonResult<Option<SkipReason>> {
        if self.query.is_deployed(app)? {
            return Ok(Some(SkipReason::AlreadyDeployed));
        }
        let marker = self
            .properties
            .get(APP_JSON_NAMESPACE, app, POSTDEPLOY_MARKER_KEY)?;
        if marker.as_deref().map(str::trim) == Some(POSTDEPLOY_MARKER_EXECUTED) {
            return Ok(Some(SkipReason::MarkerPresent));
        }
        Ok(None)
    }

    /// Run the `postdeploy` script against the app's locally built image.
    pub fn post_deploy(
        &self,
        app: &AppName,
        image_tag: &str,
        token: &AttemptToken,
    ) -> AppJsonResult<LifecycleReport> {
        self.ledger.check(app, token, AttemptStage::Deployed)?;

        let image = ImageRef::for_app(&self.image_repository, app.as_str(), image_tag);
        let mut report = LifecycleReport::default();
        self.run(app, &image, LifecyclePhase::Postdeploy)?;
        report.ran(LifecyclePhase::Postdeploy);

        self.ledger.complete(app, token, AttemptStage::Deployed)?;
        Ok(report)
    }
}
