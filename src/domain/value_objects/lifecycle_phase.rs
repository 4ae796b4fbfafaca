//! Lifecycle phase value object

use serde::{Deserialize, Serialize};

/// A named lifecycle script slot.
///
/// Wire names match the hook names the script executor receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Runs before the release phase, once the artifact is built
    #[serde(rename = "predeploy")]
    Predeploy,
    /// Runs once the image is ready to be released
    #[serde(rename = "release")]
    Release,
    /// First-deploy script, guarded by the execution marker
    #[serde(rename = "heroku.postdeploy")]
    HerokuPostdeploy,
    /// Runs after every successful deploy
    #[serde(rename = "postdeploy")]
    Postdeploy,
}

impl LifecyclePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecyclePhase::Predeploy => "predeploy",
            LifecyclePhase::Release => "release",
            LifecyclePhase::HerokuPostdeploy => "heroku.postdeploy",
            LifecyclePhase::Postdeploy => "postdeploy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "predeploy" => Some(LifecyclePhase::Predeploy),
            "release" => Some(LifecyclePhase::Release),
            "heroku.postdeploy" => Some(LifecyclePhase::HerokuPostdeploy),
            "postdeploy" => Some(LifecyclePhase::Postdeploy),
            _ => None,
        }
    }

    /// Whether the phase is guarded by the execution marker.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecyclePhase::HerokuPostdeploy)
    }
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
