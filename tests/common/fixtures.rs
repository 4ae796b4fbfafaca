//! Test fixtures - reusable app.json documents.

/// Only a release script
pub const RELEASE_ONLY: &str = r#"{"scripts":{"release":"migrate"}}"#;

/// Every lifecycle slot filled
pub const ALL_SCRIPTS: &str = r#"{
  "name": "web",
  "scripts": {
    "dokku": {
      "predeploy": "echo predeploy",
      "postdeploy": "echo postdeploy"
    },
    "postdeploy": "echo first-deploy",
    "release": "echo release"
  }
}"#;

/// A formation with parallelism for `web`
pub const FORMATION: &str = r#"{
  "formation": {
    "web": { "quantity": 2, "max_parallel": 4 },
    "worker": { "quantity": 1 }
  }
}"#;

/// Document whose scripts append their phase to `log`
pub fn logging_scripts(log: &std::path::Path) -> String {
    let log = log.display();
    serde_json::json!({
        "scripts": {
            "dokku": {
                "predeploy": format!("echo \"$PHASE\" >> {log}"),
                "postdeploy": format!("echo \"$PHASE $TAG\" >> {log}"),
            },
            "postdeploy": format!("echo \"$PHASE\" >> {log}"),
            "release": format!("echo \"$PHASE $APP\" >> {log}"),
        }
    })
    .to_string()
}
