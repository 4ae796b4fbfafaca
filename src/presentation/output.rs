//! Output Rendering
//!
//! Renders use-case results as text or JSON. Renderers return strings so
//! the command layer decides where they go.

use serde_json::json;

use crate::application::{LifecycleReport, PhaseOutcome, SettingsReport};
use crate::domain::entities::{AttemptRecord, CommitOutcome, DocumentState, StageOutcome};
use crate::domain::value_objects::{AppName, AttemptToken};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for text output
struct Icons {
    ran: &'static str,
    skip: &'static str,
}

const ICONS: Icons = Icons {
    ran: "✓",
    skip: "○",
};

pub fn render_stage(app: &AppName, token: &AttemptToken, outcome: StageOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{app}: app.json {outcome} for attempt {token}"),
        OutputFormat::Json => json!({
            "app": app.as_str(),
            "attempt": token.as_str(),
            "outcome": outcome.to_string(),
        })
        .to_string(),
    }
}

pub fn render_commit(app: &AppName, token: &AttemptToken, outcome: CommitOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{app}: app.json {outcome} for attempt {token}"),
        OutputFormat::Json => json!({
            "app": app.as_str(),
            "attempt": token.as_str(),
            "outcome": outcome.to_string(),
        })
        .to_string(),
    }
}

/// One line per phase in text mode; an array of `{phase, ran, reason}` in JSON.
pub fn render_lifecycle(app: &AppName, report: &LifecycleReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => report
            .entries()
            .iter()
            .map(|(phase, outcome)| match outcome {
                PhaseOutcome::Ran => format!("{} {app}: {phase}", ICONS.ran),
                PhaseOutcome::Skipped(reason) => {
                    format!("{} {app}: {phase} skipped ({reason})", ICONS.skip)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let phases: Vec<_> = report
                .entries()
                .iter()
                .map(|(phase, outcome)| match outcome {
                    PhaseOutcome::Ran => json!({ "phase": phase.as_str(), "ran": true }),
                    PhaseOutcome::Skipped(reason) => json!({
                        "phase": phase.as_str(),
                        "ran": false,
                        "reason": reason.to_string(),
                    }),
                })
                .collect();
            json!({ "app": app.as_str(), "phases": phases }).to_string()
        }
    }
}

/// Aligned `label: value` rows.
pub fn render_settings(report: &SettingsReport, format: OutputFormat) -> String {
    let rows = report.rows();
    match format {
        OutputFormat::Text => {
            let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
            rows.iter()
                .map(|(label, value)| format!("{label:<width$}  {value}"))
                .collect::<Vec<_>>()
                .join("\n")
        }
        OutputFormat::Json => {
            let map: serde_json::Map<_, _> = rows
                .iter()
                .map(|(label, value)| (label.to_string(), json!(value)))
                .collect();
            serde_json::Value::Object(map).to_string()
        }
    }
}

pub fn render_status(
    app: &AppName,
    state: &DocumentState,
    record: Option<&AttemptRecord>,
    format: OutputFormat,
) -> String {
    let document = match state {
        DocumentState::Pending(outcome) => format!("pending ({outcome})"),
        DocumentState::Committed(_) => "committed".to_string(),
        DocumentState::Absent => "absent".to_string(),
    };

    match format {
        OutputFormat::Text => {
            let mut lines = vec![format!("document  {document}")];
            match record {
                Some(record) => {
                    lines.push(format!("attempt   {}", record.token()));
                    lines.push(format!("stage     {}", record.stage()));
                    lines.push(format!("updated   {}", record.updated_at().to_rfc3339()));
                }
                None => lines.push("attempt   none".to_string()),
            }
            lines.join("\n")
        }
        OutputFormat::Json => json!({
            "app": app.as_str(),
            "document": document,
            "attempt": record.map(|r| json!({
                "token": r.token().as_str(),
                "stage": r.stage().to_string(),
                "updated_at": r.updated_at().to_rfc3339(),
            })),
        })
        .to_string(),
    }
}
