//! Draft checks as run by the command line tool.
//!
//! The binary only parses arguments and prints; the work of replaying a
//! session and validating its draft happens here so it can be tested without
//! a terminal.

use serde::Serialize;
use tracing::{info, warn};

use tailor_core::{DraftCommand, DraftStore};
use tailor_model::{Draft, TagCatalog};
use tailor_validate::{SubmissionPayload, ValidationResult, Validator};

/// Catalog and thresholds shared by every check in one invocation.
pub struct CheckSettings<'a> {
    pub catalog: &'a TagCatalog,
    pub validator: &'a Validator,
    pub include_payload: bool,
}

/// A session command the draft store refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedCommand {
    /// Zero-based position in the session file.
    pub position: usize,
    pub op: String,
    pub reason: String,
}

/// Everything printed for one checked draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReport {
    pub source: String,
    pub event_count: usize,
    pub filled_event_count: usize,
    pub tag_count: usize,
    pub unknown_tags: Vec<String>,
    pub rejected_commands: Vec<RejectedCommand>,
    pub capacity_notice: Option<String>,
    pub result: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<SubmissionPayload>,
}

impl DraftReport {
    pub fn is_submittable(&self) -> bool {
        self.result.is_submittable
    }
}

/// Validate a draft and note tags the catalog does not offer.
pub fn check_draft(source: &str, draft: &Draft, settings: &CheckSettings<'_>) -> DraftReport {
    let unknown_tags: Vec<String> = settings
        .catalog
        .unknown_tags(&draft.tags)
        .into_iter()
        .map(str::to_string)
        .collect();
    for tag in &unknown_tags {
        warn!(source, tag = %tag, "tag is not in the catalog");
    }

    let result = settings.validator.validate(draft);
    let payload = if settings.include_payload {
        SubmissionPayload::for_result(draft, &result)
    } else {
        None
    };
    info!(source, submittable = result.is_submittable, "checked draft");

    DraftReport {
        source: source.to_string(),
        event_count: draft.events.len(),
        filled_event_count: draft.filled_events().count(),
        tag_count: draft.tags.len(),
        unknown_tags,
        rejected_commands: Vec::new(),
        capacity_notice: None,
        result,
        payload,
    }
}

/// Apply session commands to a fresh draft, collecting refusals.
pub fn replay(commands: Vec<DraftCommand>) -> (DraftStore, Vec<RejectedCommand>) {
    let mut store = DraftStore::new();
    let mut rejected = Vec::new();
    for (position, command) in commands.into_iter().enumerate() {
        let op = command.name();
        if let Err(error) = store.apply(command) {
            warn!(position, op, %error, "command refused");
            rejected.push(RejectedCommand {
                position,
                op: op.to_string(),
                reason: error.to_string(),
            });
        }
    }
    (store, rejected)
}

/// Replay a session and check the resulting draft.
pub fn check_session(
    source: &str,
    commands: Vec<DraftCommand>,
    settings: &CheckSettings<'_>,
) -> DraftReport {
    let command_count = commands.len();
    let (store, rejected) = replay(commands);
    info!(
        source,
        commands = command_count,
        rejected = rejected.len(),
        "replayed session"
    );
    let mut report = check_draft(source, store.draft(), settings);
    report.rejected_commands = rejected;
    report.capacity_notice = store.capacity_notice().map(str::to_string);
    report
}
