//! Draft validation entry points.

use tracing::info_span;

use tailor_model::Draft;

use crate::checks;
use crate::options::ValidationOptions;
use crate::result::{SubmissionPayload, ValidationResult};

/// Checks drafts against a fixed set of [`ValidationOptions`].
///
/// Validation only reads the draft, so the same validator can be reused for
/// every submit attempt in a session.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    /// Create a validator with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Check every section of `draft`.
    pub fn validate(&self, draft: &Draft) -> ValidationResult {
        let span = info_span!("validate", events = draft.events.len(), tags = draft.tags.len());
        let _guard = span.enter();
        checks::run_all(draft, &self.options)
    }

    /// Build the submission payload, or return the failing result.
    pub fn submission(&self, draft: &Draft) -> Result<SubmissionPayload, ValidationResult> {
        let result = self.validate(draft);
        SubmissionPayload::for_result(draft, &result).ok_or(result)
    }
}

/// Validate with the default thresholds.
pub fn validate(draft: &Draft) -> ValidationResult {
    Validator::new().validate(draft)
}
