//! Validation check modules.
//!
//! Each module checks one section of the draft. Every check runs on every
//! validation; a failing section never hides the others.

mod basic;
pub mod events;
mod tags;

use tracing::debug;

use tailor_model::Draft;

use crate::options::ValidationOptions;
use crate::result::ValidationResult;

/// Run all section checks on a draft.
pub fn run_all(draft: &Draft, options: &ValidationOptions) -> ValidationResult {
    // 1. Basic info (presence, then form bounds)
    let basic_info = basic::check(&draft.basic_info, options);

    // 2. Tag count
    let tags = tags::check(&draft.tags, options);

    // 3. Events (completeness and partial-entry passes over the filled events)
    let events = events::check(&draft.events, options);

    let result = ValidationResult::from_outcomes(basic_info, tags, events);
    debug!(
        submittable = result.is_submittable,
        errors = result.error_count(),
        "validated draft"
    );
    result
}
