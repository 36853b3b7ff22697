//! Tag count check.

use tailor_model::TagSelection;

use crate::issue::{SectionError, SectionOutcome};
use crate::options::ValidationOptions;

pub fn check(tags: &TagSelection, options: &ValidationOptions) -> SectionOutcome {
    SectionOutcome::require(
        tags.len() >= options.min_tags,
        SectionError::TooFewTags {
            min: options.min_tags,
        },
    )
}
