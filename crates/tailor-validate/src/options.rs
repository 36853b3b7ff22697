//! Validation thresholds.

use serde::{Deserialize, Serialize};

use tailor_model::{Cost, MAX_DESCRIPTION_LEN};

/// Minimum number of tags a submittable itinerary must carry.
pub const DEFAULT_MIN_TAGS: usize = 3;

/// Limits applied when checking a draft for submission.
///
/// The defaults match the bounds enforced by the input form, so a draft
/// edited only through the form never trips the length or range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Fewest selected tags accepted.
    pub min_tags: usize,
    /// Longest itinerary or event description accepted, in characters.
    pub max_description_len: usize,
    /// Largest estimated cost accepted.
    pub max_estimated_cost: Cost,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_tags: DEFAULT_MIN_TAGS,
            max_description_len: MAX_DESCRIPTION_LEN,
            max_estimated_cost: Cost::MAX_ESTIMATE,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_tags(mut self, min_tags: usize) -> Self {
        self.min_tags = min_tags;
        self
    }

    #[must_use]
    pub fn with_max_description_len(mut self, max: usize) -> Self {
        self.max_description_len = max;
        self
    }

    #[must_use]
    pub fn with_max_estimated_cost(mut self, max: Cost) -> Self {
        self.max_estimated_cost = max;
        self
    }
}
