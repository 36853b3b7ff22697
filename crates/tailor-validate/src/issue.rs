//! Section-level validation outcomes.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use tailor_model::Cost;

/// The three independently checked parts of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    BasicInfo,
    Tags,
    Events,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::BasicInfo => "Basic info",
            Section::Tags => "Tags",
            Section::Events => "Events",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a section is not ready for submission.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("Please fill out all basic info fields.")]
    BasicInfoIncomplete,

    #[error("Description must be {max} characters or fewer.")]
    DescriptionTooLong { max: usize },

    #[error("Estimated cost must be between 0.00 and {max}.")]
    CostOutOfRange { max: Cost },

    #[error("Please select at least {min} tags.")]
    TooFewTags { min: usize },

    #[error("At least one complete event is required.")]
    NoCompleteEvent,

    #[error("Please complete all fields for incomplete events or delete them.")]
    IncompleteEvents,

    #[error("An itinerary can have at most {max} events in a 24-hour period.")]
    TooManyEvents { max: usize },

    #[error("Event descriptions must be {max} characters or fewer.")]
    EventDescriptionTooLong { max: usize },
}

impl Serialize for SectionError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Verdict of one check or check pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    Ok,
    Error(SectionError),
}

impl SectionOutcome {
    /// `Ok` when `passed`, otherwise the given error.
    pub fn require(passed: bool, error: SectionError) -> Self {
        if passed {
            SectionOutcome::Ok
        } else {
            SectionOutcome::Error(error)
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, SectionOutcome::Ok)
    }

    pub fn error(&self) -> Option<&SectionError> {
        match self {
            SectionOutcome::Ok => None,
            SectionOutcome::Error(error) => Some(error),
        }
    }

    pub fn into_error(self) -> Option<SectionError> {
        match self {
            SectionOutcome::Ok => None,
            SectionOutcome::Error(error) => Some(error),
        }
    }

    /// Keep `self` unless it passed, in which case run `next`.
    pub fn and_then(self, next: impl FnOnce() -> SectionOutcome) -> SectionOutcome {
        match self {
            SectionOutcome::Ok => next(),
            failed => failed,
        }
    }
}
