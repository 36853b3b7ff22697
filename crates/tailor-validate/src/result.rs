//! Validation results and the submission payload.

use serde::Serialize;

use tailor_model::{BasicInfo, Draft, Event};

use crate::issue::{Section, SectionError, SectionOutcome};

/// Verdict for a whole draft.
///
/// Built fresh by every validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub basic_info_error: Option<SectionError>,
    pub tag_error: Option<SectionError>,
    pub event_error: Option<SectionError>,
    pub is_submittable: bool,
}

impl ValidationResult {
    pub fn from_outcomes(
        basic_info: SectionOutcome,
        tags: SectionOutcome,
        events: SectionOutcome,
    ) -> Self {
        let basic_info_error = basic_info.into_error();
        let tag_error = tags.into_error();
        let event_error = events.into_error();
        let is_submittable =
            basic_info_error.is_none() && tag_error.is_none() && event_error.is_none();
        Self {
            basic_info_error,
            tag_error,
            event_error,
            is_submittable,
        }
    }

    /// The error recorded for `section`, if any.
    pub fn section_error(&self, section: Section) -> Option<&SectionError> {
        match section {
            Section::BasicInfo => self.basic_info_error.as_ref(),
            Section::Tags => self.tag_error.as_ref(),
            Section::Events => self.event_error.as_ref(),
        }
    }

    /// Failing sections in display order.
    pub fn errors(&self) -> impl Iterator<Item = (Section, &SectionError)> {
        [Section::BasicInfo, Section::Tags, Section::Events]
            .into_iter()
            .filter_map(|section| self.section_error(section).map(|error| (section, error)))
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

/// What is handed to the persistence layer once a draft passes validation.
///
/// Blank events are left out; the remaining events keep their list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub basic_info: BasicInfo,
    pub tags: Vec<String>,
    pub events: Vec<Event>,
}

impl SubmissionPayload {
    /// Payload for `draft` if `result` (its validation verdict) allows
    /// submission.
    pub fn for_result(draft: &Draft, result: &ValidationResult) -> Option<Self> {
        result.is_submittable.then(|| Self::from_draft(draft))
    }

    fn from_draft(draft: &Draft) -> Self {
        Self {
            basic_info: draft.basic_info.clone(),
            tags: draft.tags.iter().map(str::to_string).collect(),
            events: draft.filled_events().cloned().collect(),
        }
    }
}
