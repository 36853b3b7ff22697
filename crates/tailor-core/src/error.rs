use thiserror::Error;

/// Rejected draft mutations.
///
/// None of these end the editing session; the draft is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Cannot add more than {max} events in a 24-hour period.")]
    Capacity { max: usize },

    #[error("event index {index} is out of range for a list of {len} events")]
    EventIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, DraftError>;
