//! Draft editing for Trip Tailor itineraries.
//!
//! [`DraftStore`] owns one [`Draft`](tailor_model::Draft) for the length of an
//! editing session and applies the caller's edits to it. Validation lives in
//! `tailor-validate` and only ever reads a snapshot.

pub mod command;
pub mod error;
pub mod store;

pub use command::DraftCommand;
pub use error::{DraftError, Result};
pub use store::DraftStore;
