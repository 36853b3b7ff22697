//! Submission checks for Trip Tailor itinerary drafts.
//!
//! ## Sections
//!
//! - **Basic info**: name, location, description and a non-zero estimated
//!   cost are all required; description length and cost range are re-checked
//! - **Tags**: at least three tags (configurable)
//! - **Events**: blank events are dropped, at least one event must be
//!   complete, and no event may be half filled in
//!
//! A draft is submittable only when all three sections pass. All three are
//! checked on every call, so several messages can be reported at once.

pub mod checks;
pub mod issue;
pub mod options;
pub mod result;
mod validator;

pub use issue::{Section, SectionError, SectionOutcome};
pub use options::{DEFAULT_MIN_TAGS, ValidationOptions};
pub use result::{SubmissionPayload, ValidationResult};
pub use tailor_model::time_options;
pub use validator::{Validator, validate};
