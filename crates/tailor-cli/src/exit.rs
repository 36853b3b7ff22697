//! Process exit codes for `trip-tailor`.

/// The draft is submittable, or a listing command succeeded.
pub const SUCCESS: i32 = 0;

/// The draft was checked and is not submittable.
pub const NOT_SUBMITTABLE: i32 = 1;

/// Input could not be read, or setup (logging, catalog) failed.
pub const SETUP_ERROR: i32 = 2;

/// Exit code for a completed check.
pub fn for_verdict(submittable: bool) -> i32 {
    if submittable {
        SUCCESS
    } else {
        NOT_SUBMITTABLE
    }
}
