//! Library side of the `trip-tailor` command line tool.

pub mod exit;
pub mod logging;
pub mod report;
