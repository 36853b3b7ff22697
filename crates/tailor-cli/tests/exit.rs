//! Exit code mapping and logging setup failures.

use std::path::PathBuf;

use tailor_cli::exit;
use tailor_cli::logging::{LogConfig, init_logging};

fn missing_log_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("trip-tailor-no-such-dir-{}", std::process::id()))
        .join("trip-tailor.log")
}

#[test]
fn verdicts_map_to_zero_and_one() {
    assert_eq!(exit::for_verdict(true), 0);
    assert_eq!(exit::for_verdict(false), 1);
}

#[test]
fn logging_setup_failure_uses_the_setup_error_code() {
    let config = LogConfig {
        log_file: Some(missing_log_path()),
        ..LogConfig::default()
    };

    assert!(init_logging(&config).is_err());
    assert_eq!(exit::SETUP_ERROR, 2);
    assert_ne!(exit::SETUP_ERROR, exit::for_verdict(false));
    assert_ne!(exit::SETUP_ERROR, exit::for_verdict(true));
}
