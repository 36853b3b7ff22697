use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid time slot {0:?} (expected a half-hour value from 1:00 to 12:30)")]
    InvalidTimeSlot(String),

    #[error("invalid period {0:?} (expected AM or PM)")]
    InvalidPeriod(String),

    #[error("invalid cost {0:?} (expected a decimal amount with at most two fractional digits)")]
    InvalidCost(String),

    #[error("failed to read tag catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tag catalog {path}: {source}")]
    CatalogJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse built-in tag catalog: {0}")]
    BuiltinCatalog(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
