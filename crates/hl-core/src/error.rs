//! Error types for the day-conclusion engine.

use thiserror::Error;

/// Alias for `Result<T, HlError>`.
pub type HlResult<T> = Result<T, HlError>;

/// Errors that can occur while resolving a day conclusion.
///
/// Missing solar terms, missing level indicators and unknown day-gods are
/// absorbed by fallback rules and never surface here.
#[derive(Debug, Error)]
pub enum HlError {
    /// The officer/category tables could not be loaded.
    #[error("activity catalog unavailable: {0}")]
    Catalog(String),

    /// The snapshot has no officer label but the officer tables are needed.
    #[error("almanac snapshot has no officer label")]
    MissingOfficer,

    /// The officer label has no entry in the officer tables.
    #[error("no officer table entry for \"{0}\"")]
    UnknownOfficer(String),
}
