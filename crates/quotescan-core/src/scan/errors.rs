//! Configuration errors for quote-aware scans.

use thiserror::Error;

/// Error returned when a scan is called with an unusable argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("needle must not be empty")]
    EmptyNeedle,

    #[error("split token must not be empty")]
    EmptySplitToken,
}
