//! Error types for the trajectory layer.
//!
//! Geometric degeneracy is carried as statuses inside the results, never
//! through this enum; only invalid caller input is a hard error.

use thiserror::Error;

/// Errors that can occur when building trajectory output.
#[derive(Error, Debug)]
pub enum TrajectoryError {
    /// The sample interval must be a positive, finite length.
    #[error("sample interval must be positive and finite, got {0}")]
    InvalidSampleInterval(f64),
}

/// Result type for trajectory operations.
pub type Result<T> = std::result::Result<T, TrajectoryError>;
