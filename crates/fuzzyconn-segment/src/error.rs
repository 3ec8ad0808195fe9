//! Error types for fuzzyconn-segment

use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fuzzyconn_core::Error),

    /// Seed index outside the image
    #[error("seed index out of range: {index} >= {len}")]
    SeedOutOfRange { index: usize, len: usize },

    /// Seed index listed more than once
    #[error("duplicate seed index: {index}")]
    DuplicateSeed { index: usize },

    /// Seed and label lists have different lengths
    #[error("seed/label length mismatch: {seeds} seeds vs {labels} labels")]
    SeedLabelMismatch { seeds: usize, labels: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Host slice read or write failed; the run is incomplete and no
    /// output was written
    #[error("host I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The run was cancelled through the monitor; partial state discarded
    #[error("segmentation cancelled")]
    Cancelled,
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
