//! Fuzzyconn - fuzzy connectedness image segmentation
//!
//! Graph-based segmentation of grayscale slices by fuzzy connectedness:
//! an affinity graph over pixels, absolute fuzzy connectedness (AFC)
//! propagation for single-class connectedness maps, and iterative
//! relative fuzzy connectedness (IRFC) for hard multi-class labeling.
//!
//! # Example
//!
//! ```
//! use fuzzyconn::{FloatImage, segment::{self, NullMonitor, SeedSet, SegmentationParams}};
//!
//! let image = FloatImage::new_with_value(32, 32, 0.5).unwrap();
//! let seeds = SeedSet::new(vec![16 * 32 + 16], vec![1], 1024).unwrap();
//! let params = SegmentationParams::default();
//!
//! let output = segment::segment(&image, &seeds, &params, &NullMonitor).unwrap();
//! assert!(matches!(output, segment::SegmentationOutput::Connectedness(_)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use fuzzyconn_core::*;

// Re-export the segmentation crate as a module
pub use fuzzyconn_segment as segment;
