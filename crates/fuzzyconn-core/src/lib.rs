//! fuzzyconn-core - Core data structures for fuzzy connectedness segmentation
//!
//! This crate provides the buffer types shared by the segmentation engines:
//!
//! - [`FloatImage`] - a single-slice floating-point image, used both for the
//!   normalized intensity input and for connectedness maps
//! - [`LabelImage`] - a hard per-pixel label image, the multi-class output
//! - [`Error`] / [`Result`] - the crate-wide error type
//!
//! # Examples
//!
//! ```
//! use fuzzyconn_core::{FloatImage, LabelImage};
//!
//! // Normalize a raw slice into [0, 1] using the host's global min/max
//! let mut slice = FloatImage::from_data(2, 2, vec![10.0, 20.0, 30.0, 40.0]).unwrap();
//! slice.normalize(10.0, 40.0);
//! assert_eq!(slice.max_value(), Some(1.0));
//!
//! // Label buffers start out unassigned
//! let labels = LabelImage::new(2, 2).unwrap();
//! assert_eq!(labels.count_label(0), 4);
//! ```

pub mod error;
pub mod fslice;
pub mod labels;

pub use error::{Error, Result};
pub use fslice::FloatImage;
pub use labels::LabelImage;
