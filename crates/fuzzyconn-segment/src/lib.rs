//! fuzzyconn-segment - Fuzzy connectedness segmentation engines
//!
//! This crate implements graph-based fuzzy connectedness segmentation:
//!
//! - **Affinity graph construction** - sparse weighted adjacency over pixels,
//!   combining spatial proximity and intensity similarity
//! - **Absolute fuzzy connectedness (AFC)** - max-min path-strength
//!   propagation from a seed set, yielding a connectedness map in [0, 1]
//! - **Iterative relative fuzzy connectedness (IRFC)** - multi-class
//!   competitive propagation yielding a hard label image
//!
//! # Examples
//!
//! ## Absolute connectedness from a single seed
//!
//! ```
//! use fuzzyconn_core::FloatImage;
//! use fuzzyconn_segment::{
//!     AffinityGraph, AffinityOptions, NullMonitor, SeedSet, absolute_connectedness,
//! };
//!
//! let image = FloatImage::new_with_value(16, 16, 0.5).unwrap();
//! let graph = AffinityGraph::build(&image, &AffinityOptions::default()).unwrap();
//! let seeds = SeedSet::new(vec![8 * 16 + 8], vec![1], 256).unwrap();
//!
//! let map = absolute_connectedness(&graph, &seeds, &NullMonitor).unwrap();
//! assert_eq!(map.get_pixel(8, 8).unwrap(), 1.0);
//! ```
//!
//! ## Multi-class segmentation through the entry point
//!
//! ```
//! use fuzzyconn_core::FloatImage;
//! use fuzzyconn_segment::{
//!     AffinityOptions, IrfcOptions, NullMonitor, SeedSet, SegmentationOutput,
//!     SegmentationParams, segment,
//! };
//!
//! let mut image = FloatImage::new(8, 8).unwrap();
//! for y in 0..8 {
//!     for x in 0..8 {
//!         image.set_pixel(x, y, if x < 4 { 0.1 } else { 0.9 }).unwrap();
//!     }
//! }
//! let seeds = SeedSet::new(vec![8, 15], vec![1, 2], 64).unwrap();
//! let params =
//!     SegmentationParams::iterative_relative(AffinityOptions::default(), IrfcOptions::new());
//!
//! match segment(&image, &seeds, &params, &NullMonitor).unwrap() {
//!     SegmentationOutput::Labels(labels, report) => {
//!         assert!(report.all_converged());
//!         assert_eq!(labels.get_pixel(0, 1).unwrap(), 1);
//!         assert_eq!(labels.get_pixel(7, 1).unwrap(), 2);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod afc;
pub mod affinity;
pub mod error;
pub mod host;
pub mod irfc;
pub mod method;
pub mod monitor;
pub mod seeds;

// Re-export core types
pub use fuzzyconn_core;

// Re-export error types
pub use error::{SegmentError, SegmentResult};

// Re-export affinity types and functions
pub use affinity::{AffinityGraph, AffinityOptions};

// Re-export engine entry points
pub use afc::{SEED_STRENGTH, absolute_connectedness};
pub use irfc::{ClassReport, IrfcOptions, IrfcReport, iterative_relative_connectedness};

// Re-export parameter and dispatch types
pub use method::{Method, SegmentationOutput, SegmentationParams, segment};

// Re-export seed and collaborator types
pub use host::{HostSlice, MemoryHost, SliceHost, run_segmentation};
pub use monitor::{Monitor, NullMonitor};
pub use seeds::SeedSet;
