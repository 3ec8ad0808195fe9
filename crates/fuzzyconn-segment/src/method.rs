//! Segmentation entry point
//!
//! [`Method`] selects between the two engines as a tagged variant, each
//! carrying the parameters it needs; dispatch happens once, here.

use fuzzyconn_core::{FloatImage, LabelImage};

use crate::afc::absolute_connectedness;
use crate::affinity::{AffinityGraph, AffinityOptions};
use crate::error::SegmentResult;
use crate::irfc::{IrfcOptions, IrfcReport, iterative_relative_connectedness};
use crate::monitor::Monitor;
use crate::seeds::SeedSet;

/// Segmentation mode
#[derive(Debug, Clone)]
pub enum Method {
    /// Single-class connectedness map from all seeds
    Absolute,
    /// Multi-class competitive hard labeling
    IterativeRelative(IrfcOptions),
}

/// Full parameter set for a segmentation run
#[derive(Debug, Clone)]
pub struct SegmentationParams {
    /// Affinity graph construction options
    pub affinity: AffinityOptions,
    /// Which engine to run
    pub method: Method,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            affinity: AffinityOptions::default(),
            method: Method::Absolute,
        }
    }
}

impl SegmentationParams {
    /// Parameters for an absolute connectedness run
    pub fn absolute(affinity: AffinityOptions) -> Self {
        Self {
            affinity,
            method: Method::Absolute,
        }
    }

    /// Parameters for an iterative relative run
    pub fn iterative_relative(affinity: AffinityOptions, irfc: IrfcOptions) -> Self {
        Self {
            affinity,
            method: Method::IterativeRelative(irfc),
        }
    }
}

/// Result of a segmentation run, mirroring [`Method`]
#[derive(Debug, Clone)]
pub enum SegmentationOutput {
    /// Connectedness map in [0, 1] (absolute mode)
    Connectedness(FloatImage),
    /// Hard labels plus per-class convergence report (iterative relative mode)
    Labels(LabelImage, IrfcReport),
}

/// Segment a normalized image
///
/// Builds the affinity graph once and dispatches on the method. The image
/// is expected in [0, 1]; see `FloatImage::normalize`.
///
/// # Errors
///
/// Parameter and seed validation errors surface before graph construction;
/// `Cancelled` surfaces from the engines when the monitor aborts the run.
pub fn segment(
    image: &FloatImage,
    seeds: &SeedSet,
    params: &SegmentationParams,
    monitor: &dyn Monitor,
) -> SegmentResult<SegmentationOutput> {
    params.affinity.validate()?;
    crate::afc::check_seed_bounds(seeds.indices(), image.pixel_count())?;

    monitor.note("building affinity graph");
    let graph = AffinityGraph::build(image, &params.affinity)?;

    match &params.method {
        Method::Absolute => {
            let map = absolute_connectedness(&graph, seeds, monitor)?;
            Ok(SegmentationOutput::Connectedness(map))
        }
        Method::IterativeRelative(irfc) => {
            let (labels, report) =
                iterative_relative_connectedness(&graph, seeds, irfc, monitor)?;
            Ok(SegmentationOutput::Labels(labels, report))
        }
    }
}
