//! Host image boundary
//!
//! The engines never touch files or containers themselves; a [`SliceHost`]
//! supplies the raw slice (with the global min/max used for normalization)
//! and receives the finished output. Any read or write failure aborts the
//! run with `SegmentError::Io` and nothing is written back.

use std::io;

use fuzzyconn_core::{FloatImage, LabelImage};

use crate::error::SegmentResult;
use crate::method::{SegmentationOutput, SegmentationParams, segment};
use crate::monitor::Monitor;
use crate::seeds::SeedSet;

/// Raw slice data as read from the host container
#[derive(Debug, Clone)]
pub struct HostSlice {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Samples in row-major order, length width * height
    pub samples: Vec<f32>,
    /// Global minimum of the source volume
    pub min: f32,
    /// Global maximum of the source volume
    pub max: f32,
}

/// Image container collaborator
///
/// Read and write errors use `std::io::Error` so hosts backed by real
/// containers can pass their failures through unchanged.
pub trait SliceHost {
    /// Read the source slice plus the global min/max for normalization
    fn read_slice(&mut self) -> io::Result<HostSlice>;

    /// Write back a connectedness map (absolute mode output)
    fn write_connectedness(&mut self, map: &FloatImage) -> io::Result<()>;

    /// Write back a hard label image (iterative relative mode output)
    fn write_labels(&mut self, labels: &LabelImage) -> io::Result<()>;
}

/// In-memory host holding one slice and capturing the output
///
/// The host used throughout the test suites; real deployments implement
/// [`SliceHost`] over their own image container.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    slice: Option<HostSlice>,
    /// Captured connectedness output, if an absolute run completed
    pub connectedness: Option<FloatImage>,
    /// Captured label output, if an iterative relative run completed
    pub labels: Option<LabelImage>,
}

impl MemoryHost {
    /// Create a host over the given samples, deriving min/max from them
    pub fn new(width: u32, height: u32, samples: Vec<f32>) -> Self {
        let min = samples.iter().copied().fold(f32::INFINITY, f32::min);
        let max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        MemoryHost {
            slice: Some(HostSlice {
                width,
                height,
                samples,
                min,
                max,
            }),
            connectedness: None,
            labels: None,
        }
    }
}

impl SliceHost for MemoryHost {
    fn read_slice(&mut self) -> io::Result<HostSlice> {
        self.slice
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no slice loaded"))
    }

    fn write_connectedness(&mut self, map: &FloatImage) -> io::Result<()> {
        self.connectedness = Some(map.clone());
        Ok(())
    }

    fn write_labels(&mut self, labels: &LabelImage) -> io::Result<()> {
        self.labels = Some(labels.clone());
        Ok(())
    }
}

/// Read a slice from the host, segment it, and write the output back
///
/// The driver normalizes the slice with the host-provided min/max,
/// validates the seed lists against the slice, runs [`segment`], and hands
/// the output to the matching write call. The output is also returned for
/// callers that want to inspect it directly.
///
/// # Errors
///
/// Host failures surface as `SegmentError::Io`; validation and engine
/// errors pass through from [`segment`]. On any error no output is
/// written.
pub fn run_segmentation<H: SliceHost>(
    host: &mut H,
    seed_indices: &[usize],
    seed_labels: &[u32],
    params: &SegmentationParams,
    monitor: &dyn Monitor,
) -> SegmentResult<SegmentationOutput> {
    let slice = host.read_slice()?;
    let mut image = FloatImage::from_data(slice.width, slice.height, slice.samples)?;
    image.normalize(slice.min, slice.max);

    let seeds = SeedSet::new(seed_indices.to_vec(), seed_labels.to_vec(), image.pixel_count())?;
    let output = segment(&image, &seeds, params, monitor)?;

    match &output {
        SegmentationOutput::Connectedness(map) => host.write_connectedness(map)?,
        SegmentationOutput::Labels(labels, _) => host.write_labels(labels)?,
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SegmentError;
    use crate::monitor::NullMonitor;

    #[test]
    fn test_memory_host_round_trip() {
        let samples = vec![100.0; 16];
        let mut host = MemoryHost::new(4, 4, samples);
        let params = SegmentationParams::default();

        let output =
            run_segmentation(&mut host, &[5], &[1], &params, &NullMonitor).unwrap();

        assert!(matches!(output, SegmentationOutput::Connectedness(_)));
        let written = host.connectedness.expect("output written to host");
        assert_eq!(written.dimensions(), (4, 4));
    }

    #[test]
    fn test_read_failure_is_io_error() {
        let mut host = MemoryHost::default();
        let params = SegmentationParams::default();

        let err =
            run_segmentation(&mut host, &[0], &[1], &params, &NullMonitor).unwrap_err();

        assert!(matches!(err, SegmentError::Io(_)));
        assert!(host.connectedness.is_none());
        assert!(host.labels.is_none());
    }

    #[test]
    fn test_bad_seed_writes_nothing() {
        let mut host = MemoryHost::new(4, 4, vec![0.0; 16]);
        let params = SegmentationParams::default();

        let err =
            run_segmentation(&mut host, &[16], &[1], &params, &NullMonitor).unwrap_err();

        assert!(matches!(err, SegmentError::SeedOutOfRange { index: 16, len: 16 }));
        assert!(host.connectedness.is_none());
    }
}
