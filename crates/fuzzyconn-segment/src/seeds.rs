//! Seed sets
//!
//! A seed is a pixel with a known class label, used as a propagation source.
//! Labels start at 1. `SeedSet` validates the caller's parallel index/label
//! lists once, before any graph is built, so the engines can assume every
//! index is in range and unique.

use std::collections::HashSet;

use crate::error::{SegmentError, SegmentResult};

/// Validated set of seed pixels with class labels
#[derive(Debug, Clone)]
pub struct SeedSet {
    indices: Vec<usize>,
    labels: Vec<u32>,
}

impl SeedSet {
    /// Build a seed set from parallel index and label lists
    ///
    /// # Arguments
    ///
    /// * `indices` - flat pixel indices, each in `[0, pixel_count)`
    /// * `labels` - class label per seed, starting at 1
    /// * `pixel_count` - number of pixels in the target image
    ///
    /// # Errors
    ///
    /// Rejects mismatched list lengths, an empty set, zero labels,
    /// out-of-range indices, and indices listed more than once.
    pub fn new(indices: Vec<usize>, labels: Vec<u32>, pixel_count: usize) -> SegmentResult<Self> {
        if indices.len() != labels.len() {
            return Err(SegmentError::SeedLabelMismatch {
                seeds: indices.len(),
                labels: labels.len(),
            });
        }
        if indices.is_empty() {
            return Err(SegmentError::InvalidParameters(
                "at least one seed is required".to_string(),
            ));
        }
        if let Some(&label) = labels.iter().find(|&&l| l == 0) {
            return Err(SegmentError::InvalidParameters(format!(
                "seed labels start at 1, got {label}"
            )));
        }
        let mut seen = HashSet::with_capacity(indices.len());
        for &index in &indices {
            if index >= pixel_count {
                return Err(SegmentError::SeedOutOfRange {
                    index,
                    len: pixel_count,
                });
            }
            if !seen.insert(index) {
                return Err(SegmentError::DuplicateSeed { index });
            }
        }

        Ok(SeedSet { indices, labels })
    }

    /// Number of seeds
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if the set holds no seeds (never the case after validation)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Seed pixel indices
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Seed class labels, parallel to [`indices`](Self::indices)
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Distinct class labels present, in ascending order
    pub fn class_labels(&self) -> Vec<u32> {
        let mut labels = self.labels.clone();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Split seed indices into (label == `label`, label != `label`)
    ///
    /// The first list is the object for one IRFC class, the second the
    /// competing background built from every other class's seeds.
    pub fn partition(&self, label: u32) -> (Vec<usize>, Vec<usize>) {
        let mut object = Vec::new();
        let mut background = Vec::new();
        for (&index, &l) in self.indices.iter().zip(&self.labels) {
            if l == label {
                object.push(index);
            } else {
                background.push(index);
            }
        }
        (object, background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_seed_set() {
        let seeds = SeedSet::new(vec![0, 5, 8], vec![1, 1, 2], 9).unwrap();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds.class_labels(), vec![1, 2]);
    }

    #[test]
    fn test_length_mismatch() {
        let err = SeedSet::new(vec![0, 1], vec![1], 9).unwrap_err();
        assert!(matches!(
            err,
            SegmentError::SeedLabelMismatch { seeds: 2, labels: 1 }
        ));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(SeedSet::new(vec![], vec![], 9).is_err());
    }

    #[test]
    fn test_zero_label_rejected() {
        assert!(SeedSet::new(vec![0], vec![0], 9).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = SeedSet::new(vec![9], vec![1], 9).unwrap_err();
        assert!(matches!(err, SegmentError::SeedOutOfRange { index: 9, len: 9 }));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = SeedSet::new(vec![3, 3], vec![1, 2], 9).unwrap_err();
        assert!(matches!(err, SegmentError::DuplicateSeed { index: 3 }));
    }

    #[test]
    fn test_partition() {
        let seeds = SeedSet::new(vec![0, 4, 8, 2], vec![1, 2, 1, 3], 9).unwrap();
        let (object, background) = seeds.partition(1);
        assert_eq!(object, vec![0, 8]);
        assert_eq!(background, vec![4, 2]);
    }
}
