//! Affinity graph construction
//!
//! The affinity graph is a sparse weighted adjacency relation over image
//! pixels. Each pixel is connected to every neighbor inside a diamond
//! neighborhood (|dx| + |dy| <= `l1_distance`, including itself), with an
//! edge weight that combines spatial proximity and intensity similarity:
//!
//! ```text
//! adjacency = 1 / (1 + distance_decline * sqrt(dy^2 + dx^2))
//! affinity  = adjacency / (1 + gradient_weight * |f[p1] - f[p2]|)
//! ```
//!
//! Weights are in (0, 1]; higher means stronger affinity. Edges are stored
//! grouped by ascending source pixel in row-major order. The propagation
//! engines rely on this grouping, exposed here as a CSR offset table.

use fuzzyconn_core::FloatImage;

use crate::error::{SegmentError, SegmentResult};

/// Options for affinity graph construction
#[derive(Debug, Clone)]
pub struct AffinityOptions {
    /// Neighborhood radius: neighbors with |dx| + |dy| <= l1_distance
    pub l1_distance: u32,
    /// How fast affinity declines with spatial distance
    pub distance_decline: f32,
    /// How fast affinity declines with intensity difference
    pub gradient_weight: f32,
}

impl Default for AffinityOptions {
    fn default() -> Self {
        Self {
            l1_distance: 1,
            distance_decline: 0.1,
            gradient_weight: 10.0,
        }
    }
}

impl AffinityOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighborhood radius
    pub fn with_l1_distance(mut self, l1_distance: u32) -> Self {
        self.l1_distance = l1_distance;
        self
    }

    /// Set the distance decline factor
    pub fn with_distance_decline(mut self, distance_decline: f32) -> Self {
        self.distance_decline = distance_decline;
        self
    }

    /// Set the gradient weight
    pub fn with_gradient_weight(mut self, gradient_weight: f32) -> Self {
        self.gradient_weight = gradient_weight;
        self
    }

    /// Check the option ranges
    ///
    /// # Errors
    ///
    /// Rejects a zero neighborhood radius and non-positive or non-finite
    /// decline factors.
    pub fn validate(&self) -> SegmentResult<()> {
        if self.l1_distance == 0 {
            return Err(SegmentError::InvalidParameters(
                "l1_distance must be at least 1".to_string(),
            ));
        }
        if !(self.distance_decline > 0.0 && self.distance_decline.is_finite()) {
            return Err(SegmentError::InvalidParameters(format!(
                "distance_decline must be a positive finite value, got {}",
                self.distance_decline
            )));
        }
        if !(self.gradient_weight > 0.0 && self.gradient_weight.is_finite()) {
            return Err(SegmentError::InvalidParameters(format!(
                "gradient_weight must be a positive finite value, got {}",
                self.gradient_weight
            )));
        }
        Ok(())
    }
}

/// Sparse pixel-adjacency graph with affinity weights
///
/// Edges are held as three parallel sequences (`from`, `to`, `weight`),
/// grouped by ascending `from`. `offsets` gives each pixel's contiguous
/// edge range: pixel `p` owns edges `offsets[p]..offsets[p + 1]`.
#[derive(Debug, Clone)]
pub struct AffinityGraph {
    width: u32,
    height: u32,
    from: Vec<u32>,
    to: Vec<u32>,
    weight: Vec<f32>,
    offsets: Vec<usize>,
}

impl AffinityGraph {
    /// Build the affinity graph for a normalized image
    ///
    /// Enumerates, for every pixel, the neighbors inside the diamond
    /// neighborhood (clipped at the image border) and appends one directed
    /// edge per ordered pair in row-major source order. The neighborhood is
    /// symmetric, so every edge is paired with its reverse.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` if `options` fail validation.
    pub fn build(image: &FloatImage, options: &AffinityOptions) -> SegmentResult<Self> {
        options.validate()?;

        let width = image.width();
        let height = image.height();
        let pixel_count = image.pixel_count();
        if pixel_count > u32::MAX as usize {
            return Err(SegmentError::InvalidParameters(format!(
                "image too large for 32-bit pixel indices: {pixel_count} pixels"
            )));
        }

        let radius = options.l1_distance as i64;
        let f = image.data();

        // Neighborhood size bounds the edge count: 2r^2 + 2r + 1 per pixel.
        let per_pixel = (2 * radius * radius + 2 * radius + 1) as usize;
        let mut from = Vec::with_capacity(pixel_count * per_pixel);
        let mut to = Vec::with_capacity(pixel_count * per_pixel);
        let mut weight = Vec::with_capacity(pixel_count * per_pixel);
        let mut offsets = Vec::with_capacity(pixel_count + 1);
        offsets.push(0);

        for y in 0..height as i64 {
            for x in 0..width as i64 {
                let p1 = (y * width as i64 + x) as usize;
                for y_dist in -radius..=radius {
                    let ya = y + y_dist;
                    if ya < 0 || ya >= height as i64 {
                        continue;
                    }
                    let x_reach = radius - y_dist.abs();
                    for x_dist in -x_reach..=x_reach {
                        let xa = x + x_dist;
                        if xa < 0 || xa >= width as i64 {
                            continue;
                        }
                        let p2 = (ya * width as i64 + xa) as usize;
                        let dist_sq = (y_dist * y_dist + x_dist * x_dist) as f32;
                        let adjacency =
                            1.0 / (1.0 + options.distance_decline * dist_sq.sqrt());
                        let grad = (f[p1] - f[p2]).abs();
                        let affinity = adjacency / (1.0 + options.gradient_weight * grad);

                        from.push(p1 as u32);
                        to.push(p2 as u32);
                        weight.push(affinity);
                    }
                }
                offsets.push(from.len());
            }
        }

        debug_assert!(from.windows(2).all(|w| w[0] <= w[1]));
        debug_assert_eq!(offsets.len(), pixel_count + 1);

        Ok(AffinityGraph {
            width,
            height,
            from,
            to,
            weight,
            offsets,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of graph nodes (pixels)
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of directed edges
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.from.len()
    }

    /// Edge source indices, grouped ascending
    #[inline]
    pub fn from_indices(&self) -> &[u32] {
        &self.from
    }

    /// Edge target indices, parallel to [`from_indices`](Self::from_indices)
    #[inline]
    pub fn to_indices(&self) -> &[u32] {
        &self.to
    }

    /// Edge weights, parallel to [`from_indices`](Self::from_indices)
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weight
    }

    /// Iterate the outgoing edges of pixel `p` as (target, weight) pairs
    #[inline]
    pub fn edges(&self, p: usize) -> impl Iterator<Item = (usize, f32)> + '_ {
        let range = self.offsets[p]..self.offsets[p + 1];
        self.to[range.clone()]
            .iter()
            .zip(&self.weight[range])
            .map(|(&t, &w)| (t as usize, w))
    }
}
