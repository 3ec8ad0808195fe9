//! Absolute fuzzy connectedness
//!
//! Computes, for every pixel, the strongest path from any seed where a
//! path's strength is the minimum affinity along it (max-min bottleneck
//! path strength). The computation is a Dijkstra-like label-correcting
//! sweep with a batched frontier: each round settles every frontier pixel
//! at the current maximum connectedness and relaxes their incident edges.
//!
//! The connectedness value of a pixel is monotone non-decreasing across
//! the run and bounded by the seed strength, and each update strictly
//! increases some pixel's value, so the frontier always empties.

use fuzzyconn_core::FloatImage;

use crate::affinity::AffinityGraph;
use crate::error::{SegmentError, SegmentResult};
use crate::monitor::Monitor;
use crate::seeds::SeedSet;

/// Connectedness assigned to seed pixels
///
/// Seeds start at full normalized strength rather than at their class
/// label's numeric value, so the output scale does not depend on label
/// numbering.
pub const SEED_STRENGTH: f32 = 1.0;

/// Compute the absolute fuzzy connectedness map for a seed set
///
/// All seeds propagate as one class regardless of label. The returned map
/// is rescaled so its maximum is 1.0.
///
/// # Errors
///
/// Returns `SeedOutOfRange` if a seed index does not fit the graph and
/// `Cancelled` if the monitor requests an abort between frontier rounds.
pub fn absolute_connectedness(
    graph: &AffinityGraph,
    seeds: &SeedSet,
    monitor: &dyn Monitor,
) -> SegmentResult<FloatImage> {
    check_seed_bounds(seeds.indices(), graph.pixel_count())?;

    monitor.note("absolute fuzzy connectedness");
    let fc = propagate(graph, seeds.indices(), None, monitor)?;

    let mut map = FloatImage::from_data(graph.width(), graph.height(), fc)
        .map_err(SegmentError::Core)?;
    map.rescale_max_to_unit();
    Ok(map)
}

pub(crate) fn check_seed_bounds(seeds: &[usize], pixel_count: usize) -> SegmentResult<()> {
    for &index in seeds {
        if index >= pixel_count {
            return Err(SegmentError::SeedOutOfRange {
                index,
                len: pixel_count,
            });
        }
    }
    Ok(())
}

/// Batched max-min propagation over the affinity graph
///
/// Pixels flagged in `blocked` neither update nor relay strength; IRFC
/// uses this to keep background paths out of the region a class has
/// already captured, without touching the shared edge list.
///
/// Each round extracts every frontier pixel holding the frontier's current
/// maximum value `fc`, then offers `min(fc, w)` across each of their edges.
/// An improved pixel rejoins the frontier. The frontier maximum never
/// increases between rounds, so settled values are final.
pub(crate) fn propagate(
    graph: &AffinityGraph,
    seeds: &[usize],
    blocked: Option<&[bool]>,
    monitor: &dyn Monitor,
) -> SegmentResult<Vec<f32>> {
    let pixel_count = graph.pixel_count();
    let mut fc = vec![0.0f32; pixel_count];
    let mut in_frontier = vec![false; pixel_count];
    let mut frontier: Vec<usize> = Vec::with_capacity(seeds.len());

    for &s in seeds {
        fc[s] = SEED_STRENGTH;
        if !in_frontier[s] {
            in_frontier[s] = true;
            frontier.push(s);
        }
    }

    let mut pick: Vec<usize> = Vec::new();
    while !frontier.is_empty() {
        if monitor.cancelled() {
            return Err(SegmentError::Cancelled);
        }

        // Settle the whole batch at the frontier maximum, ties included.
        let round_fc = frontier
            .iter()
            .map(|&p| fc[p])
            .fold(f32::NEG_INFINITY, f32::max);

        pick.clear();
        let mut rest = Vec::with_capacity(frontier.len());
        for p in frontier.drain(..) {
            if fc[p] == round_fc {
                in_frontier[p] = false;
                pick.push(p);
            } else {
                rest.push(p);
            }
        }
        frontier = rest;

        for &p in &pick {
            for (q, w) in graph.edges(p) {
                if let Some(mask) = blocked {
                    if mask[q] {
                        continue;
                    }
                }
                let candidate = round_fc.min(w);
                if candidate > fc[q] {
                    fc[q] = candidate;
                    if !in_frontier[q] {
                        in_frontier[q] = true;
                        frontier.push(q);
                    }
                }
            }
        }
    }

    Ok(fc)
}
