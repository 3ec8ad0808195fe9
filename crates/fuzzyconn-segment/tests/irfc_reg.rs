//! Iterative relative fuzzy connectedness regression tests
//!
//! Multi-class competition scenarios: clean two-cluster separation,
//! boundary placement, three-way competition, and the bounded best-effort
//! behavior of the round cap.

use fuzzyconn_core::FloatImage;
use fuzzyconn_segment::{
    AffinityGraph, AffinityOptions, IrfcOptions, NullMonitor, SeedSet,
    iterative_relative_connectedness,
};

/// Two flat regions split by a vertical step at x = split
fn step_image(w: u32, h: u32, split: u32, low: f32, high: f32) -> FloatImage {
    let mut image = FloatImage::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let v = if x < split { low } else { high };
            image.set_pixel(x, y, v).unwrap();
        }
    }
    image
}

fn contrast_options() -> AffinityOptions {
    AffinityOptions::default()
        .with_distance_decline(0.2)
        .with_gradient_weight(20.0)
}

fn index(x: u32, y: u32, w: u32) -> usize {
    (y * w + x) as usize
}

// ============================================================================
// Two-cluster separation
// ============================================================================

#[test]
fn test_two_clusters_clean_boundary() {
    let w = 12;
    let image = step_image(w, 6, 6, 0.1, 0.9);
    let graph = AffinityGraph::build(&image, &contrast_options()).unwrap();
    let seeds = SeedSet::new(
        vec![index(2, 3, w), index(9, 2, w)],
        vec![1, 2],
        image.pixel_count(),
    )
    .unwrap();

    let (labels, report) =
        iterative_relative_connectedness(&graph, &seeds, &IrfcOptions::default(), &NullMonitor)
            .unwrap();

    assert!(report.all_converged());
    for y in 0..6 {
        for x in 0..w {
            let expected = if x < 6 { 1 } else { 2 };
            assert_eq!(labels.get_pixel(x, y).unwrap(), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_flat_image_ties_resolve_to_lowest_label() {
    // On a homogeneous strip every multi-step path bottlenecks at the same
    // unit-step weight, so away from the seeds both classes tie exactly.
    // Ties must resolve deterministically to the lowest label; only the
    // higher class's own seed escapes it.
    let w = 9;
    let image = FloatImage::new_with_value(w, 1, 0.5).unwrap();
    let graph = AffinityGraph::build(&image, &AffinityOptions::default()).unwrap();
    let seeds = SeedSet::new(vec![1, 7], vec![1, 2], 9).unwrap();

    let (labels, report) =
        iterative_relative_connectedness(&graph, &seeds, &IrfcOptions::default(), &NullMonitor)
            .unwrap();

    assert!(report.all_converged());
    for x in 0..w {
        let expected = if x == 7 { 2 } else { 1 };
        assert_eq!(labels.get_pixel(x, 0).unwrap(), expected, "pixel ({x}, 0)");
    }
}

// ============================================================================
// Three-way competition
// ============================================================================

#[test]
fn test_three_bands_three_classes() {
    // Three flat bands at distinct intensities, one seed each
    let w = 12;
    let mut image = FloatImage::new(w, 4).unwrap();
    for y in 0..4 {
        for x in 0..w {
            let v = match x / 4 {
                0 => 0.1,
                1 => 0.5,
                _ => 0.9,
            };
            image.set_pixel(x, y, v).unwrap();
        }
    }
    let graph = AffinityGraph::build(&image, &contrast_options()).unwrap();
    let seeds = SeedSet::new(
        vec![index(1, 1, w), index(5, 2, w), index(10, 1, w)],
        vec![1, 2, 3],
        image.pixel_count(),
    )
    .unwrap();

    let (labels, report) =
        iterative_relative_connectedness(&graph, &seeds, &IrfcOptions::default(), &NullMonitor)
            .unwrap();

    assert!(report.all_converged());
    for y in 0..4 {
        for x in 0..w {
            let expected = (x / 4 + 1) as u32;
            assert_eq!(labels.get_pixel(x, y).unwrap(), expected, "pixel ({x}, {y})");
        }
    }
}

// ============================================================================
// Round cap / best effort
// ============================================================================

#[test]
fn test_tight_round_cap_still_labels_everything() {
    let w = 12;
    let image = step_image(w, 6, 6, 0.1, 0.9);
    let graph = AffinityGraph::build(&image, &contrast_options()).unwrap();
    let seeds = SeedSet::new(
        vec![index(2, 3, w), index(9, 2, w)],
        vec![1, 2],
        image.pixel_count(),
    )
    .unwrap();

    let (labels, report) = iterative_relative_connectedness(
        &graph,
        &seeds,
        &IrfcOptions::default().with_max_rounds(1),
        &NullMonitor,
    )
    .unwrap();

    // Degraded but complete: every pixel labeled, cap honored
    assert_eq!(labels.count_label(0), 0);
    for class in &report.classes {
        assert!(class.rounds <= 1);
    }
}

#[test]
fn test_report_lists_classes_in_ascending_order() {
    let w = 12;
    let image = step_image(w, 6, 6, 0.1, 0.9);
    let graph = AffinityGraph::build(&image, &contrast_options()).unwrap();
    // Labels given out of order and sparse
    let seeds = SeedSet::new(
        vec![index(9, 2, w), index(2, 3, w)],
        vec![5, 2],
        image.pixel_count(),
    )
    .unwrap();

    let (labels, report) =
        iterative_relative_connectedness(&graph, &seeds, &IrfcOptions::default(), &NullMonitor)
            .unwrap();

    let reported: Vec<u32> = report.classes.iter().map(|c| c.label).collect();
    assert_eq!(reported, vec![2, 5]);
    assert_eq!(labels.labels_present(), vec![2, 5]);
}
