//! Circle Property Tests
//!
//! Checks that every generator draws a plausible circle: points near the
//! ideal curve, pixel counts close to the midpoint baseline, and the DF2
//! amplitude holding over many revolutions.
//!
//! Run: cargo test --test circle_properties_test

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use trueno_circle::generators::{angular_step, revolution_steps};
use trueno_circle::prelude::*;
use trueno_circle::stability::{critical_radius, fixed_point_safe};

fn pixel_count(algorithm: Algorithm, radius: i32) -> usize {
    let mut canvas = Bitmap::for_radius(radius, 3).unwrap();
    algorithm.generate(&mut canvas, radius)
}

// ============================================================================
// DEGENERATE RADII
// ============================================================================

#[test]
fn degenerate_radius_draws_nothing() {
    for algorithm in Algorithm::ALL {
        for radius in [0, -1, -50] {
            let mut canvas = Bitmap::new(16, 16).unwrap();
            let generation = algorithm.run(&mut canvas, radius);
            assert_eq!(generation.pixels, 0, "{algorithm} r={radius}");
            assert_eq!(generation.points, 0);
            assert!(!generation.truncated);
            assert_eq!(canvas.count_set(), 0);
        }
    }
}

// ============================================================================
// SHAPE: every emitted point within one cell of the ideal circle
// ============================================================================

#[test]
fn points_stay_near_ideal_circle() {
    for algorithm in Algorithm::SYMMETRIC {
        for radius in [10, 25, 50] {
            for point in algorithm.points(radius) {
                let deviation = point.octant_deviation(radius);
                assert!(deviation <= 1, "{algorithm} r={radius} {point:?} off by {deviation}");
            }
        }
    }
}

#[test]
fn symmetric_generators_stay_in_first_octant() {
    for algorithm in Algorithm::SYMMETRIC {
        let points = algorithm.points(40);
        assert!(!points.is_empty(), "{algorithm}");
        assert!(points.iter().all(|p| p.x >= 0 && p.y >= 0), "{algorithm}");
    }
}

// ============================================================================
// PIXEL COUNTS: close to the midpoint baseline
// ============================================================================

#[test]
fn float_generators_track_midpoint_pixel_count() {
    for radius in [10, 25, 50, 100] {
        let baseline = pixel_count(Algorithm::Midpoint, radius);
        for algorithm in [Algorithm::Df2Float, Algorithm::CoupledFloat] {
            let pixels = pixel_count(algorithm, radius);
            assert!(pixels >= baseline, "{algorithm} r={radius}: {pixels} < {baseline}");
            assert!(
                pixels * 10 <= baseline * 13,
                "{algorithm} r={radius}: {pixels} too far above {baseline}"
            );
        }
    }
}

#[test]
fn fixed_generators_match_float_at_small_radii() {
    for radius in [5, 10, 20] {
        let df2_float = Algorithm::Df2Float.points(radius);
        let df2_fixed = Algorithm::Df2Fixed.points(radius);
        assert_eq!(df2_float.len(), df2_fixed.len(), "r={radius}");
        for (a, b) in df2_float.iter().zip(&df2_fixed) {
            assert!((a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1, "r={radius}");
        }

        assert_eq!(
            Algorithm::CoupledFloat.points(radius),
            Algorithm::CoupledFixed.points(radius),
            "r={radius}"
        );
    }
}

#[test]
fn midpoint_full_matches_symmetric_midpoint() {
    for radius in [1, 7, 20, 33] {
        assert_eq!(
            pixel_count(Algorithm::MidpointFull, radius),
            pixel_count(Algorithm::Midpoint, radius),
            "r={radius}"
        );
    }
}

#[test]
fn midpoint_radius_five() {
    let points: Vec<(i32, i32)> =
        Algorithm::Midpoint.points(5).into_iter().map(Into::into).collect();
    assert_eq!(points, vec![(0, 5), (1, 5), (2, 5), (3, 4)]);

    let mut canvas = Bitmap::for_radius(5, 3).unwrap();
    assert_eq!(Algorithm::Midpoint.generate(&mut canvas, 5), 28);
    assert!(canvas.is_set(4, 3));
    assert!(canvas.is_set(5, 0));
    assert!(canvas.is_set(-3, -4));
    assert!(!canvas.is_set(0, 0));
}

// ============================================================================
// FIXED POINT LIMITS
// ============================================================================

#[test]
fn df2_fixed_collapses_past_critical_radius() {
    assert!(fixed_point_safe(100));
    assert!(!fixed_point_safe(300));

    let mut canvas = Bitmap::for_radius(300, 3).unwrap();
    let generation = Algorithm::Df2Fixed.run(&mut canvas, 300);
    assert!(generation.truncated);
    assert!(generation.pixels < pixel_count(Algorithm::Midpoint, 300) / 2);
}

#[test]
fn coupled_fixed_survives_large_radius() {
    let mut canvas = Bitmap::for_radius(1000, 3).unwrap();
    let generation = Algorithm::CoupledFixed.run(&mut canvas, 1000);
    assert!(!generation.truncated);
    assert!(generation.pixels > 4000);
}

#[test]
fn critical_radius_q16() {
    assert!((critical_radius(16) - 120.32).abs() < 1e-9);
}

// ============================================================================
// STABILITY
// ============================================================================

#[test]
fn df2_amplitude_holds_over_many_revolutions() {
    let drift = invariant_drift(10.0, 100.0);
    assert!(drift >= 1.0);
    assert!(drift - 1.0 < 1e-9);
}

/// The state-norm ratio sits near `cot(ω/2) ≈ 3r` at every radius. Where the
/// sample period nearly divides the revolution the extreme phases are missed
/// (r = 113 lands about 10% low), so neighbouring radii are not strictly
/// ordered, but the ratio always stays near the cotangent and doubles with
/// the radius.
#[test]
fn drift_tracks_cotangent_over_dense_radii() {
    let drifts: Vec<f64> = (10..=200).map(|r| analyze(f64::from(r), 100.0)).collect();

    for (radius, &drift) in (10..=200).zip(&drifts) {
        let half_step = angular_step(f64::from(radius)) / 2.0;
        let expected = 1.0 / half_step.tan();
        assert!(
            (drift - expected).abs() <= 0.15 * expected,
            "r={radius}: drift {drift} vs cot {expected}"
        );
    }

    for radius in 10..=100 {
        let small = drifts[radius - 10];
        let doubled = drifts[2 * radius - 10];
        assert!(doubled > small, "r={radius}: {doubled} <= {small}");
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

proptest! {
    #[test]
    fn prop_symmetric_plot_is_closed(x in -200i32..200, y in -200i32..200) {
        let mut recorder = PointRecorder::new();
        plot_symmetric(&mut recorder, Point::new(x, y));
        let images = recorder.distinct();
        prop_assert!(images.len() <= 8);
        for image in &images {
            let mut again = PointRecorder::new();
            plot_symmetric(&mut again, *image);
            prop_assert_eq!(again.distinct(), images.clone());
        }
    }

    #[test]
    fn prop_fixed_int_round_trip(n in -32_768i32..32_767) {
        prop_assert_eq!(Fixed::from_int(n).to_int(), n);
    }

    #[test]
    fn prop_midpoint_within_one_cell(radius in 1i32..400) {
        for point in Algorithm::Midpoint.points(radius) {
            prop_assert!(point.octant_deviation(radius) <= 1);
        }
    }

    #[test]
    fn prop_generators_terminate(radius in 1i32..600) {
        for algorithm in Algorithm::SYMMETRIC {
            prop_assert!(algorithm.points(radius).len() <= revolution_bound(radius));
        }
    }
}

fn revolution_bound(radius: i32) -> usize {
    revolution_steps(angular_step(f64::from(radius)))
}
