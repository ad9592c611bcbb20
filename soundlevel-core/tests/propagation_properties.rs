//! Property tests for the propagation model and contour generation
//!
//! Checks monotonicity, the forward/inverse round trip, ring ordering and
//! the distance floor over randomized inputs.

mod common;

use proptest::prelude::*;

use soundlevel_core::{
    compute_distance_for_pressure, compute_pressure, generate_contours, pressure_level_exact,
    round_to_tenth, AcousticParams, PropagationModel,
};

use common::{any_model, assert_sorted, flanders_limits, sound_power, threshold_list};

proptest! {
    #[test]
    fn exact_level_strictly_decreases_with_distance(
        lw in sound_power(),
        model in any_model(),
        near in 0.1f64..500.0,
        gap in 0.001f64..500.0,
    ) {
        let far = near + gap;
        let l_near = pressure_level_exact(&AcousticParams::new(lw, near), model);
        let l_far = pressure_level_exact(&AcousticParams::new(lw, far), model);
        prop_assert!(l_far < l_near, "{} m: {} dB, {} m: {} dB", near, l_near, far, l_far);
    }

    #[test]
    fn rounded_level_never_increases(
        lw in sound_power(),
        model in any_model(),
        near in 0.1f64..500.0,
        gap in 0.0f64..500.0,
    ) {
        let far = near + gap;
        let l_near = compute_pressure(&AcousticParams::new(lw, near), model);
        let l_far = compute_pressure(&AcousticParams::new(lw, far), model);
        prop_assert!(l_far <= l_near);
    }

    #[test]
    fn rounded_level_decreases_over_two_percent(
        lw in sound_power(),
        model in any_model(),
        near in 0.1f64..500.0,
        ratio in 1.02f64..10.0,
    ) {
        // 20·log10(1.02) ≈ 0.17 dB, more than one display step
        let far = near * ratio;
        let l_near = compute_pressure(&AcousticParams::new(lw, near), model);
        let l_far = compute_pressure(&AcousticParams::new(lw, far), model);
        prop_assert!(l_far < l_near);
    }

    #[test]
    fn round_trip_within_five_centimeters(
        lw in sound_power(),
        model in any_model(),
        r in 0.1f64..8.0,
    ) {
        let lp = compute_pressure(&AcousticParams::new(lw, r), model);
        let back = compute_distance_for_pressure(lp, lw, model);
        prop_assert!((back - r).abs() <= 0.05, "r = {}, back = {}", r, back);
    }

    #[test]
    fn round_trip_relative_error_bounded(
        lw in sound_power(),
        model in any_model(),
        r in 0.1f64..5000.0,
    ) {
        // Half a display step is 0.05 dB, i.e. a factor 10^(0.05/20)
        let bound = libm::pow(10.0, 0.05 / 20.0) - 1.0 + 1e-9;
        let lp = compute_pressure(&AcousticParams::new(lw, r), model);
        let back = compute_distance_for_pressure(lp, lw, model);
        prop_assert!(((back - r) / r).abs() <= bound);
    }

    #[test]
    fn contours_always_sorted(
        lw in sound_power(),
        model in any_model(),
        thresholds in threshold_list(),
    ) {
        let rings = generate_contours(lw, &thresholds, model);
        prop_assert_eq!(rings.len(), thresholds.len());
        assert_sorted(&rings);
    }

    #[test]
    fn contours_ignore_input_order(
        lw in sound_power(),
        model in any_model(),
        thresholds in threshold_list(),
    ) {
        let mut reversed = thresholds.clone();
        reversed.reverse();

        let a: Vec<f64> = generate_contours(lw, &thresholds, model).iter().map(|c| c.radius).collect();
        let b: Vec<f64> = generate_contours(lw, &reversed, model).iter().map(|c| c.radius).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn forward_is_finite_for_any_distance(
        lw in sound_power(),
        model in any_model(),
        distance in -1.0e6f64..1.0e6,
    ) {
        let lp = compute_pressure(&AcousticParams::new(lw, distance), model);
        prop_assert!(lp.is_finite());
    }

    #[test]
    fn forward_is_finite_for_any_finite_sound_power(
        lw in -1.0e308f64..1.0e308,
        model in any_model(),
        distance in 0.1f64..1.0e6,
    ) {
        let lp = compute_pressure(&AcousticParams::new(lw, distance), model);
        prop_assert!(lp.is_finite(), "Lw = {}: Lp = {}", lw, lp);
    }

    #[test]
    fn rounding_never_yields_negative_zero(level in -0.049f64..0.049) {
        let rounded = round_to_tenth(level);
        prop_assert_eq!(rounded, 0.0);
        prop_assert!(rounded.is_sign_positive());
    }

    #[test]
    fn rounding_lands_within_half_a_step(level in -1.0e6f64..1.0e6) {
        let rounded = round_to_tenth(level);
        prop_assert!((rounded - level).abs() <= 0.05 + 1e-9, "{} → {}", level, rounded);
        prop_assert_eq!(round_to_tenth(-level), -rounded);
    }

    #[test]
    fn ring_level_matches_threshold(
        lw in sound_power(),
        model in any_model(),
        db in 0.0f64..100.0,
    ) {
        let r = compute_distance_for_pressure(db, lw, model);
        let level = pressure_level_exact(&AcousticParams::new(lw, r), model);
        // Below the floor the forward model no longer follows the ring
        if r >= 0.1 {
            prop_assert!((level - db).abs() < 1e-9);
        }
    }
}

#[test]
fn floor_clamp_reference() {
    let model = PropagationModel::Hemispherical;
    assert_eq!(
        compute_pressure(&AcousticParams::new(60.0, 0.0), model),
        compute_pressure(&AcousticParams::new(60.0, 0.1), model),
    );
}

#[test]
fn flanders_reference_contours() {
    let rings = generate_contours(60.0, &flanders_limits(), PropagationModel::Hemispherical);

    assert_eq!(rings.len(), 2);
    assert!((rings[0].radius - 2.239).abs() < 1e-3);
    assert_eq!(rings[0].threshold_db, 45.0);
    assert!((rings[1].radius - 7.079).abs() < 1e-3);
    assert_eq!(rings[1].threshold_db, 35.0);
}

#[test]
fn referentially_transparent() {
    let params = AcousticParams::new(83.2, 17.0);
    let model = PropagationModel::Spherical;

    assert_eq!(compute_pressure(&params, model), compute_pressure(&params, model));
    assert_eq!(
        generate_contours(params.sound_power, &flanders_limits(), model),
        generate_contours(params.sound_power, &flanders_limits(), model),
    );
}
