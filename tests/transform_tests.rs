use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use telemetry_axis::scales::AxisScale;
use telemetry_axis::{AxisMapping, AxisMode, PixelRange, ValueRange};

#[test]
fn test_axis_scale_linear() {
    let scale = AxisScale::new_linear((0.0, 100.0), (500.0, 0.0));

    assert_eq!(scale.map(0.0), 500.0);
    assert_eq!(scale.map(50.0), 250.0);
    assert_eq!(scale.map(100.0), 0.0);

    assert_eq!(scale.invert(500.0), 0.0);
    assert_eq!(scale.invert(250.0), 50.0);
    assert_eq!(scale.invert(0.0), 100.0);
}

#[test]
fn test_linear_mapping_inverts_rows() {
    let mapping = AxisMapping::new(ValueRange::new(-2.0, 10.0), PixelRange::new(0, 120), AxisMode::Linear);

    assert_eq!(mapping.value_to_pixel(-2.0), 120);
    assert_eq!(mapping.value_to_pixel(10.0), 0);
    assert_eq!(mapping.value_to_pixel(4.0), 60);
    assert_eq!(mapping.pixel_to_value(60), 4.0);
    assert!((mapping.pixel_size() - 0.1).abs() < 1e-12);
}

#[test]
fn test_log_mapping_places_zero_by_symlog() {
    let range = ValueRange::new(-9.0, 99.0);
    let mapping = AxisMapping::new(range, PixelRange::new(0, 300), AxisMode::Log);

    // symlog(-9) = -1, symlog(99) = 2: zero sits a third of the way up.
    assert_eq!(mapping.value_to_pixel(0.0), 200);
    assert_eq!(mapping.value_to_pixel(9.0), 100);
    assert_eq!(mapping.value_to_pixel(99.0), 0);
    assert_eq!(mapping.value_to_pixel(-9.0), 300);
    assert!(mapping.pixel_to_value(200).abs() < 1e-9);
}

#[test]
fn test_round_trip_within_one_pixel() {
    let mut rng = StdRng::seed_from_u64(42);
    let range = ValueRange::new(-3.26, 14.6);

    for mode in [AxisMode::Linear, AxisMode::Log] {
        let mapping = AxisMapping::new(range, PixelRange::new(0, 430), mode);
        let tolerance = mapping.pixel_size();
        let scale = mapping.scale();

        for _ in 0..1000 {
            let v = rng.random_range(range.min..=range.max);
            let back = mapping.pixel_to_value(mapping.value_to_pixel(v));
            assert!(
                (scale.to_display(back) - scale.to_display(v)).abs() <= tolerance,
                "{mode:?}: {v} -> {back}"
            );
        }
    }
}

#[test]
fn test_mapping_is_monotonic_and_continuous_across_zero() {
    let mapping = AxisMapping::new(ValueRange::new(-5.0, 5.0), PixelRange::new(0, 1000), AxisMode::Log);

    let mut previous = mapping.value_to_pixel_f64(-5.0);
    let mut v = -5.0;
    while v <= 5.0 {
        let px = mapping.value_to_pixel_f64(v);
        assert!(px <= previous, "not monotonic at {v}");
        // A sweep of 0.001 never jumps more than a couple of pixels.
        assert!(previous - px < 2.0, "jump of {} px at {v}", previous - px);
        previous = px;
        v += 0.001;
    }
}

#[test]
fn test_batch_mapping_matches_single_values() {
    let mapping = AxisMapping::new(ValueRange::new(-100.0, 100.0), PixelRange::new(10, 810), AxisMode::Log);
    let values: Vec<f64> = (0..40_000).map(|i| (i as f64 * 0.01).sin() * 100.0).collect();

    let batch = mapping.values_to_pixels(&values);
    assert_eq!(batch.len(), values.len());
    for (v, px) in values.iter().zip(&batch) {
        assert_eq!(*px, mapping.value_to_pixel(*v));
    }
}
