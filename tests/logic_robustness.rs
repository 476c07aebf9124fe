#[cfg(test)]
mod tests {
    use telemetry_axis::{
        AxisMapping, AxisMode, DataExtent, FormatRegistry, LogAxisMapper, PixelRange, ValueRange,
        YAxis, YAxisConfig,
    };

    #[test]
    fn test_zero_width_range() {
        // Only one distinct sample, e.g. a constant telemetry point at 10.0
        let range = ValueRange::new(10.0, 10.0);
        let mapper = LogAxisMapper::default();

        for mode in [AxisMode::Linear, AxisMode::Log] {
            let mapping = AxisMapping::new(range, PixelRange::new(0, 100), mode);
            let mapped = mapping.value_to_pixel(10.0);
            assert_eq!(mapped, 50, "flat range should sit mid-axis in {mode:?}");
            assert!((mapping.pixel_to_value(17) - 10.0).abs() < 1e-9);

            let ticks = mapper.ticks(&mapping, 8);
            assert_eq!(ticks.len(), 1);
            assert_eq!(ticks[0].pixel_offset, 50);
        }
    }

    #[test]
    fn test_inverted_range() {
        let mapper = LogAxisMapper::default();
        let range = ValueRange::new(10.0, -10.0);

        assert!(mapper.compute_linear_ticks(range, 8).is_empty());
        assert!(mapper.compute_log_ticks(range).is_empty());

        let mapping = AxisMapping::new(range, PixelRange::new(0, 100), AxisMode::Linear);
        assert!(mapping.value_to_pixel(10.0) < mapping.value_to_pixel(-10.0));
        assert!(mapper.ticks(&mapping, 8).is_empty());
    }

    #[test]
    fn test_non_finite_range_uses_identity() {
        let mapper = LogAxisMapper::default();
        for range in [
            ValueRange::new(f64::NAN, 1.0),
            ValueRange::new(0.0, f64::INFINITY),
            ValueRange::new(f64::NEG_INFINITY, f64::INFINITY),
        ] {
            assert!(mapper.compute_linear_ticks(range, 8).is_empty());
            assert!(mapper.compute_log_ticks(range).is_empty());

            let mapping = AxisMapping::new(range, PixelRange::new(0, 100), AxisMode::Log);
            assert!(mapping.is_identity());
            assert_eq!(mapping.value_to_pixel(42.0), 42);
            assert_eq!(mapping.pixel_to_value(7), 7.0);
            assert!(mapper.ticks(&mapping, 8).is_empty());
        }
    }

    #[test]
    fn test_non_finite_samples_do_not_break_mapping() {
        let mapping = AxisMapping::new(ValueRange::new(0.0, 1.0), PixelRange::new(0, 100), AxisMode::Linear);
        assert_eq!(mapping.value_to_pixel(f64::NAN), 0);
        assert_eq!(mapping.value_to_pixel(f64::INFINITY), 0);
        assert_eq!(mapping.value_to_pixel(1e300), i32::MIN);
    }

    #[test]
    fn test_zero_height_viewport() {
        let mapping = AxisMapping::new(ValueRange::new(-1.0, 1.0), PixelRange::new(40, 40), AxisMode::Log);
        assert_eq!(mapping.value_to_pixel(0.5), 40);
        assert!(mapping.pixel_to_value(40).is_finite());
    }

    #[test]
    fn test_axis_without_data() {
        let registry = FormatRegistry::with_defaults();
        let mut axis = YAxis::new(YAxisConfig::default(), PixelRange::new(0, 400), &registry).unwrap();
        assert!(axis.ticks().is_empty());
        assert!(axis.mapping().is_identity());
        assert_eq!(axis.value_to_pixel(3.0), 3);

        axis.set_log_mode(true);
        assert!(axis.ticks().is_empty());

        axis.observe(f64::NAN);
        assert!(axis.extent().is_empty());
        assert!(axis.ticks().is_empty());
    }

    #[test]
    fn test_extreme_extent_keeps_axis_drawn() {
        let registry = FormatRegistry::with_defaults();
        let config = YAxisConfig {
            log_mode: true,
            ..Default::default()
        };
        let mut axis = YAxis::new(config, PixelRange::new(0, 400), &registry).unwrap();
        axis.set_data_extent(DataExtent::from_values(&[-1e300, 1e300]));

        let range = axis.display_range().unwrap();
        assert!(range.is_finite());
        assert!(!axis.mapping().is_identity());
        assert!(!axis.ticks().is_empty());
        for pair in axis.ticks().windows(2) {
            assert!(pair[0].value < pair[1].value);
        }
        assert_eq!(axis.value_to_pixel(0.0), 200);

        axis.set_log_mode(false);
        assert!(!axis.mapping().is_identity());
        assert!(!axis.ticks().is_empty());
    }

    #[test]
    fn test_flat_telemetry_is_padded() {
        let registry = FormatRegistry::with_defaults();
        let mut axis = YAxis::new(YAxisConfig::default(), PixelRange::new(0, 400), &registry).unwrap();
        axis.set_data_extent(DataExtent::from_values(&[5.0; 10]));

        assert_eq!(axis.display_range(), Some(ValueRange::new(4.0, 6.0)));
        assert!(axis.ticks().len() >= 2);
    }
}
