mod tests {
    use glow_gradient::tap::TAP_DEBOUNCE;
    use glow_gradient::{Duration, Instant, LedBrightness, TapCounter};

    #[test]
    fn test_brightness_cycle() {
        let brightness = LedBrightness::default();
        assert_eq!(brightness, LedBrightness::Dim);
        assert_eq!(brightness.next(), LedBrightness::Bright);
        assert_eq!(brightness.next().next(), LedBrightness::Off);
        assert_eq!(brightness.next().next().next(), LedBrightness::Dim);
    }

    #[test]
    fn test_brightness_values() {
        assert!((LedBrightness::Dim.value() - 0.05).abs() < f32::EPSILON);
        assert!((LedBrightness::Bright.value() - 0.5).abs() < f32::EPSILON);
        assert!(LedBrightness::Off.value().abs() < f32::EPSILON);
    }

    #[test]
    fn test_brightness_names() {
        for brightness in [LedBrightness::Dim, LedBrightness::Bright, LedBrightness::Off] {
            assert_eq!(
                LedBrightness::parse_from_str(brightness.as_str()),
                Some(brightness)
            );
        }
        assert_eq!(LedBrightness::parse_from_str("blinding"), None);
    }

    #[test]
    fn test_tap_counter_accumulates() {
        let taps = TapCounter::new();
        assert_eq!(taps.take(), 0);

        assert!(taps.record(Instant::from_millis(0)));
        assert!(taps.record(Instant::from_millis(1_000)));
        assert!(taps.record(Instant::from_millis(2_000)));
        assert_eq!(taps.take(), 3);
        assert_eq!(taps.take(), 0);
    }

    #[test]
    fn test_tap_counter_debounces() {
        let taps = TapCounter::new();
        let start = Instant::from_millis(5_000);

        assert!(taps.record(start));
        assert!(!taps.record(start + Duration::from_millis(100)));
        assert!(!taps.record(start + TAP_DEBOUNCE));
        assert!(taps.record(start + TAP_DEBOUNCE + Duration::from_millis(1)));
        assert_eq!(taps.take(), 2);
    }

    #[test]
    fn test_tap_counter_accepts_first_tap_at_start() {
        let taps = TapCounter::new();
        assert!(taps.record(Instant::from_millis(0)));
        assert_eq!(taps.take(), 1);
    }

    #[test]
    fn test_tap_counter_in_static() {
        static TAPS: TapCounter = TapCounter::new();
        assert!(TAPS.record(Instant::from_millis(0)));
        assert_eq!(TAPS.take(), 1);
    }
}
