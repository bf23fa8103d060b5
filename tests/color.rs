mod tests {
    use glow_gradient::color::{BLACK, COLOUR_BLUE, COLOUR_RED, Rgb, dim};
    use glow_gradient::{DEFAULT_BUCKETS, LedBrightness};

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_dim() {
        assert_eq!(dim(WHITE, 1.0), WHITE);
        assert_eq!(dim(WHITE, 0.0), BLACK);
        assert_eq!(
            dim(WHITE, 0.5),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(dim(COLOUR_BLUE, 1.0), COLOUR_BLUE);
    }

    #[test]
    fn test_dim_with_led_brightness() {
        assert_eq!(dim(COLOUR_RED, LedBrightness::Off.value()), BLACK);
        assert_eq!(
            dim(COLOUR_BLUE, LedBrightness::Dim.value()),
            Rgb { r: 0, g: 0, b: 12 }
        );
    }

    #[test]
    fn test_default_buckets_are_ascending() {
        assert!(
            DEFAULT_BUCKETS
                .windows(2)
                .all(|pair| pair[0].threshold() < pair[1].threshold())
        );
        assert_eq!(DEFAULT_BUCKETS[0].colour(), COLOUR_BLUE);
        assert_eq!(DEFAULT_BUCKETS[4].colour(), COLOUR_RED);
    }
}
