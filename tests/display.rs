mod tests {
    use glow_gradient::color::{BLACK, COLOUR_ORANGE, dim};
    use glow_gradient::{DisplayError, FrameBuffer, PixelDriver, Rgb, SmartLedsDriver};
    use smart_leds::{RGB8, SmartLedsWrite};

    #[derive(Default)]
    struct RecordingWriter {
        written: Vec<RGB8>,
        fail: bool,
    }

    impl SmartLedsWrite for RecordingWriter {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.written = iterator.into_iter().map(Into::into).collect();
            Ok(())
        }
    }

    #[test]
    fn test_frame_buffer_shows_pixels_after_flush() {
        let mut strip = FrameBuffer::<4>::new();
        strip.set_pixel(1, COLOUR_ORANGE, 1.0);
        assert_eq!(strip.frame(), &[BLACK; 4]);

        strip.flush().unwrap();
        assert_eq!(strip.frame(), &[BLACK, COLOUR_ORANGE, BLACK, BLACK]);
        assert_eq!(strip.flushes(), 1);
    }

    #[test]
    fn test_frame_buffer_applies_brightness() {
        let mut strip = FrameBuffer::<2>::new();
        strip.set_pixel(0, COLOUR_ORANGE, 0.5);
        strip.set_pixel(1, COLOUR_ORANGE, 0.0);
        strip.flush().unwrap();
        assert_eq!(strip.frame(), &[dim(COLOUR_ORANGE, 0.5), BLACK]);
    }

    #[test]
    fn test_frame_buffer_ignores_out_of_range_pixels() {
        let mut strip = FrameBuffer::<2>::new();
        strip.set_pixel(7, COLOUR_ORANGE, 1.0);
        strip.flush().unwrap();
        assert_eq!(strip.frame(), &[BLACK; 2]);
    }

    #[test]
    fn test_smart_leds_driver_writes_whole_strip() {
        let mut driver = SmartLedsDriver::<_, 3>::new(RecordingWriter::default());
        driver.set_pixel(0, COLOUR_ORANGE, 1.0);
        driver.set_pixel(2, COLOUR_ORANGE, 0.5);
        driver.flush().unwrap();

        let expected: [Rgb; 3] = [COLOUR_ORANGE, BLACK, dim(COLOUR_ORANGE, 0.5)];
        assert_eq!(driver.writer().written, expected);
    }

    #[test]
    fn test_smart_leds_driver_maps_write_errors() {
        let writer = RecordingWriter {
            fail: true,
            ..Default::default()
        };
        let mut driver = SmartLedsDriver::<_, 3>::new(writer);
        assert_eq!(driver.flush(), Err(DisplayError::WriteFailed));
    }
}
