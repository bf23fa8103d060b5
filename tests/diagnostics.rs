mod tests {
    use glow_gradient::monitor::{LINE_CAPACITY, format_line};
    use glow_gradient::{DiagnosticEvent, DisplayError, LedBrightness, Reading, SensorError};

    const STAMP: &str = "2024-01-02T03:04:05.678+00:00";

    fn line(event: &DiagnosticEvent) -> String {
        format_line::<LINE_CAPACITY>(STAMP, event).unwrap().as_str().to_owned()
    }

    #[test]
    fn test_format_lifecycle_lines() {
        assert_eq!(line(&DiagnosticEvent::Start), format!("{STAMP},start"));
        assert_eq!(line(&DiagnosticEvent::End), format!("{STAMP},end"));
    }

    #[test]
    fn test_format_data_line() {
        let event = DiagnosticEvent::Data(Reading::new(21.5, 45.25));
        assert_eq!(line(&event), format!("{STAMP},data,21.5,45.25"));
    }

    #[test]
    fn test_format_tap_line() {
        let event = DiagnosticEvent::Tap(LedBrightness::Bright);
        assert_eq!(line(&event), format!("{STAMP},tap,bright"));
    }

    #[test]
    fn test_format_error_lines() {
        let event = DiagnosticEvent::SensorError {
            error: SensorError::Checksum,
            consecutive: 2,
        };
        assert_eq!(line(&event), format!("{STAMP},sensor_error,checksum,2"));
        assert_eq!(
            line(&DiagnosticEvent::TooManyErrors),
            format!("{STAMP},too_many_errors")
        );
        assert_eq!(
            line(&DiagnosticEvent::DisplayError(DisplayError::WriteFailed)),
            format!("{STAMP},display_error,write_failed")
        );
    }

    #[test]
    fn test_error_events_go_to_error_stream() {
        assert!(!DiagnosticEvent::Start.is_error());
        assert!(!DiagnosticEvent::Data(Reading::new(20.0, 40.0)).is_error());
        assert!(!DiagnosticEvent::Tap(LedBrightness::Off).is_error());
        assert!(!DiagnosticEvent::End.is_error());
        assert!(DiagnosticEvent::TooManyErrors.is_error());
        assert!(
            DiagnosticEvent::SensorError {
                error: SensorError::Bus,
                consecutive: 1
            }
            .is_error()
        );
        assert!(DiagnosticEvent::DisplayError(DisplayError::WriteFailed).is_error());
    }

    #[test]
    fn test_format_extreme_data_line_fits() {
        let stamp = "2024-01-02T03:04:05.678901+00:00";
        let tiny = -f32::from_bits(1);
        let event = DiagnosticEvent::Data(Reading::new(tiny, f32::MIN));
        let line = format_line::<LINE_CAPACITY>(stamp, &event).unwrap();
        assert_eq!(
            line.as_str(),
            format!("{stamp},data,{tiny},{}", f32::MIN)
        );
    }

    #[test]
    fn test_format_line_overflow() {
        let result = format_line::<8>(STAMP, &DiagnosticEvent::Start);
        assert!(result.is_err());
    }
}
