use drawerctl::{DrawerError, DrawerResult};
use std::error::Error;

/// Error handling tests over the public API
#[cfg(test)]
mod error_handling_tests {
    use super::*;

    #[test]
    fn test_error_types_display() {
        let errors = vec![
            DrawerError::ShortWrite {
                written: 2,
                expected: 4,
            },
            DrawerError::AlreadyClosed,
            DrawerError::Enumeration("udev unavailable".to_string()),
            DrawerError::NotFound,
            DrawerError::DiscoveryUnsupported,
            DrawerError::Config {
                message: "bad config".to_string(),
            },
            DrawerError::Output("broken pipe".to_string()),
        ];

        for error in errors {
            let display = error.to_string();
            assert!(!display.is_empty(), "Error display should not be empty");
        }

        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DrawerError>();
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let drawer_error: DrawerError = io_error.into();
        assert!(matches!(drawer_error, DrawerError::Io(_)));
    }

    #[test]
    fn test_short_write_reports_counts() {
        let error = DrawerError::ShortWrite {
            written: 3,
            expected: 4,
        };
        let display = error.to_string();
        assert!(display.contains('3'));
        assert!(display.contains('4'));
    }

    #[test]
    fn test_not_found_is_distinct_from_enumeration_failure() {
        // "No matching device" and "listing failed" are separate conditions.
        let not_found = DrawerError::NotFound;
        let enumeration = DrawerError::Enumeration("scan failed".to_string());
        assert!(!matches!(not_found, DrawerError::Enumeration(_)));
        assert_ne!(not_found.to_string(), enumeration.to_string());
    }

    #[test]
    fn test_connection_error_carries_source() {
        let result = drawerctl::DrawerSession::open("/dev/notExistingFile_3b3", 9600);
        let error = result.err().expect("open of a missing device must fail");
        assert!(matches!(error, DrawerError::Connection { .. }));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_result_type() {
        fn success_function() -> DrawerResult<String> {
            Ok("success".to_string())
        }

        fn error_function() -> DrawerResult<String> {
            Err(DrawerError::NotFound)
        }

        assert!(success_function().is_ok());
        assert!(error_function().is_err());
    }
}
