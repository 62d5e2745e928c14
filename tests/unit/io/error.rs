//! Tests for error messages and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilestitch::PuzzleError;
    use tilestitch::io::error::{invalid_input, invalid_tile_set};

    // Tests messages name the line and reason
    // Verified by omitting the line number from the message
    #[test]
    fn test_display_messages() {
        let error = invalid_input(7, &"row has 3 pixels, expected 10");
        assert_eq!(
            error.to_string(),
            "Invalid input on line 7: row has 3 pixels, expected 10"
        );

        let error = invalid_tile_set(&"5 tiles do not form a square");
        assert_eq!(error.to_string(), "Invalid tile set: 5 tiles do not form a square");

        let error = PuzzleError::NoTiling { tile_count: 9 };
        assert!(error.to_string().contains("9 tiles"));

        let error = PuzzleError::ProductOverflow { ids: [1, 2, 3, 4] };
        assert_eq!(
            error.to_string(),
            "Product of corner ids [1, 2, 3, 4] does not fit in 64 bits"
        );
    }

    // Tests file system errors keep the path, operation and cause
    // Verified by returning None from source()
    #[test]
    fn test_file_system_error_chain() {
        let error = PuzzleError::FileSystem {
            path: PathBuf::from("puzzle.txt"),
            operation: "read puzzle input",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        let message = error.to_string();
        assert!(message.contains("read puzzle input"));
        assert!(message.contains("puzzle.txt"));
        assert_eq!(
            error.source().map(ToString::to_string),
            Some("no such file".to_string())
        );
    }

    // Tests parse errors have no underlying source
    // Verified by wrapping the reason in an io::Error
    #[test]
    fn test_parse_errors_have_no_source() {
        assert!(invalid_input(1, &"bad").source().is_none());
        assert!(PuzzleError::InvalidPattern { reason: "empty".into() }.source().is_none());
    }
}
