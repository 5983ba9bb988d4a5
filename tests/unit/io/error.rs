//! Tests for error messages and error source chaining

#[cfg(test)]
mod tests {
    use marching_caves::io::error::{
        GenerationError, IndexSpace, corner_out_of_bounds, invalid_parameter,
    };
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    // Tests out-of-bounds messages name the index space and limits
    // Verified by dropping the maxima from the message
    #[test]
    fn test_out_of_bounds_display() {
        let corner = corner_out_of_bounds(4, 1, 3, 2);
        assert_eq!(
            corner.to_string(),
            "corner index (4, 1) is out of bounds (max: (3, 2))"
        );

        let cell = GenerationError::OutOfBounds {
            space: IndexSpace::Cell,
            row: 0,
            col: 9,
            max_row: 1,
            max_col: 1,
        };
        assert!(cell.to_string().starts_with("cell index (0, 9)"));
    }

    // Tests the remaining variants render their fields
    // Verified by swapping attempts and minimum in the message
    #[test]
    fn test_error_display() {
        let degenerate = GenerationError::DegenerateGrid {
            operation: "build tile map",
            rows: 0,
            cols: 4,
        };
        assert_eq!(
            degenerate.to_string(),
            "Cannot build tile map on a degenerate grid (0x4 cells)"
        );

        let no_cave = GenerationError::NoCaveFound {
            attempts: 7,
            min_corner_count: 300,
        };
        assert_eq!(
            no_cave.to_string(),
            "No cave of at least 300 corners found after 7 attempts"
        );

        let invalid = invalid_parameter("rows", &0, &"must be at least 1");
        assert_eq!(
            invalid.to_string(),
            "Invalid parameter 'rows' = '0': must be at least 1"
        );
    }

    // Tests wrapped errors are exposed through source()
    // Verified by returning None for every variant
    #[test]
    fn test_error_source_chain() {
        let fs_error = GenerationError::FileSystem {
            path: PathBuf::from("out.png"),
            operation: "create file",
            source: io::Error::other("disk full"),
        };
        assert!(fs_error.source().is_some());
        assert!(fs_error.to_string().contains("disk full"));

        assert!(corner_out_of_bounds(0, 0, 0, 0).source().is_none());
    }

    // Tests bare I/O errors convert into FileSystem errors
    // Verified by converting into InvalidParameter instead
    #[test]
    fn test_from_io_error() {
        let err: GenerationError = io::Error::other("boom").into();
        assert!(matches!(err, GenerationError::FileSystem { .. }));
    }
}
