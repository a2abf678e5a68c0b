//! Error types for lane vector operations
//!
//! Arithmetic on lane vectors is total and never fails. Errors only arise at
//! the edges where lanes meet runtime-sized memory.

use thiserror::Error;

/// Core error type for the fallible lane operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A slice had the wrong number of elements for the lane count
    #[error("Lane count mismatch: expected {expected} lanes, got {actual}")]
    LaneCountMismatch { expected: usize, actual: usize },

    /// An output buffer cannot hold every lane
    #[error("Buffer too small: need room for {required} lanes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a slice whose length does not match the lane count
    pub fn lane_count(expected: usize, actual: usize) -> Self {
        Self::LaneCountMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::LaneCountMismatch { expected: 4, actual: 3 };
        assert_eq!(err.to_string(), "Lane count mismatch: expected 4 lanes, got 3");

        let err = Error::BufferTooSmall { required: 8, actual: 2 };
        assert_eq!(err.to_string(), "Buffer too small: need room for 8 lanes, got 2");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::lane_count(8, 0) {
            Error::LaneCountMismatch { expected, actual } => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn lanes_from(len: usize) -> Result<usize> {
            if len != 4 {
                return Err(Error::lane_count(4, len));
            }
            Ok(len)
        }

        assert_eq!(lanes_from(4), Ok(4));
        assert!(lanes_from(5).is_err());
    }
}
