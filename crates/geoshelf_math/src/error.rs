//! Shape validation errors

use std::fmt;

/// Broad category of a [`ShapeError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A dimension is non-positive, or triangle sides violate the inequality
    InvalidDimension,
    /// Heron's formula produced a non-positive area-squared
    DegenerateShape,
}

/// Error returned when a shape cannot be built or updated
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A dimension was zero, negative, NaN or infinite
    NonPositive {
        /// Human-readable field name ("radius", "side A", ...)
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// The three sides cannot form a triangle
    TriangleInequality { a: f64, b: f64, c: f64 },
    /// The sides pass the inequality check but enclose no area
    Degenerate { a: f64, b: f64, c: f64 },
}

impl ShapeError {
    /// Get the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShapeError::NonPositive { .. } | ShapeError::TriangleInequality { .. } => {
                ErrorKind::InvalidDimension
            }
            ShapeError::Degenerate { .. } => ErrorKind::DegenerateShape,
        }
    }

    /// Whether this error is an invalid-dimension error
    #[inline]
    pub fn is_invalid_dimension(&self) -> bool {
        self.kind() == ErrorKind::InvalidDimension
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NonPositive { field, value } => {
                write!(f, "Invalid {}: {} (must be a positive number)", field, value)
            }
            ShapeError::TriangleInequality { a, b, c } => {
                write!(f, "Invalid triangle side lengths: {}, {}, {}", a, b, c)
            }
            ShapeError::Degenerate { a, b, c } => {
                write!(f, "Cannot calculate area with side lengths: {}, {}, {}", a, b, c)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_kind() {
        let err = ShapeError::NonPositive { field: "radius", value: -1.0 };
        assert_eq!(err.kind(), ErrorKind::InvalidDimension);
        assert!(err.is_invalid_dimension());
    }

    #[test]
    fn test_triangle_inequality_kind() {
        let err = ShapeError::TriangleInequality { a: 1.0, b: 1.0, c: 10.0 };
        assert_eq!(err.kind(), ErrorKind::InvalidDimension);
    }

    #[test]
    fn test_degenerate_kind() {
        let err = ShapeError::Degenerate { a: 1.0, b: 1.0, c: 2.0 };
        assert_eq!(err.kind(), ErrorKind::DegenerateShape);
        assert!(!err.is_invalid_dimension());
    }

    #[test]
    fn test_display() {
        let err = ShapeError::NonPositive { field: "width", value: 0.0 };
        let msg = err.to_string();
        assert!(msg.contains("width"));
        assert!(msg.contains("positive"));

        let err = ShapeError::TriangleInequality { a: 1.0, b: 1.0, c: 10.0 };
        assert!(err.to_string().contains("Invalid triangle side lengths"));
    }
}
