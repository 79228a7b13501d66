//! Capability traits and shared validation
//!
//! Shapes are pure geometric data. Metrics are derived on demand from the
//! current dimensions and are never cached.

use crate::ShapeError;

/// A planar shape with an area and a perimeter
pub trait Shape2D {
    /// Enclosed area
    fn area(&self) -> f64;

    /// Length of the boundary
    fn perimeter(&self) -> f64;
}

/// A solid with a volume and a surface area
pub trait Shape3D {
    /// Enclosed volume
    fn volume(&self) -> f64;

    /// Total area of the boundary surface
    fn surface_area(&self) -> f64;
}

/// Check that a dimension is a strictly positive, finite number
///
/// NaN fails the comparison and is rejected with the rest.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ShapeError::NonPositive { field, value })
    }
}

/// Check the strict triangle inequality on all three pairings
pub(crate) fn triangle_sides(a: f64, b: f64, c: f64) -> Result<(), ShapeError> {
    positive("side A", a)?;
    positive("side B", b)?;
    positive("side C", c)?;
    if a + b > c && a + c > b && b + c > a {
        Ok(())
    } else {
        Err(ShapeError::TriangleInequality { a, b, c })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_accepts_positive() {
        assert_eq!(positive("x", 2.5), Ok(2.5));
    }

    #[test]
    fn test_positive_rejects_zero_negative_nan_inf() {
        assert!(positive("x", 0.0).is_err());
        assert!(positive("x", -1.0).is_err());
        assert!(positive("x", f64::NAN).is_err());
        assert!(positive("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_triangle_sides() {
        assert!(triangle_sides(3.0, 4.0, 5.0).is_ok());
        assert!(matches!(
            triangle_sides(1.0, 1.0, 10.0),
            Err(ShapeError::TriangleInequality { .. })
        ));
        // Collinear sides fail the strict check
        assert!(triangle_sides(1.0, 1.0, 2.0).is_err());
        assert!(matches!(
            triangle_sides(-3.0, 4.0, 5.0),
            Err(ShapeError::NonPositive { field: "side A", .. })
        ));
    }
}
