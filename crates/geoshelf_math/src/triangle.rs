//! Triangle geometry and Heron's formula
//!
//! A triangle is stored as three side lengths. Validation runs the strict
//! triangle inequality and then Heron's formula itself, so a stored triangle
//! always encloses a positive area and [`Shape2D::area`] cannot fail.

use std::fmt;

use crate::shape::{triangle_sides, Shape2D};
use crate::ShapeError;

/// s(s-a)(s-b)(s-c), the square of the area
#[inline]
fn heron_squared(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    s * (s - a) * (s - b) * (s - c)
}

/// Heron's formula, rescaled when the plain product leaves the normal range
///
/// Very small or very large sides underflow or overflow the fourth-degree
/// product. Dividing by the longest side keeps it in range; the area scales
/// back by its square. Returns zero or NaN for outlines with no area.
fn heron(a: f64, b: f64, c: f64) -> f64 {
    let squared = heron_squared(a, b, c);
    if squared.is_normal() {
        return squared.sqrt();
    }
    let scale = a.max(b).max(c);
    heron_squared(a / scale, b / scale, c / scale).sqrt() * scale * scale
}

/// Area of a triangle from its three side lengths
///
/// Fails with [`ShapeError::Degenerate`] if the area is not positive,
/// which happens for collinear or impossible side lengths.
pub fn heron_area(a: f64, b: f64, c: f64) -> Result<f64, ShapeError> {
    let area = heron(a, b, c);
    if area > 0.0 {
        Ok(area)
    } else {
        Err(ShapeError::Degenerate { a, b, c })
    }
}

/// Full validation for a triangular outline: positivity, inequality, area
pub(crate) fn validate_outline(a: f64, b: f64, c: f64) -> Result<(), ShapeError> {
    triangle_sides(a, b, c)?;
    heron_area(a, b, c)?;
    Ok(())
}

/// Base area of an already validated outline
#[inline]
pub(crate) fn outline_area(a: f64, b: f64, c: f64) -> f64 {
    let area = heron(a, b, c);
    debug_assert!(area > 0.0, "validated triangle lost its area");
    area
}

/// A triangle defined by its three side lengths
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    side_a: f64,
    side_b: f64,
    side_c: f64,
}

impl Triangle {
    /// Create a new triangle
    ///
    /// # Errors
    /// - [`ShapeError::NonPositive`] if any side is not a positive number
    /// - [`ShapeError::TriangleInequality`] if one side is at least the sum of the other two
    /// - [`ShapeError::Degenerate`] if the sides pass the inequality but enclose no area
    pub fn new(side_a: f64, side_b: f64, side_c: f64) -> Result<Self, ShapeError> {
        validate_outline(side_a, side_b, side_c)?;
        Ok(Self { side_a, side_b, side_c })
    }

    #[inline]
    pub fn side_a(&self) -> f64 {
        self.side_a
    }

    #[inline]
    pub fn side_b(&self) -> f64 {
        self.side_b
    }

    #[inline]
    pub fn side_c(&self) -> f64 {
        self.side_c
    }

    /// Set side A, re-checking the inequality against the current B and C
    pub fn set_side_a(&mut self, side_a: f64) -> Result<(), ShapeError> {
        validate_outline(side_a, self.side_b, self.side_c)?;
        self.side_a = side_a;
        Ok(())
    }

    /// Set side B, re-checking the inequality against the current A and C
    pub fn set_side_b(&mut self, side_b: f64) -> Result<(), ShapeError> {
        validate_outline(self.side_a, side_b, self.side_c)?;
        self.side_b = side_b;
        Ok(())
    }

    /// Set side C, re-checking the inequality against the current A and B
    pub fn set_side_c(&mut self, side_c: f64) -> Result<(), ShapeError> {
        validate_outline(self.side_a, self.side_b, side_c)?;
        self.side_c = side_c;
        Ok(())
    }

    /// Summary with sides and derived metrics to two decimals
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Shape2D for Triangle {
    fn area(&self) -> f64 {
        outline_area(self.side_a, self.side_b, self.side_c)
    }

    fn perimeter(&self) -> f64 {
        self.side_a + self.side_b + self.side_c
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle [SideA={:.2}, SideB={:.2}, SideC={:.2}, Area={:.2}, Perimeter={:.2}]",
            self.side_a,
            self.side_b,
            self.side_c,
            self.area(),
            self.perimeter()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_right_triangle() {
        let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert_eq!(t.area(), 6.0);
        assert_eq!(t.perimeter(), 12.0);
    }

    #[test]
    fn test_equilateral_area() {
        let t = Triangle::new(2.0, 2.0, 2.0).unwrap();
        assert!((t.area() - 3.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_inequality_violation() {
        let err = Triangle::new(1.0, 1.0, 10.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDimension);
        assert!(matches!(err, ShapeError::TriangleInequality { .. }));
    }

    #[test]
    fn test_non_positive_side() {
        let err = Triangle::new(3.0, 0.0, 5.0).unwrap_err();
        assert_eq!(err, ShapeError::NonPositive { field: "side B", value: 0.0 });
    }

    #[test]
    fn test_heron_area_degenerate() {
        assert_eq!(heron_area(3.0, 4.0, 5.0), Ok(6.0));
        let err = heron_area(1.0, 1.0, 2.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateShape);
    }

    #[test]
    fn test_tiny_and_huge_equilateral() {
        let expected = 3.0_f64.sqrt() / 4.0;

        let tiny = Triangle::new(1e-100, 1e-100, 1e-100).unwrap();
        assert!((tiny.area() / 1e-200 - expected).abs() < 1e-12);

        let huge = Triangle::new(1e100, 1e100, 1e100).unwrap();
        assert!((huge.area() / 1e200 - expected).abs() < 1e-12);
    }

    #[test]
    fn test_constructor_reports_degenerate() {
        // 1 + EPSILON > 1, but the semi-perimeter rounds to exactly 1
        let err = Triangle::new(1.0, f64::EPSILON, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateShape);
        assert!(matches!(err, ShapeError::Degenerate { .. }));
    }

    #[test]
    fn test_setter_reports_degenerate() {
        let mut t = Triangle::new(1.0, 1.0, 1.0).unwrap();
        let err = t.set_side_b(f64::EPSILON).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateShape);
        assert_eq!(t.side_b(), 1.0);
    }

    #[test]
    fn test_setter_uses_current_sides() {
        let mut t = Triangle::new(3.0, 4.0, 5.0).unwrap();
        // 3 + 4 = 7 is not > 7
        assert!(t.set_side_c(7.0).is_err());
        assert_eq!(t.side_c(), 5.0);

        t.set_side_c(6.0).unwrap();
        assert_eq!(t.side_c(), 6.0);
        assert_eq!(t.perimeter(), 13.0);
    }

    #[test]
    fn test_setters_reject_non_positive() {
        let mut t = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert!(t.set_side_a(-3.0).is_err());
        assert!(t.set_side_b(0.0).is_err());
        assert_eq!((t.side_a(), t.side_b(), t.side_c()), (3.0, 4.0, 5.0));
    }

    #[test]
    fn test_describe() {
        let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert_eq!(
            t.describe(),
            "Triangle [SideA=3.00, SideB=4.00, SideC=5.00, Area=6.00, Perimeter=12.00]"
        );
    }
}
