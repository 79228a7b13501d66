//! Circle geometry

use std::f64::consts::PI;
use std::fmt;

use crate::shape::{positive, Shape2D};
use crate::ShapeError;

/// A circle defined by its radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Create a new circle
    ///
    /// Fails if the radius is not a positive number.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: positive("radius", radius)?,
        })
    }

    /// Get the radius
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius, leaving it unchanged if the new value is invalid
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.radius = positive("radius", radius)?;
        Ok(())
    }

    /// Summary with the radius and derived metrics to two decimals
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Shape2D for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle [Radius={:.2}, Area={:.2}, Perimeter={:.2}]",
            self.radius,
            self.area(),
            self.perimeter()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    #[test]
    fn test_circle_metrics() {
        for r in [0.5, 1.0, 2.0, 7.25] {
            let c = Circle::new(r).unwrap();
            assert!((c.area() - PI * r * r).abs() < EPSILON);
            assert!((c.perimeter() - 2.0 * PI * r).abs() < EPSILON);
        }
    }

    #[test]
    fn test_circle_invalid_radius() {
        assert!(Circle::new(0.0).unwrap_err().is_invalid_dimension());
        assert!(Circle::new(-2.0).unwrap_err().is_invalid_dimension());
    }

    #[test]
    fn test_set_radius() {
        let mut c = Circle::new(1.0).unwrap();
        c.set_radius(3.0).unwrap();
        assert_eq!(c.radius(), 3.0);

        assert!(c.set_radius(-1.0).is_err());
        assert_eq!(c.radius(), 3.0);
    }

    #[test]
    fn test_describe() {
        let c = Circle::new(2.0).unwrap();
        assert_eq!(c.describe(), "Circle [Radius=2.00, Area=12.57, Perimeter=12.57]");
    }
}
