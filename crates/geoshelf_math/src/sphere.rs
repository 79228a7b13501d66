//! Sphere geometry

use std::f64::consts::PI;
use std::fmt;

use crate::shape::{positive, Shape3D};
use crate::ShapeError;

/// A sphere defined by its radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Create a new sphere
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: positive("radius", radius)?,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.radius = positive("radius", radius)?;
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Shape3D for Sphere {
    fn volume(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius.powi(3)
    }

    fn surface_area(&self) -> f64 {
        4.0 * PI * self.radius * self.radius
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sphere [Radius={:.2}, Volume={:.2}, Surface Area={:.2}]",
            self.radius,
            self.volume(),
            self.surface_area()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    #[test]
    fn test_sphere_metrics() {
        let s = Sphere::new(2.0).unwrap();
        assert!((s.volume() - 33.5103).abs() < EPSILON);
        assert!((s.volume() - (4.0 / 3.0) * PI * 8.0).abs() < EPSILON);
        assert!((s.surface_area() - 50.2655).abs() < EPSILON);
        assert!((s.surface_area() - 16.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_sphere_invalid() {
        assert!(Sphere::new(0.0).is_err());
        assert!(Sphere::new(f64::NAN).is_err());
    }

    #[test]
    fn test_describe() {
        let s = Sphere::new(2.0).unwrap();
        assert_eq!(s.describe(), "Sphere [Radius=2.00, Volume=33.51, Surface Area=50.27]");
    }
}
