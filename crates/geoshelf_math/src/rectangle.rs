//! Rectangle geometry

use std::fmt;

use crate::shape::{positive, Shape2D};
use crate::ShapeError;

/// An axis-free rectangle defined by length and width
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    /// Create a new rectangle
    pub fn new(length: f64, width: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            length: positive("length", length)?,
            width: positive("width", width)?,
        })
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_length(&mut self, length: f64) -> Result<(), ShapeError> {
        self.length = positive("length", length)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), ShapeError> {
        self.width = positive("width", width)?;
        Ok(())
    }

    /// Summary with dimensions and derived metrics to two decimals
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Shape2D for Rectangle {
    fn area(&self) -> f64 {
        self.length * self.width
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle [Length={:.2}, Width={:.2}, Area={:.2}, Perimeter={:.2}]",
            self.length,
            self.width,
            self.area(),
            self.perimeter()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_metrics() {
        let r = Rectangle::new(5.0, 3.0).unwrap();
        assert_eq!(r.area(), 15.0);
        assert_eq!(r.perimeter(), 16.0);
    }

    #[test]
    fn test_rectangle_area_is_product() {
        for (l, w) in [(1.0, 1.0), (0.25, 8.0), (12.5, 3.5)] {
            let r = Rectangle::new(l, w).unwrap();
            assert_eq!(r.area(), l * w);
        }
    }

    #[test]
    fn test_rectangle_invalid() {
        assert!(matches!(
            Rectangle::new(0.0, 3.0),
            Err(ShapeError::NonPositive { field: "length", .. })
        ));
        assert!(matches!(
            Rectangle::new(2.0, -3.0),
            Err(ShapeError::NonPositive { field: "width", .. })
        ));
    }

    #[test]
    fn test_setters_keep_old_value_on_failure() {
        let mut r = Rectangle::new(2.0, 3.0).unwrap();
        assert!(r.set_width(0.0).is_err());
        assert_eq!(r.width(), 3.0);
        r.set_length(4.0).unwrap();
        assert_eq!(r.area(), 12.0);
    }

    #[test]
    fn test_describe() {
        let r = Rectangle::new(5.0, 3.0).unwrap();
        assert_eq!(
            r.describe(),
            "Rectangle [Length=5.00, Width=3.00, Area=15.00, Perimeter=16.00]"
        );
    }
}
