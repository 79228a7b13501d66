//! Rectangular prism (box) geometry

use std::fmt;

use crate::shape::{positive, Shape3D};
use crate::ShapeError;

/// A rectangular prism defined by length, width and height
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangularPrism {
    length: f64,
    width: f64,
    height: f64,
}

impl RectangularPrism {
    /// Create a new rectangular prism
    ///
    /// Fails on the first dimension that is not a positive number.
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            length: positive("length", length)?,
            width: positive("width", width)?,
            height: positive("height", height)?,
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

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_length(&mut self, length: f64) -> Result<(), ShapeError> {
        self.length = positive("length", length)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), ShapeError> {
        self.width = positive("width", width)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), ShapeError> {
        self.height = positive("height", height)?;
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Shape3D for RectangularPrism {
    fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    fn surface_area(&self) -> f64 {
        let (l, w, h) = (self.length, self.width, self.height);
        2.0 * (l * w + l * h + w * h)
    }
}

impl fmt::Display for RectangularPrism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RectangularPrism [Length={:.2}, Width={:.2}, Height={:.2}, Volume={:.2}, Surface Area={:.2}]",
            self.length,
            self.width,
            self.height,
            self.volume(),
            self.surface_area()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prism_metrics() {
        let p = RectangularPrism::new(2.0, 3.0, 4.0).unwrap();
        assert_eq!(p.volume(), 24.0);
        assert_eq!(p.surface_area(), 52.0);
    }

    #[test]
    fn test_prism_invalid() {
        assert!(matches!(
            RectangularPrism::new(2.0, 3.0, 0.0),
            Err(ShapeError::NonPositive { field: "height", .. })
        ));
    }

    #[test]
    fn test_set_height() {
        let mut p = RectangularPrism::new(2.0, 3.0, 4.0).unwrap();
        p.set_height(1.0).unwrap();
        assert_eq!(p.volume(), 6.0);
        assert!(p.set_height(-1.0).is_err());
        assert_eq!(p.height(), 1.0);
    }

    #[test]
    fn test_describe() {
        let p = RectangularPrism::new(2.0, 3.0, 4.0).unwrap();
        assert_eq!(
            p.describe(),
            "RectangularPrism [Length=2.00, Width=3.00, Height=4.00, Volume=24.00, Surface Area=52.00]"
        );
    }
}
