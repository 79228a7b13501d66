//! Triangular prism geometry
//!
//! A prism with a triangular base extruded by `height`. The base follows the
//! same validation as [`Triangle`](crate::Triangle).

use std::fmt;

use crate::shape::{positive, Shape3D};
use crate::triangle::{outline_area, validate_outline};
use crate::ShapeError;

/// A triangular prism defined by three base sides and a height
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangularPrism {
    side_a: f64,
    side_b: f64,
    side_c: f64,
    height: f64,
}

impl TriangularPrism {
    /// Create a new triangular prism
    ///
    /// The base is checked before the height.
    pub fn new(side_a: f64, side_b: f64, side_c: f64, height: f64) -> Result<Self, ShapeError> {
        validate_outline(side_a, side_b, side_c)?;
        Ok(Self {
            side_a,
            side_b,
            side_c,
            height: positive("height", height)?,
        })
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

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_side_a(&mut self, side_a: f64) -> Result<(), ShapeError> {
        validate_outline(side_a, self.side_b, self.side_c)?;
        self.side_a = side_a;
        Ok(())
    }

    pub fn set_side_b(&mut self, side_b: f64) -> Result<(), ShapeError> {
        validate_outline(self.side_a, side_b, self.side_c)?;
        self.side_b = side_b;
        Ok(())
    }

    pub fn set_side_c(&mut self, side_c: f64) -> Result<(), ShapeError> {
        validate_outline(self.side_a, self.side_b, side_c)?;
        self.side_c = side_c;
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), ShapeError> {
        self.height = positive("height", height)?;
        Ok(())
    }

    /// Area of one triangular end face
    pub fn base_area(&self) -> f64 {
        outline_area(self.side_a, self.side_b, self.side_c)
    }

    /// Perimeter of one triangular end face
    pub fn base_perimeter(&self) -> f64 {
        self.side_a + self.side_b + self.side_c
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Shape3D for TriangularPrism {
    fn volume(&self) -> f64 {
        self.base_area() * self.height
    }

    fn surface_area(&self) -> f64 {
        2.0 * self.base_area() + self.base_perimeter() * self.height
    }
}

impl fmt::Display for TriangularPrism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TriangularPrism [SideA={:.2}, SideB={:.2}, SideC={:.2}, Height={:.2}, Volume={:.2}, Surface Area={:.2}]",
            self.side_a,
            self.side_b,
            self.side_c,
            self.height,
            self.volume(),
            self.surface_area()
        )
    }
}
