//! Serializable shape templates
//!
//! ShapeTemplate is the unvalidated, serializable form of a [`Shape`]. Each
//! variant stores the raw dimensions needed to construct the shape; validation
//! only happens in [`ShapeTemplate::build`]. Templates are how shapes arrive
//! from configuration and from the console front-end.

use serde::{Serialize, Deserialize};
use geoshelf_math::{
    Circle, Rectangle, RectangularPrism, ShapeError, Sphere, Triangle, TriangularPrism,
};

use crate::{Shape, ShapeKind};

/// Serializable shape template
///
/// Internally tagged, so in TOML a template reads as
/// `{ type = "Rectangle", length = 5.0, width = 3.0 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    Triangle {
        side_a: f64,
        side_b: f64,
        side_c: f64,
    },
    Rectangle {
        length: f64,
        width: f64,
    },
    Circle {
        radius: f64,
    },
    Sphere {
        radius: f64,
    },
    RectangularPrism {
        length: f64,
        width: f64,
        height: f64,
    },
    TriangularPrism {
        side_a: f64,
        side_b: f64,
        side_c: f64,
        /// Extrusion length of the triangular base
        height: f64,
    },
}

impl ShapeTemplate {
    /// Validate the dimensions and create the shape
    pub fn build(&self) -> Result<Shape, ShapeError> {
        let shape: Shape = match *self {
            ShapeTemplate::Triangle { side_a, side_b, side_c } => {
                Triangle::new(side_a, side_b, side_c)?.into()
            }
            ShapeTemplate::Rectangle { length, width } => Rectangle::new(length, width)?.into(),
            ShapeTemplate::Circle { radius } => Circle::new(radius)?.into(),
            ShapeTemplate::Sphere { radius } => Sphere::new(radius)?.into(),
            ShapeTemplate::RectangularPrism { length, width, height } => {
                RectangularPrism::new(length, width, height)?.into()
            }
            ShapeTemplate::TriangularPrism { side_a, side_b, side_c, height } => {
                TriangularPrism::new(side_a, side_b, side_c, height)?.into()
            }
        };
        Ok(shape)
    }

    /// Build a template of the given kind from dimensions in field order
    ///
    /// Returns `None` if the number of dimensions does not match
    /// [`ShapeKind::fields`]. Values are not validated here.
    pub fn from_dimensions(kind: ShapeKind, dims: &[f64]) -> Option<Self> {
        let template = match (kind, dims) {
            (ShapeKind::Triangle, &[side_a, side_b, side_c]) => {
                ShapeTemplate::Triangle { side_a, side_b, side_c }
            }
            (ShapeKind::Rectangle, &[length, width]) => ShapeTemplate::Rectangle { length, width },
            (ShapeKind::Circle, &[radius]) => ShapeTemplate::Circle { radius },
            (ShapeKind::Sphere, &[radius]) => ShapeTemplate::Sphere { radius },
            (ShapeKind::RectangularPrism, &[length, width, height]) => {
                ShapeTemplate::RectangularPrism { length, width, height }
            }
            (ShapeKind::TriangularPrism, &[side_a, side_b, side_c, height]) => {
                ShapeTemplate::TriangularPrism { side_a, side_b, side_c, height }
            }
            _ => return None,
        };
        Some(template)
    }

    /// Get the kind of shape this template builds
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeTemplate::Triangle { .. } => ShapeKind::Triangle,
            ShapeTemplate::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeTemplate::Circle { .. } => ShapeKind::Circle,
            ShapeTemplate::Sphere { .. } => ShapeKind::Sphere,
            ShapeTemplate::RectangularPrism { .. } => ShapeKind::RectangularPrism,
            ShapeTemplate::TriangularPrism { .. } => ShapeKind::TriangularPrism,
        }
    }
}

impl From<&Shape> for ShapeTemplate {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Triangle(t) => ShapeTemplate::Triangle {
                side_a: t.side_a(),
                side_b: t.side_b(),
                side_c: t.side_c(),
            },
            Shape::Rectangle(r) => ShapeTemplate::Rectangle {
                length: r.length(),
                width: r.width(),
            },
            Shape::Circle(c) => ShapeTemplate::Circle { radius: c.radius() },
            Shape::Sphere(s) => ShapeTemplate::Sphere { radius: s.radius() },
            Shape::RectangularPrism(p) => ShapeTemplate::RectangularPrism {
                length: p.length(),
                width: p.width(),
                height: p.height(),
            },
            Shape::TriangularPrism(p) => ShapeTemplate::TriangularPrism {
                side_a: p.side_a(),
                side_b: p.side_b(),
                side_c: p.side_c(),
                height: p.height(),
            },
        }
    }
}
