//! Shape geometry for geoshelf
//!
//! This crate provides the validated shape variants and their closed-form metrics.
//!
//! ## Capability Traits
//!
//! - [`Shape2D`] - Planar shapes with an area and a perimeter
//! - [`Shape3D`] - Solids with a volume and a surface area
//!
//! ## Shape Types
//!
//! - [`Triangle`], [`Rectangle`], [`Circle`] - 2D shapes
//! - [`Sphere`], [`RectangularPrism`], [`TriangularPrism`] - 3D shapes
//!
//! Every constructor and setter validates its dimensions, so a shape value is
//! never observable in an invalid state.

mod error;
pub mod shape;
pub mod circle;
pub mod rectangle;
pub mod triangle;
pub mod sphere;
pub mod rectangular_prism;
pub mod triangular_prism;

pub use error::{ErrorKind, ShapeError};
pub use shape::{Shape2D, Shape3D};
pub use circle::Circle;
pub use rectangle::Rectangle;
pub use triangle::{heron_area, Triangle};
pub use sphere::Sphere;
pub use rectangular_prism::RectangularPrism;
pub use triangular_prism::TriangularPrism;
