//! Core types for geoshelf
//!
//! This crate builds the inventory on top of the shape geometry:
//!
//! - [`Shape`] - Closed sum type over the six shape variants
//! - [`ShapeKind`] - Fieldless tag naming a variant
//! - [`ShapeClass`] - Capability flags (planar / solid) for filtering
//! - [`Metrics`] - Derived metrics of a shape
//! - [`ShapeTemplate`] - Serializable, unvalidated shape description
//! - [`ShapeList`] - Insertion-ordered, index-addressable shape collection
//! - [`ShapeKey`] - Stable key to a shape in a list

mod shapes;
mod template;
mod shape_list;

pub use shapes::{Shape, ShapeKind, ShapeClass, Metrics};
pub use template::ShapeTemplate;
pub use shape_list::{ShapeList, ShapeKey};

// Re-export the geometry types for convenience
pub use geoshelf_math::{Shape2D, Shape3D, ShapeError, ErrorKind, heron_area};
pub use geoshelf_math::{Circle, Rectangle, Triangle, Sphere, RectangularPrism, TriangularPrism};
