//! The closed set of shape variants
//!
//! [`Shape`] owns one validated geometry value. Dispatch to the capability
//! traits happens by matching on the variant.

use std::fmt;

use bitflags::bitflags;
use geoshelf_math::{
    Circle, Rectangle, RectangularPrism, Shape2D, Shape3D, Sphere, Triangle, TriangularPrism,
};

bitflags! {
    /// Capabilities a shape exposes
    ///
    /// Used to filter enumerations to 2D or 3D shapes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ShapeClass: u8 {
        /// Has an area and a perimeter
        const PLANAR = 1 << 0;
        /// Has a volume and a surface area
        const SOLID = 1 << 1;
    }
}

/// Tag naming a shape variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Circle,
    Sphere,
    RectangularPrism,
    TriangularPrism,
}

impl ShapeKind {
    /// All kinds, 2D first, in menu order
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Sphere,
        ShapeKind::RectangularPrism,
        ShapeKind::TriangularPrism,
    ];

    /// Display name ("Rectangular Prism")
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::RectangularPrism => "Rectangular Prism",
            ShapeKind::TriangularPrism => "Triangular Prism",
        }
    }

    /// Dimension names in constructor order, as shown in prompts
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Triangle => &["side A", "side B", "side C"],
            ShapeKind::Rectangle => &["length", "width"],
            ShapeKind::Circle | ShapeKind::Sphere => &["radius"],
            ShapeKind::RectangularPrism => &["length", "width", "height"],
            ShapeKind::TriangularPrism => &["side A", "side B", "side C", "height"],
        }
    }

    pub fn class(&self) -> ShapeClass {
        match self {
            ShapeKind::Triangle | ShapeKind::Rectangle | ShapeKind::Circle => ShapeClass::PLANAR,
            ShapeKind::Sphere | ShapeKind::RectangularPrism | ShapeKind::TriangularPrism => {
                ShapeClass::SOLID
            }
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derived metrics of a shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metrics {
    Planar { area: f64, perimeter: f64 },
    Solid { volume: f64, surface_area: f64 },
}

/// A validated shape of any kind
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Triangle(Triangle),
    Rectangle(Rectangle),
    Circle(Circle),
    Sphere(Sphere),
    RectangularPrism(RectangularPrism),
    TriangularPrism(TriangularPrism),
}

impl Shape {
    /// Get the variant tag
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::RectangularPrism(_) => ShapeKind::RectangularPrism,
            Shape::TriangularPrism(_) => ShapeKind::TriangularPrism,
        }
    }

    #[inline]
    pub fn class(&self) -> ShapeClass {
        self.kind().class()
    }

    /// View this shape as a planar shape, if it is one
    pub fn as_2d(&self) -> Option<&dyn Shape2D> {
        match self {
            Shape::Triangle(t) => Some(t),
            Shape::Rectangle(r) => Some(r),
            Shape::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// View this shape as a solid, if it is one
    pub fn as_3d(&self) -> Option<&dyn Shape3D> {
        match self {
            Shape::Sphere(s) => Some(s),
            Shape::RectangularPrism(p) => Some(p),
            Shape::TriangularPrism(p) => Some(p),
            _ => None,
        }
    }

    /// Compute the metrics for this shape's class
    pub fn metrics(&self) -> Metrics {
        fn planar(shape: &dyn Shape2D) -> Metrics {
            Metrics::Planar {
                area: shape.area(),
                perimeter: shape.perimeter(),
            }
        }

        fn solid(shape: &dyn Shape3D) -> Metrics {
            Metrics::Solid {
                volume: shape.volume(),
                surface_area: shape.surface_area(),
            }
        }

        match self {
            Shape::Triangle(t) => planar(t),
            Shape::Rectangle(r) => planar(r),
            Shape::Circle(c) => planar(c),
            Shape::Sphere(s) => solid(s),
            Shape::RectangularPrism(p) => solid(p),
            Shape::TriangularPrism(p) => solid(p),
        }
    }

    /// Summary with all dimensions and derived metrics to two decimals
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Triangle(t) => fmt::Display::fmt(t, f),
            Shape::Rectangle(r) => fmt::Display::fmt(r, f),
            Shape::Circle(c) => fmt::Display::fmt(c, f),
            Shape::Sphere(s) => fmt::Display::fmt(s, f),
            Shape::RectangularPrism(p) => fmt::Display::fmt(p, f),
            Shape::TriangularPrism(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<RectangularPrism> for Shape {
    fn from(p: RectangularPrism) -> Self {
        Shape::RectangularPrism(p)
    }
}

impl From<TriangularPrism> for Shape {
    fn from(p: TriangularPrism) -> Self {
        Shape::TriangularPrism(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_shapes() -> Vec<Shape> {
        vec![
            Triangle::new(3.0, 4.0, 5.0).unwrap().into(),
            Rectangle::new(2.0, 3.0).unwrap().into(),
            Circle::new(1.0).unwrap().into(),
            Sphere::new(1.0).unwrap().into(),
            RectangularPrism::new(2.0, 3.0, 4.0).unwrap().into(),
            TriangularPrism::new(3.0, 4.0, 5.0, 10.0).unwrap().into(),
        ]
    }

    #[test]
    fn test_kind_matches_variant_order() {
        let kinds: Vec<_> = all_shapes().iter().map(Shape::kind).collect();
        assert_eq!(kinds, ShapeKind::ALL.to_vec());
    }

    #[test]
    fn test_class_views() {
        for shape in all_shapes() {
            let planar = shape.class() == ShapeClass::PLANAR;
            assert_eq!(shape.as_2d().is_some(), planar);
            assert_eq!(shape.as_3d().is_some(), !planar);
        }
    }

    #[test]
    fn test_metrics() {
        let shapes = all_shapes();
        assert_eq!(
            shapes[0].metrics(),
            Metrics::Planar { area: 6.0, perimeter: 12.0 }
        );
        assert_eq!(
            shapes[4].metrics(),
            Metrics::Solid { volume: 24.0, surface_area: 52.0 }
        );
        assert_eq!(
            shapes[5].metrics(),
            Metrics::Solid { volume: 60.0, surface_area: 132.0 }
        );
    }

    #[test]
    fn test_describe_delegates() {
        let shape: Shape = Rectangle::new(5.0, 3.0).unwrap().into();
        assert_eq!(
            shape.describe(),
            "Rectangle [Length=5.00, Width=3.00, Area=15.00, Perimeter=16.00]"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ShapeKind::RectangularPrism.to_string(), "Rectangular Prism");
        assert_eq!(ShapeKind::Circle.name(), "Circle");
    }

    #[test]
    fn test_fields_match_constructor_arity() {
        let arities: Vec<usize> = ShapeKind::ALL.iter().map(|k| k.fields().len()).collect();
        assert_eq!(arities, vec![3, 2, 1, 1, 3, 4]);
    }

    #[test]
    fn test_class_flags() {
        let both = ShapeClass::PLANAR | ShapeClass::SOLID;
        assert!(both.contains(ShapeKind::Sphere.class()));
        assert!(both.contains(ShapeKind::Triangle.class()));
        assert!(!ShapeClass::PLANAR.intersects(ShapeClass::SOLID));
    }
}
