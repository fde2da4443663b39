//! Geometric value objects.
//!
//! Shapes are plain data; their behavior comes from the [`Shape`] trait, so a
//! shape decoded from its serialized fields has the same methods as one built
//! in code.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Behavior shared by every shape.
pub trait Shape {
    /// Area, computed on demand.
    fn area(&self) -> f64;

    fn kind(&self) -> ShapeKind;
}

/// Tag naming a concrete shape type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl FromStr for ShapeKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            _ => Err(CodecError::UnknownShape(s.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => f.write_str("rectangle"),
            ShapeKind::Circle => f.write_str("circle"),
        }
    }
}

/// An axis-aligned rectangle. Dimensions are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}

/// Any concrete shape, as produced by [`decode_shape`](crate::codec::decode_shape).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyShape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape for AnyShape {
    fn area(&self) -> f64 {
        match self {
            AnyShape::Rectangle(r) => r.area(),
            AnyShape::Circle(c) => c.area(),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            AnyShape::Rectangle(_) => ShapeKind::Rectangle,
            AnyShape::Circle(_) => ShapeKind::Circle,
        }
    }
}

impl From<Rectangle> for AnyShape {
    fn from(rect: Rectangle) -> Self {
        AnyShape::Rectangle(rect)
    }
}

impl From<Circle> for AnyShape {
    fn from(circle: Circle) -> Self {
        AnyShape::Circle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area() {
        assert_eq!(Rectangle::new(20.0, 10.0).area(), 200.0);
    }

    #[test]
    fn test_area_is_not_cached() {
        let mut rect = Rectangle::new(2.0, 3.0);
        assert_eq!(rect.area(), 6.0);
        rect.width = 5.0;
        assert_eq!(rect.area(), 15.0);
    }

    #[test]
    fn test_degenerate_dimensions_are_accepted() {
        assert_eq!(Rectangle::new(0.0, 7.0).area(), 0.0);
        assert_eq!(Rectangle::new(-2.0, 3.0).area(), -6.0);
    }

    #[test]
    fn test_circle_area() {
        assert!((Circle::new(1.0).area() - PI).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shape_kind_parse() {
        assert_eq!("circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
        assert_eq!(
            "Rectangle".parse::<ShapeKind>().unwrap(),
            ShapeKind::Rectangle
        );
        assert!("hexagon".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_any_shape_delegates() {
        let shape = AnyShape::from(Rectangle::new(4.0, 5.0));
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert_eq!(shape.area(), 20.0);
    }
}
