//! Geometric value objects and a JSON codec for them.
//!
//! # Usage
//!
//! ```
//! use shapes::{Rectangle, Shape, ShapeKind, codec};
//!
//! let rect = Rectangle::new(20.0, 10.0);
//! assert_eq!(rect.area(), 200.0);
//!
//! let text = codec::encode(&rect).unwrap();
//! let shape = codec::decode_shape(ShapeKind::Rectangle, &text).unwrap();
//! assert_eq!(shape.area(), 200.0);
//! ```

pub mod codec;
pub mod error;
pub mod shape;

pub use codec::{decode, decode_shape, encode, encode_pretty};
pub use error::CodecError;
pub use shape::{AnyShape, Circle, Rectangle, Shape, ShapeKind};
