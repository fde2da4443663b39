//! JSON encoding and decoding of structured values.
//!
//! Object keys keep insertion order: struct fields serialize in declaration
//! order and `serde_json::Map` preserves the order entries were inserted.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::shape::{AnyShape, Circle, Rectangle, ShapeKind};

/// Serializes `value` to compact JSON.
///
/// ```rust
/// use shapes::codec::encode;
///
/// let text = encode(&serde_json::json!({"height": 10, "width": 20})).unwrap();
/// assert_eq!(text, r#"{"height":10,"width":20}"#);
/// ```
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let text = serde_json::to_string(value)?;
    log::trace!("encoded {} bytes", text.len());
    Ok(text)
}

/// Serializes `value` to indented JSON.
pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let text = serde_json::to_string_pretty(value)?;
    log::trace!("encoded {} bytes (pretty)", text.len());
    Ok(text)
}

/// Rebuilds a value of a known type from its serialized fields.
///
/// ```rust
/// use shapes::{Circle, Shape, codec::decode};
///
/// let circle: Circle = decode(r#"{"radius":10}"#).unwrap();
/// assert_eq!(circle.radius, 10.0);
/// assert!(circle.area() > 314.0);
/// ```
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| {
        log::debug!("decode failed: {}", e);
        e.into()
    })
}

/// Rebuilds the shape named by `kind` from its serialized fields.
pub fn decode_shape(kind: ShapeKind, text: &str) -> Result<AnyShape> {
    log::trace!("decoding {}", kind);
    let shape = match kind {
        ShapeKind::Rectangle => AnyShape::Rectangle(decode::<Rectangle>(text)?),
        ShapeKind::Circle => AnyShape::Circle(decode::<Circle>(text)?),
    };
    Ok(shape)
}
