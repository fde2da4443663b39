//! # selkit
//!
//! Three small utilities:
//!
//! - [`selector`]: an immutable, fluent CSS selector builder that checks
//!   fragment order and uniqueness as the selector grows
//! - [`shapes`]: geometric value objects such as [`Rectangle`]
//! - [`codec`]: JSON encoding, and decoding back into known shapes
//!
//! ```rust
//! use selkit::{Rectangle, SelectorBuilder, Shape, codec};
//!
//! let selector = SelectorBuilder::new().element("div")?.class("card")?;
//! assert_eq!(selector.stringify(), "div.card");
//!
//! let rect: Rectangle = codec::decode(r#"{"width":4,"height":5}"#).unwrap();
//! assert_eq!(rect.area(), 20.0);
//! # Ok::<(), selkit::SelectorError>(())
//! ```

pub use selector;
pub use shapes;

pub use selector::{Combinator, FragmentKind, SelectorBuilder, SelectorError};
pub use shapes::codec;
pub use shapes::{AnyShape, Circle, CodecError, Rectangle, Shape, ShapeKind};
