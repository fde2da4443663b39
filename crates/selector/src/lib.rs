//! # Selector - fluent CSS selector builder
//!
//! Builds CSS selector strings from structured calls instead of parsing CSS
//! text. Each call returns a new immutable [`SelectorBuilder`], and the chain
//! is validated as it grows:
//!
//! - Fragments appear in the order element, id, class, attribute,
//!   pseudo-class, pseudo-element
//! - Element, id and pseudo-element occur at most once
//! - Class, attribute and pseudo-class may repeat
//!
//! ## Quick Start
//!
//! ```rust
//! use selector::{Combinator, SelectorBuilder};
//!
//! let link = SelectorBuilder::new()
//!     .element("a")?
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let list = SelectorBuilder::new().element("ul")?;
//! let nested = SelectorBuilder::combine(&list, Combinator::Child, &link);
//! assert_eq!(nested.stringify(), r#"ul > a[href$=".png"]:focus"#);
//! # Ok::<(), selector::SelectorError>(())
//! ```
//!
//! ## Modules
//!
//! - [`builder`]: the [`SelectorBuilder`] itself
//! - [`fragment`]: fragment kinds, their ranks and punctuation
//! - [`combinator`]: symbols joining two selectors
//! - [`error`]: validation errors

pub mod builder;
pub mod combinator;
pub mod error;
pub mod fragment;

pub use builder::SelectorBuilder;
pub use combinator::Combinator;
pub use error::SelectorError;
pub use fragment::{FragmentKind, KindSet};
