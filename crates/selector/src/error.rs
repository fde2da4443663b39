//! Error types for selector building.
//!
//! Every fluent call on a [`SelectorBuilder`](crate::SelectorBuilder) validates
//! its fragment before producing a new builder. A failed call yields one of
//! these errors and no builder at all; earlier builders in the chain stay usable.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// Errors raised while building a selector.
///
/// # Examples
///
/// ```rust
/// use selector::{SelectorBuilder, SelectorError};
///
/// let result = SelectorBuilder::new().class("foo").and_then(|s| s.element("bar"));
/// assert!(matches!(result, Err(SelectorError::OrderViolation { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id or pseudo-element fragment was appended a second time.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector."
    )]
    DuplicateFragment(FragmentKind),

    /// A fragment was appended after a fragment of higher rank.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element."
    )]
    OrderViolation {
        previous: FragmentKind,
        next: FragmentKind,
    },

    /// A character that is not one of ` `, `+`, `~` or `>` was used as a combinator.
    #[error("unknown combinator: '{0}'")]
    UnknownCombinator(char),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
