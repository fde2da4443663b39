use std::fmt;

use crate::combinator::Combinator;
use crate::error::{Result, SelectorError};
use crate::fragment::{FragmentKind, KindSet};

/// An immutable, fluent CSS selector builder.
///
/// Every fluent call borrows the receiver and returns a brand new builder with
/// one more fragment appended, so any builder in a chain can be reused as the
/// prefix of several selectors.
///
/// Fragments must be appended in the order element, id, class, attribute,
/// pseudo-class, pseudo-element. Element, id and pseudo-element may appear at
/// most once.
///
/// # Examples
///
/// ```rust
/// use selector::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .element("div")?
///     .id("main")?
///     .class("container")?;
/// assert_eq!(selector.stringify(), "div#main.container");
/// # Ok::<(), selector::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    text: String,
    last_kind: Option<FragmentKind>,
    used_kinds: KindSet,
}

impl SelectorBuilder {
    /// Creates an empty builder, the root of every selector chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a type selector, verbatim.
    pub fn element(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::Element, name)
    }

    /// Appends `#name`.
    pub fn id(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::Id, name)
    }

    /// Appends `.name`. May repeat.
    pub fn class(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::Class, name)
    }

    /// Appends `[spec]`, where `spec` is a raw attribute expression such as
    /// `href$=".png"`. May repeat.
    pub fn attr(&self, spec: &str) -> Result<Self> {
        self.append(FragmentKind::Attribute, spec)
    }

    /// Appends `:name`. May repeat.
    pub fn pseudo_class(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::PseudoClass, name)
    }

    /// Appends `::name`.
    pub fn pseudo_element(&self, name: &str) -> Result<Self> {
        self.append(FragmentKind::PseudoElement, name)
    }

    /// Appends a fragment of any kind after checking ordering and uniqueness.
    pub fn append(&self, kind: FragmentKind, value: &str) -> Result<Self> {
        if let Some(previous) = self.last_kind
            && kind.rank() < previous.rank()
        {
            log::debug!(
                "rejected {} '{}' after {} in '{}'",
                kind,
                value,
                previous,
                self.text
            );
            return Err(SelectorError::OrderViolation {
                previous,
                next: kind,
            });
        }

        if kind.is_unique() && self.used_kinds.has(kind) {
            log::debug!("rejected duplicate {} '{}' in '{}'", kind, value, self.text);
            return Err(SelectorError::DuplicateFragment(kind));
        }

        let mut text = String::with_capacity(self.text.len() + value.len() + 2);
        text.push_str(&self.text);
        text.push_str(&kind.render(value));
        log::trace!("appended {}: '{}'", kind, text);

        Ok(Self {
            text,
            last_kind: Some(kind),
            used_kinds: self.used_kinds.with(kind),
        })
    }

    /// Joins two selectors with a combinator, e.g. `div > p`.
    ///
    /// The combinator is always surrounded by one space on each side, so the
    /// descendant combinator produces three spaces. The result starts a fresh
    /// chain: neither operand's ordering or uniqueness state carries over.
    pub fn combine(
        left: &SelectorBuilder,
        combinator: Combinator,
        right: &SelectorBuilder,
    ) -> Self {
        let text = format!("{} {} {}", left.text, combinator, right.text);
        log::trace!("combined: '{}'", text);

        Self {
            text,
            last_kind: None,
            used_kinds: KindSet::empty(),
        }
    }

    /// Returns the selector text built so far.
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Kind of the most recently appended fragment, if any.
    pub fn last_kind(&self) -> Option<FragmentKind> {
        self.last_kind
    }

    pub fn used_kinds(&self) -> KindSet {
        self.used_kinds
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
