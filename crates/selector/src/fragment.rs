use std::fmt;

use bitflags::bitflags;

/// The kind of a single selector fragment.
///
/// Kinds are ranked; a selector lists its fragments in non-decreasing rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// A type selector such as `div`.
    Element,
    /// `#name`
    Id,
    /// `.name`
    Class,
    /// `[expr]`
    Attribute,
    /// `:name`
    PseudoClass,
    /// `::name`
    PseudoElement,
}

impl FragmentKind {
    pub const ALL: [FragmentKind; 6] = [
        FragmentKind::Element,
        FragmentKind::Id,
        FragmentKind::Class,
        FragmentKind::Attribute,
        FragmentKind::PseudoClass,
        FragmentKind::PseudoElement,
    ];

    /// Position of this kind in the element, id, class, attribute,
    /// pseudo-class, pseudo-element ordering, starting at 1.
    pub fn rank(self) -> u8 {
        match self {
            FragmentKind::Element => 1,
            FragmentKind::Id => 2,
            FragmentKind::Class => 3,
            FragmentKind::Attribute => 4,
            FragmentKind::PseudoClass => 5,
            FragmentKind::PseudoElement => 6,
        }
    }

    /// Whether this kind may occur at most once per selector.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }

    pub fn prefix(self) -> &'static str {
        match self {
            FragmentKind::Element => "",
            FragmentKind::Id => "#",
            FragmentKind::Class => ".",
            FragmentKind::Attribute => "[",
            FragmentKind::PseudoClass => ":",
            FragmentKind::PseudoElement => "::",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            FragmentKind::Attribute => "]",
            _ => "",
        }
    }

    /// Renders `value` with this kind's punctuation, e.g. `Class` + `"foo"` -> `".foo"`.
    ///
    /// The value is inserted verbatim; nothing is escaped.
    pub fn render(self, value: &str) -> String {
        let (prefix, suffix) = (self.prefix(), self.suffix());
        let mut out = String::with_capacity(prefix.len() + value.len() + suffix.len());
        out.push_str(prefix);
        out.push_str(value);
        out.push_str(suffix);
        out
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FragmentKind::Element => "element",
            FragmentKind::Id => "id",
            FragmentKind::Class => "class",
            FragmentKind::Attribute => "attribute",
            FragmentKind::PseudoClass => "pseudo-class",
            FragmentKind::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Set of fragment kinds already appended to a selector.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KindSet: u8 {
        const ELEMENT = 1 << 0;
        const ID = 1 << 1;
        const CLASS = 1 << 2;
        const ATTRIBUTE = 1 << 3;
        const PSEUDO_CLASS = 1 << 4;
        const PSEUDO_ELEMENT = 1 << 5;
    }
}

impl KindSet {
    pub fn has(self, kind: FragmentKind) -> bool {
        self.contains(KindSet::from(kind))
    }

    /// Returns a copy of this set with `kind` added.
    pub fn with(self, kind: FragmentKind) -> Self {
        self | KindSet::from(kind)
    }
}

impl From<FragmentKind> for KindSet {
    fn from(kind: FragmentKind) -> Self {
        match kind {
            FragmentKind::Element => KindSet::ELEMENT,
            FragmentKind::Id => KindSet::ID,
            FragmentKind::Class => KindSet::CLASS,
            FragmentKind::Attribute => KindSet::ATTRIBUTE,
            FragmentKind::PseudoClass => KindSet::PSEUDO_CLASS,
            FragmentKind::PseudoElement => KindSet::PSEUDO_ELEMENT,
        }
    }
}
