use std::fmt;

use crate::error::SelectorError;

/// Symbol joining two compound selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    Descendant,      // ' '
    AdjacentSibling, // +
    GeneralSibling,  // ~
    Child,           // >
}

impl Combinator {
    pub fn symbol(self) -> char {
        match self {
            Combinator::Descendant => ' ',
            Combinator::AdjacentSibling => '+',
            Combinator::GeneralSibling => '~',
            Combinator::Child => '>',
        }
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            ' ' => Ok(Combinator::Descendant),
            '+' => Ok(Combinator::AdjacentSibling),
            '~' => Ok(Combinator::GeneralSibling),
            '>' => Ok(Combinator::Child),
            other => Err(SelectorError::UnknownCombinator(other)),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for c in [' ', '+', '~', '>'] {
            assert_eq!(Combinator::try_from(c).unwrap().symbol(), c);
        }
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(
            Combinator::try_from('|'),
            Err(SelectorError::UnknownCombinator('|'))
        );
    }
}
