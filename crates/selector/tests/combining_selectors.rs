//! Integration tests for joining selectors with combinators:
//! descendant (space), adjacent sibling (`+`), general sibling (`~`), child (`>`).

use selector::{Combinator, FragmentKind, SelectorBuilder, SelectorError};

fn sel(kind: FragmentKind, value: &str) -> SelectorBuilder {
    SelectorBuilder::new().append(kind, value).unwrap()
}

#[test]
fn test_combine_formula_for_every_combinator() {
    let left = sel(FragmentKind::Element, "div");
    let right = sel(FragmentKind::Class, "item");

    for combinator in [
        Combinator::Descendant,
        Combinator::AdjacentSibling,
        Combinator::GeneralSibling,
        Combinator::Child,
    ] {
        let combined = SelectorBuilder::combine(&left, combinator, &right);
        assert_eq!(
            combined.stringify(),
            format!(
                "{} {} {}",
                left.stringify(),
                combinator.symbol(),
                right.stringify()
            )
        );
    }
}

#[test]
fn test_descendant_has_three_spaces() {
    let combined = SelectorBuilder::combine(
        &sel(FragmentKind::Element, "ul"),
        Combinator::Descendant,
        &sel(FragmentKind::Element, "li"),
    );
    assert_eq!(combined.stringify(), "ul   li");
}

#[test]
fn test_child_combinator() {
    let left = SelectorBuilder::new()
        .element("nav")
        .unwrap()
        .id("top")
        .unwrap();
    let right = SelectorBuilder::new()
        .element("a")
        .unwrap()
        .pseudo_class("hover")
        .unwrap();
    let combined = SelectorBuilder::combine(&left, Combinator::Child, &right);
    insta::assert_snapshot!(combined.stringify(), @"nav#top > a:hover");
}

#[test]
fn test_combinator_from_symbol() {
    let combined = SelectorBuilder::combine(
        &sel(FragmentKind::Element, "h1"),
        Combinator::try_from('+').unwrap(),
        &sel(FragmentKind::Element, "p"),
    );
    assert_eq!(combined.stringify(), "h1 + p");
    assert_eq!(
        Combinator::try_from('/'),
        Err(SelectorError::UnknownCombinator('/'))
    );
}

#[test]
fn test_combined_selector_starts_fresh_chain() {
    let left = sel(FragmentKind::PseudoElement, "after");
    let right = sel(FragmentKind::PseudoElement, "before");
    let combined = SelectorBuilder::combine(&left, Combinator::GeneralSibling, &right);

    // Neither operand's state carries over, so any kind may follow.
    let extended = combined.element("span").unwrap();
    assert_eq!(extended.stringify(), "::after ~ ::beforespan");
}

#[test]
fn test_operands_are_untouched() {
    let left = sel(FragmentKind::Id, "a");
    let right = sel(FragmentKind::Id, "b");
    let _ = SelectorBuilder::combine(&left, Combinator::Child, &right);
    assert_eq!(left.stringify(), "#a");
    assert_eq!(right.stringify(), "#b");
    assert_eq!(left.last_kind(), Some(FragmentKind::Id));
}

#[test]
fn test_nested_combination() {
    let inner = SelectorBuilder::combine(
        &sel(FragmentKind::Element, "table"),
        Combinator::Child,
        &sel(FragmentKind::Element, "tr"),
    );
    let outer = SelectorBuilder::combine(
        &inner,
        Combinator::Child,
        &sel(FragmentKind::Element, "td"),
    );
    assert_eq!(outer.stringify(), "table > tr > td");
}
