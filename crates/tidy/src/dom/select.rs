// ABOUTME: Composable element predicates used with Document::select.
// ABOUTME: Covers tag names, attributes, class tokens, and heading levels.

//! Predicates are plain closures over [`Element`]; combine them with [`and`]
//! and [`not`] instead of writing CSS selectors.

use super::node::Element;

pub fn tag(name: &str) -> impl Fn(&Element) -> bool + '_ {
    move |el: &Element| el.name() == name
}

pub fn class(token: &str) -> impl Fn(&Element) -> bool + '_ {
    move |el: &Element| el.has_class(token)
}

/// Matches elements carrying any of the given class tokens.
pub fn any_class<'a>(tokens: &'a [&'a str]) -> impl Fn(&Element) -> bool + 'a {
    move |el: &Element| el.classes().any(|c| tokens.iter().any(|t| *t == c))
}

pub fn has_attr(name: &str) -> impl Fn(&Element) -> bool + '_ {
    move |el: &Element| el.has_attr(name)
}

pub fn attr_eq<'a>(name: &'a str, value: &'a str) -> impl Fn(&Element) -> bool + 'a {
    move |el: &Element| el.attr(name) == Some(value)
}

pub fn attr_prefix<'a>(name: &'a str, prefix: &'a str) -> impl Fn(&Element) -> bool + 'a {
    move |el: &Element| el.attr(name).is_some_and(|v| v.starts_with(prefix))
}

/// Any `h1`..`h6`.
pub fn heading(el: &Element) -> bool {
    el.heading_level().is_some()
}

pub fn heading_level(level: u8) -> impl Fn(&Element) -> bool {
    move |el: &Element| el.heading_level() == Some(level)
}

pub fn and<A, B>(a: A, b: B) -> impl Fn(&Element) -> bool
where
    A: Fn(&Element) -> bool,
    B: Fn(&Element) -> bool,
{
    move |el: &Element| a(el) && b(el)
}

pub fn not<A>(a: A) -> impl Fn(&Element) -> bool
where
    A: Fn(&Element) -> bool,
{
    move |el: &Element| !a(el)
}
