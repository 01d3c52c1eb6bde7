// ABOUTME: Node values stored in the document arena: elements and text leaves.
// ABOUTME: Elements keep ordered attributes and treat "class" as an ordered token set.

/// A single node value. Structure (parent/children) lives in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Shorthand for a bare element node.
    pub fn element(name: impl Into<String>) -> Self {
        Node::Element(Element::new(name))
    }

    /// Shorthand for a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// True for elements with the given (lowercase) tag name.
    pub fn is_tag(&self, name: &str) -> bool {
        self.as_element().is_some_and(|el| el.name() == name)
    }

    /// True for text nodes that contain only whitespace.
    pub fn is_blank_text(&self) -> bool {
        self.as_text().is_some_and(|t| t.trim().is_empty())
    }
}

/// An HTML element: tag name plus attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Heading level for `h1`..`h6`.
    pub fn heading_level(&self) -> Option<u8> {
        match self.name.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(k, _)| k == name)
    }

    /// Sets an attribute, keeping its position if it already exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Removes an attribute entirely. Returns the old value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(k, _)| k == name)?;
        Some(self.attrs.remove(pos).1)
    }

    /// Class tokens in source order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes().any(|c| c == token)
    }

    /// Appends a class token unless it is already present.
    pub fn add_class(&mut self, token: &str) {
        if token.is_empty() || self.has_class(token) {
            return;
        }
        let joined = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), token)
            }
            _ => token.to_string(),
        };
        self.set_attr("class", joined);
    }

    /// Replaces the class list. An empty list removes the attribute.
    pub fn set_classes<'a, I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut kept: Vec<&str> = Vec::new();
        for token in tokens {
            if !token.is_empty() && !kept.contains(&token) {
                kept.push(token);
            }
        }
        if kept.is_empty() {
            self.remove_attr("class");
        } else {
            let joined = kept.join(" ");
            self.set_attr("class", joined);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_keeps_position() {
        let mut el = Element::new("a")
            .with_attr("href", "#x")
            .with_attr("id", "y");
        el.set_attr("href", "#z");
        let attrs: Vec<_> = el.attrs().collect();
        assert_eq!(attrs, vec![("href", "#z"), ("id", "y")]);
    }

    #[test]
    fn add_class_is_ordered_and_unique() {
        let mut el = Element::new("div").with_attr("class", "highlight");
        el.add_class("js");
        el.add_class("js");
        assert_eq!(el.attr("class"), Some("highlight js"));
    }

    #[test]
    fn set_classes_empty_removes_attribute() {
        let mut el = Element::new("span").with_attr("class", "source js");
        el.set_classes(Vec::<&str>::new());
        assert!(!el.has_attr("class"));
    }

    #[test]
    fn heading_levels() {
        assert_eq!(Element::new("H3").heading_level(), Some(3));
        assert_eq!(Element::new("p").heading_level(), None);
    }
}
