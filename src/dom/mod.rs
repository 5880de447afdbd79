//! DOM adaptation layer
//!
//! Everything that touches a document goes through [`DomAdapter`], a small
//! host interface: find elements, read and write attributes and text. Inline
//! styles and class lists are built on top of attributes as provided methods,
//! so an adapter only has to implement the primitives.
//!
//! [`HtmlDocument`] is the bundled adapter over an html5ever/rcdom tree.

pub mod forms;
pub mod html;
pub mod rtl;
pub mod style;

pub use html::HtmlDocument;
pub use rtl::{align_after_paste, align_input, apply_keyboard_layout, apply_rtl_layout, RtlReport};

/// The element queries the adaptation passes need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `#id`
    Id(&'a str),
    /// `.class`
    Class(&'a str),
    /// `tag`
    Tag(&'a str),
    /// `[name="value"]`
    Attr(&'a str, &'a str),
    /// `input[type="text"], textarea`
    TextInput,
}

impl Selector<'_> {
    /// Tests an element given its tag name and an attribute lookup.
    pub fn matches<F>(&self, tag: &str, attr: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        match *self {
            Selector::Id(id) => attr("id").as_deref() == Some(id),
            Selector::Class(class) => attr("class")
                .map(|list| list.split_whitespace().any(|c| c == class))
                .unwrap_or(false),
            Selector::Tag(name) => tag.eq_ignore_ascii_case(name),
            Selector::Attr(name, value) => attr(name).as_deref() == Some(value),
            Selector::TextInput => {
                tag.eq_ignore_ascii_case("textarea")
                    || (tag.eq_ignore_ascii_case("input")
                        && attr("type")
                            .map(|t| t.eq_ignore_ascii_case("text"))
                            .unwrap_or(false))
            }
        }
    }
}

/// Narrow interface to a host document.
pub trait DomAdapter {
    type Node: Clone;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    /// All matching elements in document order.
    fn select_all(&self, selector: &Selector) -> Vec<Self::Node>;
    /// First matching descendant of `scope`.
    fn select_within(&self, scope: &Self::Node, selector: &Selector) -> Option<Self::Node>;
    fn tag_name(&self, node: &Self::Node) -> Option<String>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&self, node: &Self::Node, name: &str);
    fn text_content(&self, node: &Self::Node) -> String;
    fn set_text_content(&self, node: &Self::Node, text: &str);

    fn element_by_id(&self, id: &str) -> Option<Self::Node> {
        self.select_all(&Selector::Id(id)).into_iter().next()
    }

    /// Current value of a form field: `value` for inputs, text for textareas.
    fn input_value(&self, node: &Self::Node) -> String {
        match self.tag_name(node) {
            Some(tag) if tag.eq_ignore_ascii_case("textarea") => self.text_content(node),
            _ => self.attribute(node, "value").unwrap_or_default(),
        }
    }

    fn style_property(&self, node: &Self::Node, property: &str) -> Option<String> {
        self.attribute(node, "style")
            .and_then(|style| style::get_property(&style, property))
    }

    fn set_style(&self, node: &Self::Node, property: &str, value: &str) {
        let current = self.attribute(node, "style").unwrap_or_default();
        self.set_attribute(node, "style", &style::set_property(&current, property, value));
    }

    fn has_class(&self, node: &Self::Node, class: &str) -> bool {
        self.attribute(node, "class")
            .map(|list| list.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    fn add_class(&self, node: &Self::Node, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let list = self.attribute(node, "class").unwrap_or_default();
        let list = if list.trim().is_empty() {
            class.to_string()
        } else {
            format!("{} {}", list.trim(), class)
        };
        self.set_attribute(node, "class", &list);
    }

    fn remove_class(&self, node: &Self::Node, class: &str) {
        if let Some(list) = self.attribute(node, "class") {
            let kept: Vec<&str> = list.split_whitespace().filter(|c| *c != class).collect();
            self.set_attribute(node, "class", &kept.join(" "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_class_selector() {
        let selector = Selector::Class("modal");
        assert!(selector.matches("div", attrs(&[("class", "fade modal show")])));
        assert!(!selector.matches("div", attrs(&[("class", "modal-header")])));
    }

    #[test]
    fn test_text_input_selector() {
        assert!(Selector::TextInput.matches("input", attrs(&[("type", "TEXT")])));
        assert!(Selector::TextInput.matches("textarea", attrs(&[])));
        assert!(!Selector::TextInput.matches("input", attrs(&[("type", "email")])));
        assert!(!Selector::TextInput.matches("input", attrs(&[])));
    }

    #[test]
    fn test_attr_selector() {
        let selector = Selector::Attr("data-bs-toggle", "tooltip");
        assert!(selector.matches("span", attrs(&[("data-bs-toggle", "tooltip")])));
        assert!(!selector.matches("span", attrs(&[("data-bs-toggle", "popover")])));
    }
}
