// File: src/dom/html.rs
use crate::dom::{DomAdapter, Selector};
use crate::error::{ArabicError, Result};
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::{format_tendril, TendrilSink};
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// An HTML document parsed into an rcdom tree.
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Result<Self> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| ArabicError::Html(e.to_string()))?;
        Ok(Self { dom })
    }

    pub fn to_html(&self) -> Result<String> {
        let mut buf: Vec<u8> = Vec::new();
        let serializable: SerializableHandle = self.dom.document.clone().into();
        serialize(&mut buf, &serializable, SerializeOpts::default())
            .map_err(|e| ArabicError::Html(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| ArabicError::Html(e.to_string()))
    }
}

fn get_child_node_by_name(parent: &Handle, node_name: &str) -> Option<Handle> {
    let children = parent.children.borrow();
    children
        .iter()
        .find(|child| match child.data {
            NodeData::Element { ref name, .. } => &*name.local == node_name,
            _ => false,
        })
        .cloned()
}

fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn node_matches(node: &Handle, selector: &Selector) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => {
            selector.matches(&name.local, |attr_name: &str| get_node_attr(node, attr_name))
        }
        _ => false,
    }
}

fn collect_matching(node: &Handle, selector: &Selector, found: &mut Vec<Handle>) {
    if node_matches(node, selector) {
        found.push(node.clone());
    }
    for child in node.children.borrow().iter() {
        collect_matching(child, selector, found);
    }
}

fn find_first(node: &Handle, selector: &Selector) -> Option<Handle> {
    for child in node.children.borrow().iter() {
        if node_matches(child, selector) {
            return Some(child.clone());
        }
        if let Some(found) = find_first(child, selector) {
            return Some(found);
        }
    }
    None
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

impl DomAdapter for HtmlDocument {
    type Node = Handle;

    fn root(&self) -> Option<Handle> {
        get_child_node_by_name(&self.dom.document, "html")
    }

    fn body(&self) -> Option<Handle> {
        self.root().and_then(|html| get_child_node_by_name(&html, "body"))
    }

    fn select_all(&self, selector: &Selector) -> Vec<Handle> {
        let mut found = Vec::new();
        collect_matching(&self.dom.document, selector, &mut found);
        found
    }

    fn select_within(&self, scope: &Handle, selector: &Selector) -> Option<Handle> {
        find_first(scope, selector)
    }

    fn tag_name(&self, node: &Handle) -> Option<String> {
        match &node.data {
            NodeData::Element { name, .. } => Some(name.local.to_string()),
            _ => None,
        }
    }

    fn attribute(&self, node: &Handle, name: &str) -> Option<String> {
        get_node_attr(node, name)
    }

    fn set_attribute(&self, node: &Handle, attr_name: &str, attr_value: &str) {
        if let NodeData::Element { attrs, .. } = &node.data {
            let attrs_mut = &mut attrs.borrow_mut();
            if let Some(existing) = attrs_mut
                .iter_mut()
                .find(|attr| &*attr.name.local == attr_name)
            {
                existing.value.clear();
                existing.value.push_slice(attr_value);
                return;
            }

            attrs_mut.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(attr_name)),
                value: format_tendril!("{}", attr_value),
            });
        }
    }

    fn remove_attribute(&self, node: &Handle, attr_name: &str) {
        if let NodeData::Element { attrs, .. } = &node.data {
            attrs
                .borrow_mut()
                .retain(|attr| &*attr.name.local != attr_name);
        }
    }

    fn text_content(&self, node: &Handle) -> String {
        let mut text = String::new();
        collect_text(node, &mut text);
        text
    }

    fn set_text_content(&self, node: &Handle, text: &str) {
        let text_node = Node::new(NodeData::Text {
            contents: RefCell::new(text.into()),
        });
        text_node.parent.set(Some(Rc::downgrade(node)));

        let mut children = node.children.borrow_mut();
        children.clear();
        children.push(text_node);
    }
}
