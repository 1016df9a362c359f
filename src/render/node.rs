//! Visual tree produced by the renderer.

use std::fmt::Write as _;

use crate::markup::{self, escape_html, Markup};

/// Attribute carrying a block's semantic role.
pub const ROLE_ATTR: &str = "data-role";

const VOID_TAGS: &[&str] = &["img", "br", "hr"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Plain text, escaped on output.
    Text(String),
    /// Allow-listed inline markup.
    Markup(Markup),
}

impl Node {
    fn write_text(&self, out: &mut String) {
        match self {
            Node::Element(element) => {
                for child in &element.children {
                    child.write_text(out);
                }
            }
            Node::Text(text) => out.push_str(text),
            Node::Markup(markup) => out.push_str(&markup.plain_text()),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Markup(markup) => out.push_str(&markup.to_html()),
        }
    }
}

/// Text directly held by one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub role: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            styles: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    /// Add one or more space-separated classes. Empty input is ignored.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.classes
            .extend(classes.as_ref().split_whitespace().map(str::to_string));
        self
    }

    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.styles.iter_mut().find(|(key, _)| key == property) {
            Some(slot) => slot.1 = value,
            None => self.styles.push((property.to_string(), value)),
        }
        self
    }

    /// Set an attribute, replacing any earlier value.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    pub fn role(self, role: &str) -> Self {
        self.attr(ROLE_ATTR, role)
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn maybe_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Parse `source` as inline markup and append it.
    pub fn markup(mut self, source: &str) -> Self {
        self.children.push(Node::Markup(markup::parse(source)));
        self
    }

    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn role_name(&self) -> Option<&str> {
        self.attr_value(ROLE_ATTR)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Pre-order walk over this element and every element below it.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Element>) {
        out.push(self);
        for child in &self.children {
            if let Node::Element(element) = child {
                element.collect(out);
            }
        }
    }

    pub fn find_role(&self, role: &str) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|element| element.role_name() == Some(role))
    }

    pub fn find_all_role(&self, role: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|element| element.role_name() == Some(role))
            .collect()
    }

    /// All text below this element, formatting stripped, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_text(&mut out);
        }
        out
    }

    /// One string per element that directly holds text, in document order.
    /// Blank blocks are skipped.
    pub fn text_blocks(&self) -> Vec<String> {
        self.role_blocks().into_iter().map(|block| block.text).collect()
    }

    /// Like `text_blocks`, tagged with the role of the nearest element
    /// (this one or an ancestor) that carries one.
    pub fn role_blocks(&self) -> Vec<TextBlock> {
        let mut out = Vec::new();
        self.collect_blocks(None, &mut out);
        out
    }

    fn collect_blocks<'a>(&'a self, inherited: Option<&'a str>, out: &mut Vec<TextBlock>) {
        let role = self.role_name().or(inherited);
        let mut block = String::new();
        for child in &self.children {
            if !matches!(child, Node::Element(_)) {
                child.write_text(&mut block);
            }
        }
        let trimmed = block.trim();
        if !trimmed.is_empty() {
            out.push(TextBlock {
                role: role.map(str::to_string),
                text: trimmed.to_string(),
            });
        }
        for child in &self.children {
            if let Node::Element(element) = child {
                element.collect_blocks(role, out);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&self.classes.join(" ")));
        }
        if !self.styles.is_empty() {
            let css = self
                .styles
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", escape_html(&css));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}
