use std::borrow::Cow;
use std::fmt;

use quick_xml::escape::{escape, unescape};

// ============================================================================
// Document model
// ============================================================================

/// An owned, mutable XML tree.
///
/// Text and attribute values are stored exactly as written in the source
/// (still escaped), so anything the injector does not touch is written back
/// without entity churn.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub declaration: Option<Declaration>,
    /// Comments, processing instructions and doctype before the root.
    pub prolog: Vec<Node>,
    pub root: Element,
    /// Comments and processing instructions after the root.
    pub epilog: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            encoding: Some("utf-8".to_string()),
            standalone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Raw (escaped) character data, entity references included.
    Text(String),
    CData(String),
    Comment(String),
    /// Target and data, without the `<?` `?>` delimiters.
    ProcessingInstruction(String),
    DocType(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Literal qualified name, e.g. `android:id`.
    pub name: String,
    /// Value as written in the source, still escaped.
    pub raw_value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: &str) -> Self {
        Self {
            name: name.into(),
            raw_value: escape(value).into_owned(),
        }
    }

    /// Unescaped value. Falls back to the raw text for unknown entities.
    pub fn value(&self) -> Cow<'_, str> {
        unescape(&self.raw_value).unwrap_or(Cow::Borrowed(self.raw_value.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Literal tag text, prefix included. No namespace resolution.
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<Cow<'_, str>> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Set an attribute, replacing an existing value in place or appending.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.raw_value = escape(value).into_owned(),
            None => self.attributes.push(Attribute::new(name, value)),
        }
    }

    /// Direct element children.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Visit this element and every descendant element, in document order.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        for child in self.child_elements() {
            child.visit(f);
        }
    }

    /// Mutable variant of [`Element::visit`].
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in self.children.iter_mut() {
            if let Node::Element(e) = child {
                e.visit_mut(f);
            }
        }
    }
}

impl XmlDocument {
    pub fn new(root: Element) -> Self {
        Self {
            declaration: None,
            prolog: Vec::new(),
            root,
            epilog: Vec::new(),
        }
    }

    pub fn parse(text: &str) -> Result<Self, XmlError> {
        super::parser::parse_document(text)
    }

    pub fn to_xml(&self) -> Result<String, XmlError> {
        super::writer::to_xml_string(self)
    }

    /// All elements with the given literal tag name, document order.
    pub fn elements_named(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.root.visit(&mut |el| {
            if el.name == name {
                found.push(el);
            }
        });
        found
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Parse or write failure, with the byte offset where the reader stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlError {
    pub position: u64,
    pub message: String,
}

impl XmlError {
    pub fn new(position: u64, message: impl fmt::Display) -> Self {
        Self {
            position,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.position)
    }
}

impl std::error::Error for XmlError {}
