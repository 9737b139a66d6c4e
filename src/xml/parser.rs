use std::str;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::document::{Attribute, Declaration, Element, Node, XmlDocument, XmlError};

/// Parse a complete document. The whole input is consumed before anything
/// is returned, so a malformed file never yields a partial tree.
pub fn parse_document(text: &str) -> Result<XmlDocument, XmlError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = Reader::from_str(text);
    // Whitespace inside the root is content; keep it.
    reader.config_mut().trim_text(false);

    let mut builder = TreeBuilder::default();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| XmlError::new(reader.error_position() as u64, e))?;
        let position = reader.buffer_position() as u64;

        match event {
            Event::Decl(d) => {
                let version = d.version().map_err(|e| XmlError::new(position, e))?;
                let encoding = match d.encoding() {
                    Some(enc) => Some(utf8(&enc.map_err(|e| XmlError::new(position, e))?, position)?),
                    None => None,
                };
                let standalone = match d.standalone() {
                    Some(sa) => Some(utf8(&sa.map_err(|e| XmlError::new(position, e))?, position)?),
                    None => None,
                };
                builder.declaration = Some(Declaration {
                    version: utf8(&version, position)?,
                    encoding,
                    standalone,
                });
            }
            Event::Start(e) => {
                let element = element_from_start(&e, position)?;
                builder.stack.push(element);
            }
            Event::Empty(e) => {
                let element = element_from_start(&e, position)?;
                builder.attach(Node::Element(element), position)?;
            }
            Event::End(e) => {
                let element = builder
                    .stack
                    .pop()
                    .ok_or_else(|| XmlError::new(position, "closing tag without an open element"))?;
                let name = utf8(e.name().as_ref(), position)?;
                if name != element.name {
                    return Err(XmlError::new(
                        position,
                        format!("expected </{}>, found </{}>", element.name, name),
                    ));
                }
                builder.attach(Node::Element(element), position)?;
            }
            Event::Text(t) => {
                builder.attach(Node::Text(utf8(&t, position)?), position)?;
            }
            Event::GeneralRef(r) => {
                let entity = format!("&{};", utf8(&r, position)?);
                builder.attach(Node::Text(entity), position)?;
            }
            Event::CData(c) => {
                builder.attach(Node::CData(utf8(&c, position)?), position)?;
            }
            Event::Comment(c) => {
                builder.attach(Node::Comment(utf8(&c, position)?), position)?;
            }
            Event::PI(pi) => {
                builder.attach(Node::ProcessingInstruction(utf8(&pi, position)?), position)?;
            }
            Event::DocType(d) => {
                builder.attach(Node::DocType(utf8(&d, position)?), position)?;
            }
            Event::Eof => break,
        }
    }

    builder.finish(reader.buffer_position() as u64)
}

// ============================================================================
// Tree assembly
// ============================================================================

#[derive(Default)]
struct TreeBuilder {
    declaration: Option<Declaration>,
    prolog: Vec<Node>,
    root: Option<Element>,
    epilog: Vec<Node>,
    /// Open elements, innermost last.
    stack: Vec<Element>,
}

impl TreeBuilder {
    fn attach(&mut self, node: Node, position: u64) -> Result<(), XmlError> {
        if let Some(parent) = self.stack.last_mut() {
            // Entity references split text into several events; merge them back.
            if let Node::Text(more) = &node
                && let Some(Node::Text(existing)) = parent.children.last_mut()
            {
                existing.push_str(more);
                return Ok(());
            }
            parent.children.push(node);
            return Ok(());
        }

        match node {
            Node::Element(element) => {
                if self.root.is_some() {
                    return Err(XmlError::new(position, "more than one root element"));
                }
                self.root = Some(element);
            }
            Node::Text(text) => {
                if !text.trim().is_empty() {
                    return Err(XmlError::new(position, "text outside the root element"));
                }
            }
            Node::CData(_) => {
                return Err(XmlError::new(position, "CDATA outside the root element"));
            }
            Node::DocType(_) if self.root.is_some() => {
                return Err(XmlError::new(position, "DOCTYPE after the root element"));
            }
            other => {
                if self.root.is_none() {
                    self.prolog.push(other);
                } else {
                    self.epilog.push(other);
                }
            }
        }
        Ok(())
    }

    fn finish(self, position: u64) -> Result<XmlDocument, XmlError> {
        if let Some(open) = self.stack.last() {
            return Err(XmlError::new(
                position,
                format!("unexpected end of input, <{}> is not closed", open.name),
            ));
        }
        let root = self
            .root
            .ok_or_else(|| XmlError::new(position, "document has no root element"))?;

        Ok(XmlDocument {
            declaration: self.declaration,
            prolog: self.prolog,
            root,
            epilog: self.epilog,
        })
    }
}

fn element_from_start(e: &BytesStart<'_>, position: u64) -> Result<Element, XmlError> {
    let mut element = Element::new(utf8(e.name().as_ref(), position)?);
    for attr in e.attributes() {
        let attr = attr.map_err(|err| XmlError::new(position, err))?;
        element.attributes.push(Attribute {
            name: utf8(attr.key.as_ref(), position)?,
            raw_value: utf8(&attr.value, position)?,
        });
    }
    Ok(element)
}

fn utf8(bytes: &[u8], position: u64) -> Result<String, XmlError> {
    str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| XmlError::new(position, e))
}
