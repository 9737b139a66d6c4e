use std::borrow::Cow;

use quick_xml::Writer;
use quick_xml::events::attributes::Attribute as RawAttribute;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::name::QName;

use super::document::{Declaration, Element, Node, XmlDocument, XmlError};

/// Serialize a document.
///
/// Output always starts with an XML declaration (the source's, or a UTF-8
/// default), puts each top-level node on its own line, and ends with a
/// newline. Content inside the root is written as stored, and elements
/// without children are written self-closing.
pub fn to_xml_string(doc: &XmlDocument) -> Result<String, XmlError> {
    let mut writer = Writer::new(Vec::new());

    let default_decl = Declaration::default();
    let decl = doc.declaration.as_ref().unwrap_or(&default_decl);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new(
            &decl.version,
            decl.encoding.as_deref(),
            decl.standalone.as_deref(),
        )),
    )?;
    newline(&mut writer);

    for node in &doc.prolog {
        write_node(&mut writer, node)?;
        newline(&mut writer);
    }

    write_element(&mut writer, &doc.root)?;
    newline(&mut writer);

    for node in &doc.epilog {
        write_node(&mut writer, node)?;
        newline(&mut writer);
    }

    String::from_utf8(writer.into_inner()).map_err(|e| XmlError::new(0, e))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), XmlError> {
    let mut start = BytesStart::new(element.name.as_str());
    for attr in &element.attributes {
        start.push_attribute(RawAttribute {
            key: QName(attr.name.as_bytes()),
            value: double_quotable(&attr.raw_value),
        });
    }

    if element.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

/// Values are stored escaped as written, but a single-quoted source value
/// may hold a bare `"`. Output always uses double quotes, so that one
/// character is escaped; everything else passes through verbatim.
fn double_quotable(raw: &str) -> Cow<'_, [u8]> {
    if raw.contains('"') {
        Cow::Owned(raw.replace('"', "&quot;").into_bytes())
    } else {
        Cow::Borrowed(raw.as_bytes())
    }
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<(), XmlError> {
    match node {
        Node::Element(e) => write_element(writer, e),
        Node::Text(t) => emit(writer, Event::Text(BytesText::from_escaped(t.as_str()))),
        Node::CData(c) => emit(writer, Event::CData(BytesCData::new(c.as_str()))),
        Node::Comment(c) => emit(writer, Event::Comment(BytesText::from_escaped(c.as_str()))),
        Node::ProcessingInstruction(pi) => emit(writer, Event::PI(BytesPI::new(pi.as_str()))),
        Node::DocType(d) => emit(writer, Event::DocType(BytesText::from_escaped(d.as_str()))),
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), XmlError> {
    let position = writer.get_ref().len() as u64;
    writer
        .write_event(event)
        .map_err(|e| XmlError::new(position, e))
}

fn newline(writer: &mut Writer<Vec<u8>>) {
    writer.get_mut().push(b'\n');
}
