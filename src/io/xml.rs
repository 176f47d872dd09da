//! Minimal XML element tree and the formatter used for `.snippet` output
//!
//! Output layout is fixed so that files written by the editor are stable:
//! CRLF line breaks, four space indentation, elements holding only text or
//! CDATA kept on one line, childless elements self-closed, no trailing newline.

use std::fmt;

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const LINE_SEPARATOR: &str = "\r\n";
const INDENT: &str = "    ";
const CARRIAGE_RETURN_REF: &str = "&#xD;";

/// Content of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    CData(String),
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn set_attribute(&mut self, name: &'static str, value: impl Into<String>) {
        self.attributes.push((name, value.into()));
    }

    /// Append a child element and return it for further building
    pub fn append(&mut self, name: &'static str) -> &mut XmlElement {
        self.children.push(XmlNode::Element(XmlElement::new(name)));
        match self.children.last_mut() {
            Some(XmlNode::Element(child)) => child,
            _ => unreachable!("an element was just pushed"),
        }
    }

    /// Append `<name>value</name>`
    pub fn append_text(&mut self, name: &'static str, value: &str) -> &mut XmlElement {
        let child = self.append(name);
        if !value.is_empty() {
            child.children.push(XmlNode::Text(value.to_string()));
        }
        child
    }

    pub fn push_cdata(&mut self, value: &str) {
        self.children.push(XmlNode::CData(value.to_string()));
    }

    fn has_child_elements(&self) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, XmlNode::Element(_)))
    }
}

/// Error producing XML output
#[derive(Debug)]
pub enum WriteError {
    /// The XML writer rejected an event
    Xml(quick_xml::Error),
    /// The output was not valid UTF-8
    Encoding(std::string::FromUtf8Error),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(e) => write!(f, "failed to write XML: {}", e),
            Self::Encoding(e) => write!(f, "XML output is not valid UTF-8: {}", e),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml(e) => Some(e),
            Self::Encoding(e) => Some(e),
        }
    }
}

impl From<quick_xml::Error> for WriteError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e)
    }
}

type XmlWriter = Writer<Vec<u8>>;

/// Serialize `root` as a complete document with an XML declaration
pub fn format_document(root: &XmlElement) -> Result<String, WriteError> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_raw(&mut writer, LINE_SEPARATOR)?;
    write_element(&mut writer, root, 0)?;

    String::from_utf8(writer.into_inner()).map_err(WriteError::Encoding)
}

fn write_element(
    writer: &mut XmlWriter,
    element: &XmlElement,
    depth: usize,
) -> Result<(), WriteError> {
    let mut start = BytesStart::new(element.name);
    for (name, value) in &element.attributes {
        start.push_attribute((*name, value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;

    if element.has_child_elements() {
        for child in &element.children {
            write_raw(writer, LINE_SEPARATOR)?;
            write_raw(writer, &INDENT.repeat(depth + 1))?;
            write_node(writer, child, depth + 1)?;
        }
        write_raw(writer, LINE_SEPARATOR)?;
        write_raw(writer, &INDENT.repeat(depth))?;
    } else {
        // Leaf content stays on the element's line
        for child in &element.children {
            write_node(writer, child, depth)?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new(element.name)))?;
    Ok(())
}

fn write_node(writer: &mut XmlWriter, node: &XmlNode, depth: usize) -> Result<(), WriteError> {
    match node {
        XmlNode::Element(element) => write_element(writer, element, depth)?,
        XmlNode::Text(text) => {
            let escaped = partial_escape(text);
            writer.write_event(Event::Text(BytesText::from_escaped(escaped)))?;
        }
        XmlNode::CData(data) => write_cdata(writer, data)?,
    }
    Ok(())
}

/// Write `data` as CDATA sections.
///
/// Parsers fold `\r\n` to `\n` even inside CDATA, so every carriage return is
/// written between sections as a character reference.
fn write_cdata(writer: &mut XmlWriter, data: &str) -> Result<(), WriteError> {
    if data.is_empty() {
        writer.write_event(Event::CData(BytesCData::new("")))?;
        return Ok(());
    }

    for (i, line) in data.split('\r').enumerate() {
        if i > 0 {
            write_raw(writer, CARRIAGE_RETURN_REF)?;
        }
        for section in split_cdata(line).into_iter().filter(|s| !s.is_empty()) {
            writer.write_event(Event::CData(BytesCData::new(section)))?;
        }
    }
    Ok(())
}

fn write_raw(writer: &mut XmlWriter, text: &str) -> Result<(), WriteError> {
    writer.write_event(Event::Text(BytesText::from_escaped(text)))?;
    Ok(())
}

/// Split CDATA content so no section contains `]]>`
fn split_cdata(data: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = data;

    while let Some(idx) = rest.find("]]>") {
        // End the section between `]]` and `>`
        sections.push(&rest[..idx + 2]);
        rest = &rest[idx + 2..];
    }
    sections.push(rest);

    sections
}
