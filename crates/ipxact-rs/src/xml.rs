// crates/ipxact-rs/src/xml.rs

//! A small owned XML element tree built on top of `quick-xml` events.
//!
//! Readers walk this tree instead of the raw event stream, and vendor
//! extensions keep their content in it. Attribute values and text are stored
//! exactly as they appear in the source (still escaped), so an element that was
//! read and is written back produces the same bytes.

use crate::error::IpxactError;
use quick_xml::escape::{escape, partial_escape, unescape};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A child node of an [`XmlElement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum XmlNode {
    Element(XmlElement),
    /// Character data in escaped form.
    Text(String),
    CData(String),
    Comment(String),
}

/// An XML element with its attributes and children, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct XmlElement {
    name: String,
    /// `(qualified name, escaped value)` pairs.
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

/// Result of parsing a complete document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    /// The document element.
    pub root: XmlElement,
    /// Comments that appear before the document element.
    pub leading_comments: Vec<String>,
}

impl XmlElement {
    /// Creates an element with the given qualified name and no content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute; the value is escaped on insertion.
    pub fn with_attribute(mut self, key: impl Into<String>, value: &str) -> Self {
        self.attributes.push((key.into(), escape(value).into_owned()));
        self
    }

    /// Appends character data; `<`, `>` and `&` are escaped on insertion.
    pub fn with_text(mut self, text: &str) -> Self {
        self.children
            .push(XmlNode::Text(partial_escape(text).into_owned()));
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Parses an XML fragment or document and returns its root element.
    pub fn parse(xml: &str) -> Result<Self, IpxactError> {
        parse_document(xml).map(|doc| doc.root)
    }

    /// The qualified element name (e.g. `ipxact:name`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates the attributes as `(qualified name, escaped value)`.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the unescaped value of the attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Result<Option<String>, IpxactError> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, raw)| unescape(raw).map(|v| v.into_owned()))
            .transpose()
            .map_err(IpxactError::from)
    }

    /// All child nodes in document order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Iterates the child elements, skipping text and comments.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Iterates the child elements named `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.child_elements().filter(move |e| e.name == name)
    }

    /// Returns the first child element named `name`.
    pub fn first_child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|e| e.name == name)
    }

    /// The unescaped character data directly inside this element, surrounding
    /// whitespace included.
    pub fn text(&self) -> Result<String, IpxactError> {
        let mut text = String::new();
        for node in &self.children {
            match node {
                XmlNode::Text(raw) => text.push_str(&unescape(raw)?),
                XmlNode::CData(data) => text.push_str(data),
                _ => {}
            }
        }
        Ok(text)
    }

    /// The text of the first child element named `name`, if that child exists.
    pub fn child_text(&self, name: &str) -> Result<Option<String>, IpxactError> {
        self.first_child(name).map(XmlElement::text).transpose()
    }

    /// Writes this element and its subtree exactly as stored.
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), IpxactError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            // Raw bytes: the value is already escaped.
            start.push_attribute(Attribute::from((key.as_bytes(), value.as_bytes())));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                XmlNode::Element(element) => element.write_to(writer)?,
                XmlNode::Text(raw) => {
                    writer.write_event(Event::Text(BytesText::from_escaped(raw.as_str())))?
                }
                XmlNode::CData(data) => {
                    writer.write_event(Event::CData(BytesCData::new(data.as_str())))?
                }
                XmlNode::Comment(raw) => {
                    writer.write_event(Event::Comment(BytesText::from_escaped(raw.as_str())))?
                }
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }

    /// Serializes the element without indentation.
    pub fn to_xml(&self) -> Result<String, IpxactError> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        into_string(writer.into_inner())
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, IpxactError> {
        let name = core::str::from_utf8(start.name().as_ref())?.to_string();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = core::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = core::str::from_utf8(&attr.value)?.to_string();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    fn push_raw_text(&mut self, raw: &str) {
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(raw);
        } else {
            self.children.push(XmlNode::Text(raw.to_string()));
        }
    }

    /// Drops whitespace-only text runs between child elements. Leaf elements
    /// keep their text as is.
    fn strip_layout_whitespace(&mut self) {
        if !self
            .children
            .iter()
            .any(|node| matches!(node, XmlNode::Element(_)))
        {
            return;
        }
        self.children
            .retain(|node| !matches!(node, XmlNode::Text(t) if t.trim().is_empty()));
    }
}

/// Parses a complete XML document into an element tree.
///
/// The XML declaration, processing instructions and the doctype are skipped.
/// Comments before the root element are returned separately; comments inside
/// elements stay in the tree.
pub fn parse_document(xml: &str) -> Result<ParsedDocument, IpxactError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;
    let mut leading_comments = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(XmlElement::from_start(&e)?),
            Event::Empty(e) => {
                let element = XmlElement::from_start(&e)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                if let Some(mut element) = stack.pop() {
                    element.strip_layout_whitespace();
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Text(e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push_raw_text(core::str::from_utf8(&e)?);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(parent) = stack.last_mut() {
                    let entity = core::str::from_utf8(&e)?;
                    parent.push_raw_text(&format!("&{};", entity));
                }
            }
            Event::CData(e) => {
                if let Some(parent) = stack.last_mut() {
                    let data = core::str::from_utf8(&e)?.to_string();
                    parent.children.push(XmlNode::CData(data));
                }
            }
            Event::Comment(e) => {
                let comment = core::str::from_utf8(&e)?.to_string();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(XmlNode::Comment(comment)),
                    None if root.is_none() => leading_comments.push(comment),
                    None => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(IpxactError::UnclosedElement(open.name.clone()));
    }

    let root = root.ok_or(IpxactError::EmptyDocument)?;
    Ok(ParsedDocument {
        root,
        leading_comments,
    })
}

/// Attaches a finished element to its parent, or makes it the root.
fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

/// Converts writer output into a `String`.
pub(crate) fn into_string(bytes: Vec<u8>) -> Result<String, IpxactError> {
    String::from_utf8(bytes).map_err(|e| IpxactError::Utf8(e.utf8_error()))
}
