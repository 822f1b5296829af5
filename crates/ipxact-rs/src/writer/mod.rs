// crates/ipxact-rs/src/writer/mod.rs

//! Serializes model entities into IP-XACT XML.
//!
//! Every entity has its own writer that hand-codes the element order the
//! schema prescribes for it; writers are composed, not derived from a common
//! base. Writers never validate: they emit what the model holds, skipping only
//! optional fields that are unset or empty. The only error they return is a
//! failure of the underlying sink.

pub mod component;
pub mod indirect_interface;
pub mod parameter;

use crate::error::IpxactError;
use crate::types::{Parameter, Revision, VendorExtension};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// The name-group fields shared by named entities.
pub(crate) struct NameGroup<'a> {
    pub name: &'a str,
    pub display_name: Option<&'a str>,
    pub short_description: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// Writes `<name>text</name>`, also when `text` is empty.
///
/// Only `<`, `>` and `&` are escaped in the text.
pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), IpxactError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    // An explicit (possibly empty) text event keeps the end tag on the same line
    // when the writer indents.
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Writes `<name>text</name>` only for a present, non-empty value.
pub(crate) fn write_non_empty_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: Option<&str>,
) -> Result<(), IpxactError> {
    match text {
        Some(text) if !text.is_empty() => write_text_element(writer, name, text),
        _ => Ok(()),
    }
}

/// Writes name, displayName, shortDescription (2022 only) and description.
pub(crate) fn write_name_group<W: Write>(
    writer: &mut Writer<W>,
    group: &NameGroup<'_>,
    revision: Revision,
) -> Result<(), IpxactError> {
    write_text_element(writer, "ipxact:name", group.name)?;
    write_non_empty_element(writer, "ipxact:displayName", group.display_name)?;
    if revision == Revision::Std22 {
        write_non_empty_element(writer, "ipxact:shortDescription", group.short_description)?;
    }
    write_non_empty_element(writer, "ipxact:description", group.description)
}

/// Writes an `<ipxact:parameters>` container. Nothing is written for an empty list.
pub fn write_parameters<W: Write>(
    writer: &mut Writer<W>,
    parameters: &[Parameter],
    revision: Revision,
) -> Result<(), IpxactError> {
    if parameters.is_empty() {
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new("ipxact:parameters")))?;
    for parameter in parameters {
        parameter::write_parameter(writer, parameter, revision)?;
    }
    writer.write_event(Event::End(BytesEnd::new("ipxact:parameters")))?;
    Ok(())
}

/// Writes an `<ipxact:vendorExtensions>` container with every extension
/// re-emitted verbatim. Nothing is written for an empty list.
pub fn write_vendor_extensions<W: Write>(
    writer: &mut Writer<W>,
    extensions: &[VendorExtension],
) -> Result<(), IpxactError> {
    if extensions.is_empty() {
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new("ipxact:vendorExtensions")))?;
    for extension in extensions {
        extension.element().write_to(writer)?;
    }
    writer.write_event(Event::End(BytesEnd::new("ipxact:vendorExtensions")))?;
    Ok(())
}
