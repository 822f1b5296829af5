// crates/ipxact-rs/src/writer/component.rs

//! Writes a complete `<ipxact:component>` document.
//!
//! The component model only covers part of the schema. Its children are
//! emitted by walking the schema order of the revision: modelled slots are
//! written from the model, every other slot re-emits the matching opaque
//! elements kept in `Component::other_elements`.

use super::indirect_interface::write_indirect_interface;
use super::{write_non_empty_element, write_parameters, write_text_element, write_vendor_extensions};
use crate::error::IpxactError;
use crate::types::{Component, Revision};
use crate::xml::{XmlElement, into_string};
use log::{debug, warn};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Child order of `ipxact:component` in IEEE 1685-2014.
pub(crate) const COMPONENT_ORDER_2014: &[&str] = &[
    "ipxact:vendor",
    "ipxact:library",
    "ipxact:name",
    "ipxact:version",
    "ipxact:busInterfaces",
    "ipxact:indirectInterfaces",
    "ipxact:channels",
    "ipxact:remapStates",
    "ipxact:addressSpaces",
    "ipxact:memoryMaps",
    "ipxact:model",
    "ipxact:componentGenerators",
    "ipxact:choices",
    "ipxact:fileSets",
    "ipxact:whiteboxElements",
    "ipxact:cpus",
    "ipxact:otherClockDrivers",
    "ipxact:resetTypes",
    "ipxact:description",
    "ipxact:parameters",
    "ipxact:assertions",
    "ipxact:vendorExtensions",
];

/// Child order of `ipxact:component` in IEEE 1685-2022.
pub(crate) const COMPONENT_ORDER_2022: &[&str] = &[
    "ipxact:vendor",
    "ipxact:library",
    "ipxact:name",
    "ipxact:version",
    "ipxact:displayName",
    "ipxact:shortDescription",
    "ipxact:description",
    "ipxact:typeIdentifier",
    "ipxact:powerDomains",
    "ipxact:busInterfaces",
    "ipxact:indirectInterfaces",
    "ipxact:channels",
    "ipxact:modes",
    "ipxact:addressSpaces",
    "ipxact:memoryMaps",
    "ipxact:model",
    "ipxact:componentGenerators",
    "ipxact:choices",
    "ipxact:fileSets",
    "ipxact:whiteboxElements",
    "ipxact:cpus",
    "ipxact:otherClockDrivers",
    "ipxact:resetTypes",
    "ipxact:parameters",
    "ipxact:assertions",
    "ipxact:vendorExtensions",
];

/// Root children that have a place in the component model.
pub(crate) const MODELLED_ELEMENTS: &[&str] = &[
    "ipxact:vendor",
    "ipxact:library",
    "ipxact:name",
    "ipxact:version",
    "ipxact:displayName",
    "ipxact:shortDescription",
    "ipxact:description",
    "ipxact:indirectInterfaces",
    "ipxact:parameters",
    "ipxact:vendorExtensions",
];

/// The schema order of component children for `revision`.
pub(crate) fn component_order(revision: Revision) -> &'static [&'static str] {
    match revision {
        Revision::Std14 => COMPONENT_ORDER_2014,
        Revision::Std22 => COMPONENT_ORDER_2022,
    }
}

/// Serializes a component into a complete document string.
///
/// The output starts with the XML declaration, followed by the component's
/// top comments and the tab-indented `<ipxact:component>` element, and ends
/// with a newline.
pub fn save_component_to_string(component: &Component) -> Result<String, IpxactError> {
    debug!(
        "Saving component {} ({:?})",
        component.vlnv, component.revision
    );

    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    for comment in &component.top_comments {
        write_comment(&mut writer, comment)?;
    }

    write_component(&mut writer, component)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    into_string(bytes)
}

/// Writes the `<ipxact:component>` element and all of its children.
pub fn write_component<W: Write>(
    writer: &mut Writer<W>,
    component: &Component,
) -> Result<(), IpxactError> {
    let revision = component.revision;
    let order = component_order(revision);

    // --- Root element ---
    let mut start = BytesStart::new("ipxact:component");
    start.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    start.push_attribute(("xmlns:ipxact", revision.namespace_uri()));
    for namespace in &component.namespaces {
        let key = format!("xmlns:{}", namespace.prefix);
        start.push_attribute((key.as_str(), namespace.uri.as_str()));
    }
    let schema_location = revision.schema_location();
    start.push_attribute(("xsi:schemaLocation", schema_location.as_str()));
    for (key, value) in &component.root_attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    if revision == Revision::Std14
        && (has_text(&component.display_name) || has_text(&component.short_description))
    {
        warn!(
            "Component {}: displayName and shortDescription are not part of IP-XACT 2014 and are not written",
            component.vlnv
        );
    }

    // --- Children in schema order ---
    for &slot in order {
        if slot != "ipxact:vendorExtensions" {
            write_comments(writer, component, Some(slot))?;
        }
        match slot {
            "ipxact:vendor" => write_text_element(writer, slot, &component.vlnv.vendor)?,
            "ipxact:library" => write_text_element(writer, slot, &component.vlnv.library)?,
            "ipxact:name" => write_text_element(writer, slot, &component.vlnv.name)?,
            "ipxact:version" => write_text_element(writer, slot, &component.vlnv.version)?,
            "ipxact:displayName" => {
                write_non_empty_element(writer, slot, component.display_name.as_deref())?
            }
            "ipxact:shortDescription" => {
                write_non_empty_element(writer, slot, component.short_description.as_deref())?
            }
            "ipxact:description" => {
                write_non_empty_element(writer, slot, component.description.as_deref())?
            }
            "ipxact:indirectInterfaces" => write_indirect_interfaces(writer, component)?,
            "ipxact:parameters" => write_parameters(writer, &component.parameters, revision)?,
            "ipxact:vendorExtensions" => {
                write_unplaced_elements(writer, component, order)?;
                write_comments(writer, component, Some(slot))?;
                write_vendor_extensions(writer, &component.vendor_extensions)?;
            }
            _ => {
                for element in component.other_elements.iter().filter(|e| e.name() == slot) {
                    element.write_to(writer)?;
                }
            }
        }
    }
    write_comments(writer, component, None)?;

    writer.write_event(Event::End(BytesEnd::new("ipxact:component")))?;
    Ok(())
}

fn write_indirect_interfaces<W: Write>(
    writer: &mut Writer<W>,
    component: &Component,
) -> Result<(), IpxactError> {
    if component.indirect_interfaces.is_empty() {
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new("ipxact:indirectInterfaces")))?;
    for interface in &component.indirect_interfaces {
        write_indirect_interface(writer, interface, component.revision)?;
    }
    writer.write_event(Event::End(BytesEnd::new("ipxact:indirectInterfaces")))?;
    Ok(())
}

/// Writes opaque elements that have no slot in the schema order, in their
/// stored order, each group preceded by the comments anchored to it. Comments
/// anchored to an element that is not written at all end up here as well.
fn write_unplaced_elements<W: Write>(
    writer: &mut Writer<W>,
    component: &Component,
    order: &[&str],
) -> Result<(), IpxactError> {
    let mut written: Vec<&str> = Vec::new();
    for element in component
        .other_elements
        .iter()
        .filter(|e| !is_passthrough_slot(e, order))
    {
        warn!(
            "Component {}: element <{}> has no place in the schema order and is written before vendorExtensions",
            component.vlnv,
            element.name()
        );
        if !written.contains(&element.name()) {
            write_comments(writer, component, Some(element.name()))?;
            written.push(element.name());
        }
        element.write_to(writer)?;
    }

    for comment in &component.inner_comments {
        let Some(anchor) = comment.before.as_deref() else {
            continue;
        };
        if !order.contains(&anchor) && !written.contains(&anchor) {
            write_comment(writer, &comment.text)?;
        }
    }
    Ok(())
}

/// Writes the inner comments anchored to `anchor`, in stored order.
fn write_comments<W: Write>(
    writer: &mut Writer<W>,
    component: &Component,
    anchor: Option<&str>,
) -> Result<(), IpxactError> {
    for comment in component
        .inner_comments
        .iter()
        .filter(|c| c.before.as_deref() == anchor)
    {
        write_comment(writer, &comment.text)?;
    }
    Ok(())
}

fn write_comment<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<(), IpxactError> {
    writer.write_event(Event::Comment(BytesText::from_escaped(text)))?;
    Ok(())
}

fn is_passthrough_slot(element: &XmlElement, order: &[&str]) -> bool {
    order.contains(&element.name()) && !MODELLED_ELEMENTS.contains(&element.name())
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
