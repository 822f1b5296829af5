// crates/ipxact-rs/src/reader/mod.rs

//! Rebuilds model entities from a parsed XML tree.
//!
//! Readers are tolerant: a missing mandatory child becomes an empty string and
//! a warning, so a half-finished document can still be loaded and fixed. Only
//! malformed content (broken escapes, invalid UTF-8) or a document that is not
//! an IP-XACT component is reported as an error.

pub mod component;
pub mod indirect_interface;
pub mod parameter;

use crate::error::IpxactError;
use crate::types::{Parameter, Revision, VendorExtension};
use crate::xml::XmlElement;
use log::warn;

/// The name-group fields read from an element.
#[derive(Debug, Default)]
pub(crate) struct NameGroupFields {
    pub name: String,
    pub display_name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
}

/// Reads the text of a required child; a missing child yields `""` and a warning.
pub(crate) fn mandatory_text(element: &XmlElement, child: &str) -> Result<String, IpxactError> {
    match element.child_text(child)? {
        Some(text) => Ok(text),
        None => {
            warn!(
                "<{}> has no <{}>; using an empty value",
                element.name(),
                child
            );
            Ok(String::new())
        }
    }
}

/// Reads the text of an optional child. An absent or empty child is `None`.
pub(crate) fn optional_text(
    element: &XmlElement,
    child: &str,
) -> Result<Option<String>, IpxactError> {
    Ok(element.child_text(child)?.filter(|text| !text.is_empty()))
}

pub(crate) fn read_name_group(element: &XmlElement) -> Result<NameGroupFields, IpxactError> {
    Ok(NameGroupFields {
        name: mandatory_text(element, "ipxact:name")?,
        display_name: optional_text(element, "ipxact:displayName")?,
        short_description: optional_text(element, "ipxact:shortDescription")?,
        description: optional_text(element, "ipxact:description")?,
    })
}

/// Reads every `<ipxact:parameter>` inside the `<ipxact:parameters>` child of
/// `owner`, in document order.
pub fn read_parameters(owner: &XmlElement, revision: Revision) -> Result<Vec<Parameter>, IpxactError> {
    owner
        .children_named("ipxact:parameters")
        .flat_map(|container| container.children_named("ipxact:parameter"))
        .map(|element| parameter::read_parameter(element, revision))
        .collect()
}

/// Collects the element children of the `<ipxact:vendorExtensions>` child of
/// `owner` without interpreting them.
pub fn read_vendor_extensions(owner: &XmlElement) -> Vec<VendorExtension> {
    owner
        .children_named("ipxact:vendorExtensions")
        .flat_map(XmlElement::child_elements)
        .cloned()
        .map(VendorExtension::new)
        .collect()
}
