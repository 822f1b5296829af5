// src/lib.rs

#![doc = "Reads and writes IP-XACT (IEEE 1685-2014 / 1685-2022) XML documents."]
#![doc = ""]
#![doc = "The crate maps a typed object model of a component and its indirect"]
#![doc = "interfaces to the canonical XML form and back. Content the model does not"]
#![doc = "cover (bus interfaces, memory maps, vendor extensions) is kept as an opaque"]
#![doc = "element tree and written back unchanged."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_component_from_str`: Parsing a component document into a `Component`."]
#![doc = "- `save_component_to_string`: Serializing a `Component` into a canonical document."]
#![doc = "- `write_*` / `read_*`: Per-entity writers and readers for embedding in other documents."]
#![doc = "- `validate_component`: Consistency checks the writers deliberately skip."]

// --- Crate Modules ---

mod error;
pub mod reader;
mod types;
mod validator;
pub mod writer;
mod xml;

// --- Public API Re-exports ---

pub use error::IpxactError;
pub use reader::component::{load_component_from_str, read_component};
pub use reader::indirect_interface::{read_indirect_interface, read_transparent_bridge};
pub use reader::parameter::read_parameter;
pub use reader::{read_parameters, read_vendor_extensions};
pub use types::{
    Component, IndirectInterface, InnerComment, NamespaceDeclaration, Parameter, Range,
    Revision, TransparentBridge, VendorExtension, Vlnv,
};
pub use validator::{ValidationIssue, validate_component, validate_indirect_interface};
pub use writer::component::{save_component_to_string, write_component};
pub use writer::indirect_interface::{write_indirect_interface, write_transparent_bridge};
pub use writer::parameter::write_parameter;
pub use writer::{write_parameters, write_vendor_extensions};
pub use xml::{ParsedDocument, XmlElement, XmlNode, parse_document};
