// crates/ipxact-rs/src/types/component.rs

use super::{IndirectInterface, NamespaceDeclaration, Parameter, Revision, VendorExtension, Vlnv};
use crate::xml::XmlElement;
use serde::{Deserialize, Serialize};

const KACTUS2_PREFIX: &str = "kactus2";
const KACTUS2_URI: &str = "http://kactus2.cs.tut.fi";

/// Represents an `<ipxact:component>` document.
///
/// Only the parts of the component this crate understands are modelled; every
/// other child of the root (bus interfaces, memory maps, file sets, ...) is kept
/// in `other_elements` and written back unchanged in its schema position.
/// Root attributes and comments between the root children are kept as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// The standard revision the document follows.
    pub revision: Revision,
    /// `<ipxact:vendor>`, `<ipxact:library>`, `<ipxact:name>`, `<ipxact:version>`
    pub vlnv: Vlnv,
    /// `<ipxact:displayName>` (1685-2022 only)
    pub display_name: Option<String>,
    /// `<ipxact:shortDescription>` (1685-2022 only)
    pub short_description: Option<String>,
    /// `<ipxact:description>`
    pub description: Option<String>,
    /// `<ipxact:indirectInterfaces>`
    pub indirect_interfaces: Vec<IndirectInterface>,
    /// `<ipxact:parameters>`
    pub parameters: Vec<Parameter>,
    /// `<ipxact:vendorExtensions>`
    pub vendor_extensions: Vec<VendorExtension>,
    /// Extra `xmlns:*` declarations on the root element.
    pub namespaces: Vec<NamespaceDeclaration>,
    /// Comments placed before the root element.
    pub top_comments: Vec<String>,
    /// Root children without a model of their own, in document order.
    pub other_elements: Vec<XmlElement>,
    /// Root attributes other than namespace declarations and
    /// `xsi:schemaLocation`, as `(qualified name, unescaped value)`.
    pub root_attributes: Vec<(String, String)>,
    /// Comments between the children of the root element.
    pub inner_comments: Vec<InnerComment>,
}

/// A comment inside `<ipxact:component>`, anchored to the child it precedes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InnerComment {
    /// Name of the next root child; `None` when nothing follows the comment.
    pub before: Option<String>,
    /// Comment text without the `<!--` and `-->` delimiters.
    pub text: String,
}

impl InnerComment {
    pub fn new(before: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            before: before.map(str::to_string),
            text: text.into(),
        }
    }
}

impl Component {
    /// Creates an empty component that declares the Kactus2 extension namespace.
    pub fn new(vlnv: Vlnv, revision: Revision) -> Self {
        Self {
            revision,
            vlnv,
            display_name: None,
            short_description: None,
            description: None,
            indirect_interfaces: Vec::new(),
            parameters: Vec::new(),
            vendor_extensions: Vec::new(),
            namespaces: vec![NamespaceDeclaration::new(KACTUS2_PREFIX, KACTUS2_URI)],
            top_comments: Vec::new(),
            other_elements: Vec::new(),
            root_attributes: Vec::new(),
            inner_comments: Vec::new(),
        }
    }

    /// Finds an indirect interface by name.
    pub fn indirect_interface(&self, name: &str) -> Option<&IndirectInterface> {
        self.indirect_interfaces.iter().find(|i| i.name == name)
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::new(Vlnv::default(), Revision::default())
    }
}
