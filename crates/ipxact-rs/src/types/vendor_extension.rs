// crates/ipxact-rs/src/types/vendor_extension.rs

use crate::xml::XmlElement;
use serde::{Deserialize, Serialize};

/// One element inside an `<ipxact:vendorExtensions>` container.
///
/// The content is not interpreted: it is kept as an element tree and written
/// back exactly as it was read or built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VendorExtension {
    element: XmlElement,
}

impl VendorExtension {
    pub fn new(element: XmlElement) -> Self {
        Self { element }
    }

    /// Shorthand for an extension of the form `<name>value</name>`.
    pub fn with_text(name: &str, value: &str) -> Self {
        Self::new(XmlElement::new(name).with_text(value))
    }

    /// The qualified name of the extension element.
    pub fn name(&self) -> &str {
        self.element.name()
    }

    pub fn element(&self) -> &XmlElement {
        &self.element
    }

    pub fn into_element(self) -> XmlElement {
        self.element
    }
}

impl From<XmlElement> for VendorExtension {
    fn from(element: XmlElement) -> Self {
        Self::new(element)
    }
}
