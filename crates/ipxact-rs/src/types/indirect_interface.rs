// crates/ipxact-rs/src/types/indirect_interface.rs

use super::{Parameter, VendorExtension};
use serde::{Deserialize, Serialize};

/// Represents an `<ipxact:indirectInterface>` element: access to a target
/// through an address field and a data field instead of direct memory mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndirectInterface {
    /// `<ipxact:name>` (Mandatory)
    pub name: String,
    /// `<ipxact:displayName>`
    pub display_name: Option<String>,
    /// `<ipxact:shortDescription>` (1685-2022 only)
    pub short_description: Option<String>,
    /// `<ipxact:description>`
    pub description: Option<String>,
    /// `<ipxact:indirectAddressRef>`: id of the address field (Mandatory)
    pub indirect_address_ref: String,
    /// `<ipxact:indirectDataRef>`: id of the data field (Mandatory)
    pub indirect_data_ref: String,
    /// `<ipxact:memoryMapRef>`
    pub memory_map_ref: Option<String>,
    /// `<ipxact:bitsInLau>`, kept as a string to preserve expressions.
    pub bits_in_lau: Option<String>,
    /// `<ipxact:endianness>`: `"little"` or `"big"`.
    pub endianness: Option<String>,
    /// All `<ipxact:transparentBridge>` elements, in order.
    pub transparent_bridges: Vec<TransparentBridge>,
    /// `<ipxact:parameters>`
    pub parameters: Vec<Parameter>,
    /// `<ipxact:vendorExtensions>`
    pub vendor_extensions: Vec<VendorExtension>,
}

impl IndirectInterface {
    pub fn new(name: &str, indirect_address_ref: &str, indirect_data_ref: &str) -> Self {
        Self {
            name: name.into(),
            indirect_address_ref: indirect_address_ref.into(),
            indirect_data_ref: indirect_data_ref.into(),
            ..Default::default()
        }
    }
}

/// Represents an `<ipxact:transparentBridge>` element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransparentBridge {
    /// `@masterRef` (2014) / `@initiatorRef` (2022) (Mandatory)
    pub master_ref: String,
    /// `<ipxact:isPresent>` (1685-2014 only)
    pub is_present: Option<String>,
    /// `<ipxact:vendorExtensions>` (1685-2022 only)
    pub vendor_extensions: Vec<VendorExtension>,
}

impl TransparentBridge {
    pub fn new(master_ref: &str) -> Self {
        Self {
            master_ref: master_ref.into(),
            ..Default::default()
        }
    }
}
