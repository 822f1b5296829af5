// crates/ipxact-rs/src/reader/indirect_interface.rs

use super::{mandatory_text, optional_text, read_name_group, read_parameters, read_vendor_extensions};
use crate::error::IpxactError;
use crate::types::{IndirectInterface, Revision, TransparentBridge};
use crate::xml::XmlElement;
use log::{trace, warn};

/// Reads one `<ipxact:indirectInterface>` element.
///
/// Missing mandatory children read as empty strings. Bridges, parameters and
/// vendor extensions keep their document order.
pub fn read_indirect_interface(
    element: &XmlElement,
    revision: Revision,
) -> Result<IndirectInterface, IpxactError> {
    let group = read_name_group(element)?;
    trace!("Reading indirect interface '{}'", group.name);

    let transparent_bridges = element
        .children_named("ipxact:transparentBridge")
        .map(|bridge| read_transparent_bridge(bridge, revision))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(IndirectInterface {
        name: group.name,
        display_name: group.display_name,
        short_description: group.short_description,
        description: group.description,
        indirect_address_ref: mandatory_text(element, "ipxact:indirectAddressRef")?,
        indirect_data_ref: mandatory_text(element, "ipxact:indirectDataRef")?,
        memory_map_ref: optional_text(element, "ipxact:memoryMapRef")?,
        bits_in_lau: optional_text(element, "ipxact:bitsInLau")?,
        endianness: optional_text(element, "ipxact:endianness")?,
        transparent_bridges,
        parameters: read_parameters(element, revision)?,
        vendor_extensions: read_vendor_extensions(element),
    })
}

/// Reads one `<ipxact:transparentBridge>` element.
///
/// The interface reference is taken from the attribute of the given revision.
/// The attribute of the other revision is accepted as well, with a warning.
pub fn read_transparent_bridge(
    element: &XmlElement,
    revision: Revision,
) -> Result<TransparentBridge, IpxactError> {
    let (expected, other) = match revision {
        Revision::Std14 => ("masterRef", "initiatorRef"),
        Revision::Std22 => ("initiatorRef", "masterRef"),
    };

    let master_ref = match element.attribute(expected)? {
        Some(reference) => reference,
        None => match element.attribute(other)? {
            Some(reference) => {
                warn!(
                    "Transparent bridge uses '{}' instead of '{}'",
                    other, expected
                );
                reference
            }
            None => {
                warn!("Transparent bridge has no '{}'; using an empty value", expected);
                String::new()
            }
        },
    };

    Ok(TransparentBridge {
        master_ref,
        is_present: optional_text(element, "ipxact:isPresent")?,
        vendor_extensions: read_vendor_extensions(element),
    })
}
