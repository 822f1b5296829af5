// crates/ipxact-rs/src/writer/indirect_interface.rs

use super::{
    NameGroup, write_name_group, write_non_empty_element, write_parameters, write_text_element,
    write_vendor_extensions,
};
use crate::error::IpxactError;
use crate::types::{IndirectInterface, Revision, TransparentBridge, VendorExtension};
use log::{trace, warn};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::io::Write;

/// Writes one `<ipxact:indirectInterface>` element.
///
/// The element order is fixed: name group, indirectAddressRef,
/// indirectDataRef, memoryMapRef, bitsInLau, endianness, transparent bridges,
/// parameters, vendor extensions. The mandatory children are always written,
/// even when empty. The writer does not check that the interface routes through
/// exactly one of a memory map or bridges.
pub fn write_indirect_interface<W: Write>(
    writer: &mut Writer<W>,
    interface: &IndirectInterface,
    revision: Revision,
) -> Result<(), IpxactError> {
    trace!("Writing indirect interface '{}'", interface.name);

    writer.write_event(Event::Start(BytesStart::new("ipxact:indirectInterface")))?;

    let group = NameGroup {
        name: &interface.name,
        display_name: interface.display_name.as_deref(),
        short_description: interface.short_description.as_deref(),
        description: interface.description.as_deref(),
    };
    write_name_group(writer, &group, revision)?;

    write_text_element(writer, "ipxact:indirectAddressRef", &interface.indirect_address_ref)?;
    write_text_element(writer, "ipxact:indirectDataRef", &interface.indirect_data_ref)?;

    write_non_empty_element(writer, "ipxact:memoryMapRef", interface.memory_map_ref.as_deref())?;
    write_non_empty_element(writer, "ipxact:bitsInLau", interface.bits_in_lau.as_deref())?;
    write_non_empty_element(writer, "ipxact:endianness", interface.endianness.as_deref())?;

    for bridge in &interface.transparent_bridges {
        write_transparent_bridge(writer, bridge, revision)?;
    }

    write_parameters(writer, &interface.parameters, revision)?;

    write_vendor_extensions(writer, &interface.vendor_extensions)?;

    writer.write_event(Event::End(BytesEnd::new("ipxact:indirectInterface")))?;
    Ok(())
}

/// Writes one `<ipxact:transparentBridge>` element.
///
/// The interface reference is an attribute (`masterRef` in 2014,
/// `initiatorRef` in 2022). In 2014 a set presence condition is a nested
/// `<ipxact:isPresent>` element; in 2022 the bridge carries vendor extensions
/// instead.
pub fn write_transparent_bridge<W: Write>(
    writer: &mut Writer<W>,
    bridge: &TransparentBridge,
    revision: Revision,
) -> Result<(), IpxactError> {
    let reference_attribute = match revision {
        Revision::Std14 => "masterRef",
        Revision::Std22 => "initiatorRef",
    };

    let is_present = bridge.is_present.as_deref().filter(|p| !p.is_empty());
    let (is_present, extensions): (Option<&str>, &[VendorExtension]) = match revision {
        Revision::Std14 => (is_present, &[]),
        Revision::Std22 => (None, &bridge.vendor_extensions),
    };

    if revision == Revision::Std14 && !bridge.vendor_extensions.is_empty() {
        warn!(
            "Transparent bridge '{}': vendor extensions are not part of IP-XACT 2014 and are not written",
            bridge.master_ref
        );
    }
    if revision == Revision::Std22 && bridge.is_present.is_some() {
        warn!(
            "Transparent bridge '{}': isPresent is not part of IP-XACT 2022 and is not written",
            bridge.master_ref
        );
    }

    let start = BytesStart::new("ipxact:transparentBridge")
        .with_attributes([(reference_attribute, bridge.master_ref.as_str())]);

    if is_present.is_none() && extensions.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(is_present) = is_present {
        write_text_element(writer, "ipxact:isPresent", is_present)?;
    }
    write_vendor_extensions(writer, extensions)?;
    writer.write_event(Event::End(BytesEnd::new("ipxact:transparentBridge")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Parameter, VendorExtension};
    use crate::writer::test_utils::write_compact;

    fn test_interface() -> IndirectInterface {
        IndirectInterface {
            display_name: Some("testDisplay".to_string()),
            description: Some("testDescription".to_string()),
            memory_map_ref: Some("targetMap".to_string()),
            ..IndirectInterface::new("interface1", "addressId", "dataId")
        }
    }

    #[test]
    fn test_write_simple_indirect_interface() {
        let output = write_compact(|w| write_indirect_interface(w, &test_interface(), Revision::Std14));

        assert_eq!(
            output,
            "<ipxact:indirectInterface>\
             <ipxact:name>interface1</ipxact:name>\
             <ipxact:displayName>testDisplay</ipxact:displayName>\
             <ipxact:description>testDescription</ipxact:description>\
             <ipxact:indirectAddressRef>addressId</ipxact:indirectAddressRef>\
             <ipxact:indirectDataRef>dataId</ipxact:indirectDataRef>\
             <ipxact:memoryMapRef>targetMap</ipxact:memoryMapRef>\
             </ipxact:indirectInterface>"
        );
    }

    #[test]
    fn test_write_bits_in_lau_and_endianness() {
        let interface = IndirectInterface {
            bits_in_lau: Some("16".to_string()),
            endianness: Some("big".to_string()),
            ..test_interface()
        };

        let output = write_compact(|w| write_indirect_interface(w, &interface, Revision::Std14));

        assert_eq!(
            output,
            "<ipxact:indirectInterface>\
             <ipxact:name>interface1</ipxact:name>\
             <ipxact:displayName>testDisplay</ipxact:displayName>\
             <ipxact:description>testDescription</ipxact:description>\
             <ipxact:indirectAddressRef>addressId</ipxact:indirectAddressRef>\
             <ipxact:indirectDataRef>dataId</ipxact:indirectDataRef>\
             <ipxact:memoryMapRef>targetMap</ipxact:memoryMapRef>\
             <ipxact:bitsInLau>16</ipxact:bitsInLau>\
             <ipxact:endianness>big</ipxact:endianness>\
             </ipxact:indirectInterface>"
        );
    }

    #[test]
    fn test_write_transparent_bridges() {
        let mut interface = IndirectInterface::new("interface", "addressId", "dataId");
        interface
            .transparent_bridges
            .push(TransparentBridge::new("master1"));
        interface.transparent_bridges.push(TransparentBridge {
            is_present: Some("true".to_string()),
            ..TransparentBridge::new("master2")
        });

        let output = write_compact(|w| write_indirect_interface(w, &interface, Revision::Std14));

        assert_eq!(
            output,
            "<ipxact:indirectInterface>\
             <ipxact:name>interface</ipxact:name>\
             <ipxact:indirectAddressRef>addressId</ipxact:indirectAddressRef>\
             <ipxact:indirectDataRef>dataId</ipxact:indirectDataRef>\
             <ipxact:transparentBridge masterRef=\"master1\"/>\
             <ipxact:transparentBridge masterRef=\"master2\">\
             <ipxact:isPresent>true</ipxact:isPresent>\
             </ipxact:transparentBridge>\
             </ipxact:indirectInterface>"
        );
    }

    #[test]
    fn test_write_transparent_bridges_2022() {
        let bridge = TransparentBridge {
            is_present: Some("true".to_string()),
            vendor_extensions: vec![VendorExtension::with_text("testExtension", "testValue")],
            ..TransparentBridge::new("initiatorBus")
        };

        let output = write_compact(|w| write_transparent_bridge(w, &bridge, Revision::Std22));

        assert_eq!(
            output,
            "<ipxact:transparentBridge initiatorRef=\"initiatorBus\">\
             <ipxact:vendorExtensions><testExtension>testValue</testExtension></ipxact:vendorExtensions>\
             </ipxact:transparentBridge>"
        );
    }

    #[test]
    fn test_write_parameters() {
        let mut interface = IndirectInterface::new("interface", "addressId", "dataId");
        interface
            .parameters
            .push(Parameter::new("testParameter", "testValue"));

        let output = write_compact(|w| write_indirect_interface(w, &interface, Revision::Std14));

        assert_eq!(
            output,
            "<ipxact:indirectInterface>\
             <ipxact:name>interface</ipxact:name>\
             <ipxact:indirectAddressRef>addressId</ipxact:indirectAddressRef>\
             <ipxact:indirectDataRef>dataId</ipxact:indirectDataRef>\
             <ipxact:parameters>\
             <ipxact:parameter>\
             <ipxact:name>testParameter</ipxact:name>\
             <ipxact:value>testValue</ipxact:value>\
             </ipxact:parameter>\
             </ipxact:parameters>\
             </ipxact:indirectInterface>"
        );
    }

    #[test]
    fn test_write_vendor_extensions() {
        let mut interface = IndirectInterface::new("interface", "addressId", "dataId");
        interface
            .vendor_extensions
            .push(VendorExtension::with_text("testExtension", "testValue"));

        let output = write_compact(|w| write_indirect_interface(w, &interface, Revision::Std14));

        assert_eq!(
            output,
            "<ipxact:indirectInterface>\
             <ipxact:name>interface</ipxact:name>\
             <ipxact:indirectAddressRef>addressId</ipxact:indirectAddressRef>\
             <ipxact:indirectDataRef>dataId</ipxact:indirectDataRef>\
             <ipxact:vendorExtensions>\
             <testExtension>testValue</testExtension>\
             </ipxact:vendorExtensions>\
             </ipxact:indirectInterface>"
        );
    }

    #[test]
    fn test_memory_map_and_bridges_are_both_written() {
        let mut interface = test_interface();
        interface
            .transparent_bridges
            .push(TransparentBridge::new("master1"));

        let output = write_compact(|w| write_indirect_interface(w, &interface, Revision::Std14));

        let map = output.find("<ipxact:memoryMapRef>").unwrap();
        let bridge = output.find("<ipxact:transparentBridge").unwrap();
        assert!(map < bridge);
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut writer = Writer::new(FullDisk);

        let error = write_indirect_interface(&mut writer, &test_interface(), Revision::Std14)
            .unwrap_err();
        assert!(error.to_string().contains("disk full"));
    }

    #[test]
    fn test_empty_mandatory_fields_produce_empty_elements() {
        let interface = IndirectInterface::default();

        let output = write_compact(|w| write_indirect_interface(w, &interface, Revision::Std14));

        assert_eq!(
            output,
            "<ipxact:indirectInterface>\
             <ipxact:name></ipxact:name>\
             <ipxact:indirectAddressRef></ipxact:indirectAddressRef>\
             <ipxact:indirectDataRef></ipxact:indirectDataRef>\
             </ipxact:indirectInterface>"
        );
    }
}
