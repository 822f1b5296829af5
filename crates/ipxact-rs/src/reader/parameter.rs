// crates/ipxact-rs/src/reader/parameter.rs

use super::{mandatory_text, read_name_group, read_vendor_extensions};
use crate::error::IpxactError;
use crate::types::{Parameter, Range, Revision};
use crate::xml::XmlElement;
use log::trace;
use quick_xml::escape::unescape;
use std::collections::BTreeMap;

/// Reads one `<ipxact:parameter>` element.
///
/// `parameterId` becomes the value id; every other attribute is kept by name.
pub fn read_parameter(element: &XmlElement, _revision: Revision) -> Result<Parameter, IpxactError> {
    let group = read_name_group(element)?;
    trace!("Reading parameter '{}'", group.name);

    let mut value_id = String::new();
    let mut attributes = BTreeMap::new();
    for (key, raw) in element.attributes() {
        let value = unescape(raw)?.into_owned();
        if key == "parameterId" {
            value_id = value;
        } else {
            attributes.insert(key.to_string(), value);
        }
    }

    Ok(Parameter {
        name: group.name,
        display_name: group.display_name,
        short_description: group.short_description,
        description: group.description,
        value: mandatory_text(element, "ipxact:value")?,
        value_id,
        attributes,
        vectors: read_ranges(element, "ipxact:vectors", "ipxact:vector")?,
        arrays: read_ranges(element, "ipxact:arrays", "ipxact:array")?,
        vendor_extensions: read_vendor_extensions(element),
    })
}

fn read_ranges(
    element: &XmlElement,
    container: &str,
    item: &str,
) -> Result<Vec<Range>, IpxactError> {
    let mut ranges = Vec::new();
    for range in element
        .children_named(container)
        .flat_map(|c| c.children_named(item))
    {
        ranges.push(Range {
            left: mandatory_text(range, "ipxact:left")?,
            right: mandatory_text(range, "ipxact:right")?,
        });
    }
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_parameter_attributes() {
        let xml = "<ipxact:parameter parameterId=\"id1\" type=\"shortint\" prompt=\"Parm &amp; 1\">\
                   <ipxact:name>firstParameter</ipxact:name>\
                   <ipxact:description>First bus interface parameter.</ipxact:description>\
                   <ipxact:value>5</ipxact:value>\
                   </ipxact:parameter>";
        let element = XmlElement::parse(xml).unwrap();

        let parameter = read_parameter(&element, Revision::Std14).unwrap();
        assert_eq!(parameter.name, "firstParameter");
        assert_eq!(parameter.value, "5");
        assert_eq!(parameter.value_id, "id1");
        assert_eq!(
            parameter.description.as_deref(),
            Some("First bus interface parameter.")
        );
        assert_eq!(parameter.attributes.len(), 2);
        assert_eq!(parameter.attributes["type"], "shortint");
        assert_eq!(parameter.attributes["prompt"], "Parm & 1");
    }

    #[test]
    fn test_read_parameter_vectors_and_arrays() {
        let xml = "<ipxact:parameter><ipxact:name>width</ipxact:name>\
                   <ipxact:vectors><ipxact:vector><ipxact:left>7</ipxact:left><ipxact:right>0</ipxact:right></ipxact:vector></ipxact:vectors>\
                   <ipxact:arrays><ipxact:array><ipxact:left>3</ipxact:left><ipxact:right>0</ipxact:right></ipxact:array></ipxact:arrays>\
                   <ipxact:value>8</ipxact:value></ipxact:parameter>";
        let element = XmlElement::parse(xml).unwrap();

        let parameter = read_parameter(&element, Revision::Std14).unwrap();
        assert_eq!(parameter.vectors, vec![Range::new("7", "0")]);
        assert_eq!(parameter.arrays, vec![Range::new("3", "0")]);
    }

    #[test]
    fn test_missing_value_reads_as_empty() {
        let element =
            XmlElement::parse("<ipxact:parameter><ipxact:name>p</ipxact:name></ipxact:parameter>")
                .unwrap();

        let parameter = read_parameter(&element, Revision::Std22).unwrap();
        assert_eq!(parameter.value, "");
        assert!(parameter.value_id.is_empty());
    }
}
