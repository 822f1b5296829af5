// crates/ipxact-rs/src/writer/parameter.rs

use super::{NameGroup, write_name_group, write_text_element, write_vendor_extensions};
use crate::error::IpxactError;
use crate::types::{Parameter, Range, Revision};
use log::trace;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::collections::BTreeMap;
use std::io::Write;

/// Writes one `<ipxact:parameter>` element.
///
/// Attributes come first in key order, with `parameterId` merged in when the
/// value id is set. Children follow the schema: name group, vectors, arrays,
/// value, vendor extensions.
pub fn write_parameter<W: Write>(
    writer: &mut Writer<W>,
    parameter: &Parameter,
    revision: Revision,
) -> Result<(), IpxactError> {
    trace!("Writing parameter '{}'", parameter.name);

    let start = BytesStart::new("ipxact:parameter").with_attributes(parameter_attributes(parameter));
    writer.write_event(Event::Start(start))?;

    let group = NameGroup {
        name: &parameter.name,
        display_name: parameter.display_name.as_deref(),
        short_description: parameter.short_description.as_deref(),
        description: parameter.description.as_deref(),
    };
    write_name_group(writer, &group, revision)?;

    write_ranges(writer, "ipxact:vectors", "ipxact:vector", &parameter.vectors)?;
    write_ranges(writer, "ipxact:arrays", "ipxact:array", &parameter.arrays)?;

    write_text_element(writer, "ipxact:value", &parameter.value)?;

    write_vendor_extensions(writer, &parameter.vendor_extensions)?;

    writer.write_event(Event::End(BytesEnd::new("ipxact:parameter")))?;
    Ok(())
}

/// Collects the attributes to write, sorted by name.
fn parameter_attributes(parameter: &Parameter) -> BTreeMap<&str, &str> {
    let mut attributes: BTreeMap<&str, &str> = parameter
        .attributes
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    if !parameter.value_id.is_empty() {
        attributes.insert("parameterId", parameter.value_id.as_str());
    }
    attributes
}

/// Writes a `vectors`/`arrays` style container of `left`/`right` pairs.
fn write_ranges<W: Write>(
    writer: &mut Writer<W>,
    container: &str,
    item: &str,
    ranges: &[Range],
) -> Result<(), IpxactError> {
    if ranges.is_empty() {
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(container)))?;
    for range in ranges {
        writer.write_event(Event::Start(BytesStart::new(item)))?;
        write_text_element(writer, "ipxact:left", &range.left)?;
        write_text_element(writer, "ipxact:right", &range.right)?;
        writer.write_event(Event::End(BytesEnd::new(item)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(container)))?;
    Ok(())
}
