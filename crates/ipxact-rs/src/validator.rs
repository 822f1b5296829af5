// crates/ipxact-rs/src/validator.rs

//! Consistency checks for model entities.
//!
//! The writers emit whatever the model holds. These checks are run separately
//! (e.g. by an editor before saving or by `ipxact-fmt check`) and report every
//! finding instead of stopping at the first one.

use crate::types::{Component, IndirectInterface, Parameter, Revision};
use crate::xml::XmlElement;
use core::fmt;
use std::collections::BTreeSet;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The indirect interface has a blank name.
    MissingName,
    /// Two indirect interfaces of one component share a name.
    DuplicateInterfaceName(String),
    MissingAddressReference { interface: String },
    MissingDataReference { interface: String },
    /// Both a memory map reference and transparent bridges are set.
    MemoryMapAndBridges { interface: String },
    /// Neither a memory map reference nor transparent bridges are set.
    NoMemoryMapOrBridges { interface: String },
    InvalidEndianness { interface: String, value: String },
    InvalidBitsInLau { interface: String, value: String },
    MissingBridgeReference { interface: String },
    /// A bridge names a bus interface the component does not have.
    UnknownBridgeInterface { interface: String, bus_interface: String },
    /// A bridge names a bus interface that is not in master/initiator mode.
    NonInitiatorBridgeInterface { interface: String, bus_interface: String },
    /// The memory map reference names a map the component does not have.
    UnknownMemoryMap { interface: String, memory_map: String },
    MissingParameterName { owner: String },
    DuplicateParameterName { owner: String, parameter: String },
    MissingParameterValue { owner: String, parameter: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Invalid name specified for indirect interface"),
            Self::DuplicateInterfaceName(name) => {
                write!(f, "Indirect interface name '{}' is not unique", name)
            }
            Self::MissingAddressReference { interface } => write!(
                f,
                "No field specified for address in indirect interface '{}'",
                interface
            ),
            Self::MissingDataReference { interface } => write!(
                f,
                "No field specified for data in indirect interface '{}'",
                interface
            ),
            Self::MemoryMapAndBridges { interface } => write!(
                f,
                "Both memory map and transparent bridges defined for indirect interface '{}'",
                interface
            ),
            Self::NoMemoryMapOrBridges { interface } => write!(
                f,
                "No memory map or transparent bridges defined for indirect interface '{}'",
                interface
            ),
            Self::InvalidEndianness { interface, value } => write!(
                f,
                "Invalid endianness '{}' defined in indirect interface '{}'",
                value, interface
            ),
            Self::InvalidBitsInLau { interface, value } => write!(
                f,
                "Invalid bits in lau '{}' defined in indirect interface '{}'",
                value, interface
            ),
            Self::MissingBridgeReference { interface } => write!(
                f,
                "Transparent bridge without a bus interface reference in indirect interface '{}'",
                interface
            ),
            Self::UnknownBridgeInterface {
                interface,
                bus_interface,
            } => write!(
                f,
                "Transparent bridge references an invalid bus interface '{}' in indirect interface '{}'",
                bus_interface, interface
            ),
            Self::NonInitiatorBridgeInterface {
                interface,
                bus_interface,
            } => write!(
                f,
                "Transparent bridge references a non-initiator bus interface '{}' in indirect interface '{}'",
                bus_interface, interface
            ),
            Self::UnknownMemoryMap {
                interface,
                memory_map,
            } => write!(
                f,
                "Invalid memory map '{}' referenced in indirect interface '{}'",
                memory_map, interface
            ),
            Self::MissingParameterName { owner } => {
                write!(f, "Parameter without a name in {}", owner)
            }
            Self::DuplicateParameterName { owner, parameter } => write!(
                f,
                "Parameter name {} is not unique in {}",
                parameter, owner
            ),
            Self::MissingParameterValue { owner, parameter } => {
                write!(f, "Parameter {} in {} has no value", parameter, owner)
            }
        }
    }
}

/// Checks one indirect interface on its own.
///
/// References into the rest of the component (bus interfaces, memory maps) are
/// only checked by [`validate_component`].
pub fn validate_indirect_interface(
    interface: &IndirectInterface,
    _revision: Revision,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let name = interface.name.clone();

    if is_blank(&interface.name) {
        issues.push(ValidationIssue::MissingName);
    }
    if is_blank(&interface.indirect_address_ref) {
        issues.push(ValidationIssue::MissingAddressReference {
            interface: name.clone(),
        });
    }
    if is_blank(&interface.indirect_data_ref) {
        issues.push(ValidationIssue::MissingDataReference {
            interface: name.clone(),
        });
    }

    let has_memory_map = interface
        .memory_map_ref
        .as_deref()
        .is_some_and(|m| !is_blank(m));
    let has_bridges = !interface.transparent_bridges.is_empty();
    match (has_memory_map, has_bridges) {
        (true, true) => issues.push(ValidationIssue::MemoryMapAndBridges {
            interface: name.clone(),
        }),
        (false, false) => issues.push(ValidationIssue::NoMemoryMapOrBridges {
            interface: name.clone(),
        }),
        _ => {}
    }

    if let Some(endianness) = interface.endianness.as_deref() {
        if !endianness.is_empty() && endianness != "little" && endianness != "big" {
            issues.push(ValidationIssue::InvalidEndianness {
                interface: name.clone(),
                value: endianness.to_string(),
            });
        }
    }

    if let Some(bits) = interface.bits_in_lau.as_deref() {
        if !is_valid_bits_in_lau(bits) {
            issues.push(ValidationIssue::InvalidBitsInLau {
                interface: name.clone(),
                value: bits.to_string(),
            });
        }
    }

    for bridge in &interface.transparent_bridges {
        if is_blank(&bridge.master_ref) {
            issues.push(ValidationIssue::MissingBridgeReference {
                interface: name.clone(),
            });
        }
    }

    let owner = format!("indirect interface {}", name);
    issues.extend(validate_parameters(&interface.parameters, &owner));
    issues
}

/// Checks every indirect interface of a component, their references into the
/// component's bus interfaces and memory maps, and the component parameters.
pub fn validate_component(component: &Component) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let revision = component.revision;

    let mut seen = BTreeSet::new();
    for interface in &component.indirect_interfaces {
        if !interface.name.is_empty() && !seen.insert(interface.name.as_str()) {
            issues.push(ValidationIssue::DuplicateInterfaceName(
                interface.name.clone(),
            ));
        }

        issues.extend(validate_indirect_interface(interface, revision));
        issues.extend(check_references(component, interface));
    }

    issues.extend(validate_parameters(
        &component.parameters,
        &format!("component {}", component.vlnv),
    ));
    issues
}

/// Checks bridge and memory map references against the opaque component content.
fn check_references(component: &Component, interface: &IndirectInterface) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let bus_interfaces: Vec<&XmlElement> = component
        .other_elements
        .iter()
        .filter(|e| e.name() == "ipxact:busInterfaces")
        .flat_map(|e| e.children_named("ipxact:busInterface"))
        .collect();

    let initiator_mode = match component.revision {
        Revision::Std14 => "ipxact:master",
        Revision::Std22 => "ipxact:initiator",
    };

    for bridge in &interface.transparent_bridges {
        if is_blank(&bridge.master_ref) {
            continue;
        }
        match bus_interfaces
            .iter()
            .find(|bus| element_name(bus) == bridge.master_ref)
        {
            None => issues.push(ValidationIssue::UnknownBridgeInterface {
                interface: interface.name.clone(),
                bus_interface: bridge.master_ref.clone(),
            }),
            Some(bus) if bus.first_child(initiator_mode).is_none() => {
                issues.push(ValidationIssue::NonInitiatorBridgeInterface {
                    interface: interface.name.clone(),
                    bus_interface: bridge.master_ref.clone(),
                })
            }
            Some(_) => {}
        }
    }

    if let Some(memory_map) = interface.memory_map_ref.as_deref().filter(|m| !is_blank(m)) {
        let known = component
            .other_elements
            .iter()
            .filter(|e| e.name() == "ipxact:memoryMaps")
            .flat_map(|e| e.children_named("ipxact:memoryMap"))
            .any(|map| element_name(map) == memory_map);
        if !known {
            issues.push(ValidationIssue::UnknownMemoryMap {
                interface: interface.name.clone(),
                memory_map: memory_map.to_string(),
            });
        }
    }

    issues
}

fn validate_parameters(parameters: &[Parameter], owner: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut names = BTreeSet::new();

    for parameter in parameters {
        if is_blank(&parameter.name) {
            issues.push(ValidationIssue::MissingParameterName {
                owner: owner.to_string(),
            });
        } else if !names.insert(parameter.name.as_str()) {
            issues.push(ValidationIssue::DuplicateParameterName {
                owner: owner.to_string(),
                parameter: parameter.name.clone(),
            });
        }

        if is_blank(&parameter.value) {
            issues.push(ValidationIssue::MissingParameterValue {
                owner: owner.to_string(),
                parameter: parameter.name.clone(),
            });
        }
    }
    issues
}

/// Rejects blank values and plain negative numbers. Expressions are not evaluated.
fn is_valid_bits_in_lau(bits: &str) -> bool {
    let bits = bits.trim();
    !bits.is_empty() && !bits.parse::<i64>().is_ok_and(|value| value < 0)
}

/// The `<ipxact:name>` of an opaque element, or `""` when it has none.
fn element_name(element: &XmlElement) -> String {
    element
        .child_text("ipxact:name")
        .ok()
        .flatten()
        .unwrap_or_default()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
