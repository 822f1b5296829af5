// crates/ipxact-rs/src/types/parameter.rs

use super::VendorExtension;
use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Represents an `<ipxact:parameter>` element.
///
/// Values and bounds are kept as strings so that expressions (e.g.
/// `"WIDTH-1"` or `"'h10"`) survive a round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parameter {
    /// `<ipxact:name>`
    pub name: String,
    /// `<ipxact:displayName>`
    pub display_name: Option<String>,
    /// `<ipxact:shortDescription>` (1685-2022 only)
    pub short_description: Option<String>,
    /// `<ipxact:description>`
    pub description: Option<String>,
    /// `<ipxact:value>`
    pub value: String,
    /// `@parameterId`. Empty means "no id" and is not written.
    pub value_id: String,
    /// Every other attribute of the element (`type`, `resolve`, `prompt`,
    /// `minimum`, `maximum`, `choiceRef`, ...). Written in key order.
    pub attributes: BTreeMap<String, String>,
    /// `<ipxact:vectors>`
    pub vectors: Vec<Range>,
    /// `<ipxact:arrays>`
    pub arrays: Vec<Range>,
    /// `<ipxact:vendorExtensions>`
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Parameter {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}

/// A `left`/`right` bound pair, as used by `<ipxact:vector>` and `<ipxact:array>`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Range {
    pub left: String,
    pub right: String,
}

impl Range {
    pub fn new(left: &str, right: &str) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}
